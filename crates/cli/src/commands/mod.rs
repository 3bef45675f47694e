pub mod cache;
pub mod list;
pub mod pick;
pub mod run;

pub use cache::cache_command;
pub use list::list_command;
pub use pick::pick_command;
pub use run::run_command;
