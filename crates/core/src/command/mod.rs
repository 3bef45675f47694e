//! Task runner command generation and execution

pub mod just_command;

pub use just_command::JustCommand;
