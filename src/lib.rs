//! Facade over `multijust-core` for embedding hosts
pub use multijust_core::*;
