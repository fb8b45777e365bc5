//! Command implementations
//!
//! Each command is a module with an execute function that takes the parsed
//! configuration and performs the operation against an export directory.

pub mod convert;

// Re-export execute functions for convenience
pub use convert::execute as convert;
