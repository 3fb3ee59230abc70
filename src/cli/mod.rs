//! Command-line interface module
//!
//! Handles argument parsing and dispatching to the operations

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
