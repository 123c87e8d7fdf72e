//! CLI module - command-line interface
//!
//! Contains the REPL and shell command parsing.

pub mod commands;
pub mod repl;

pub use repl::Repl;
