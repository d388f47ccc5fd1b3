//! Convgen CLI library.
//!
//! This library provides the core functionality for the convgen CLI tool,
//! exposing modules for argument parsing, commands, and formatters that
//! can be tested.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unnecessary_wraps)] // API design requires Result for consistency across commands

pub mod cli;
pub mod commands;
pub mod formatters;

pub use cli::{Cli, Commands};
