//! Core types, configuration, and errors for convgen.
//!
//! This crate provides the foundational types and abstractions used across
//! the convgen workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`TypeName`, `NamingScheme`)
//! - Error hierarchy with contextual information
//! - Generator configuration types
//! - CLI support types (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use types::{NamingScheme, TypeName};
