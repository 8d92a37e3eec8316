//! Codemix CLI library
//!
//! This library provides the command-line interface for tagging
//! Hindi-English codeswitched token streams and scoring the result.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
