//! locus CLI library
//!
//! This library provides the command-line interface for locus: locating
//! stored playbook rules in plain-text documents.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
