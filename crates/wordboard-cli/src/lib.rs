//! # wordboard-cli
//!
//! Thin command-line surface over the word store: parse, resolve identity and
//! config, run one store operation, render the result as text or JSON.

pub mod cli;
pub mod error;

mod commands;
mod render;

pub use cli::{run, Cli, Command};
pub use error::{CliError, CliResult};
