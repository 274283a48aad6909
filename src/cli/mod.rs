//! CLI support for the json-mapper-cli binary

pub mod commands;
pub mod error;

pub use error::CliError;
