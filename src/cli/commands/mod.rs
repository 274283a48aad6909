//! CLI command handlers

pub mod export;
pub mod history;
pub mod identifiers;
pub mod map;
pub mod worksheet;

use std::io::Read;
use std::path::Path;

use clap::Args;

use crate::cli::CliError;
use crate::models::{MatchPolicy, Schema};
use crate::service::Mapper;
use crate::storage::FileStorageBackend;

/// Match policy flags shared by the map and insert commands.
#[derive(Debug, Args)]
pub struct PolicyArgs {
    /// Disable exact field-name matching
    #[arg(long)]
    pub no_exact: bool,
    /// Disable partial (substring) matching
    #[arg(long)]
    pub no_partial: bool,
    /// Compare field and column names case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,
}

impl PolicyArgs {
    pub fn to_policy(&self) -> MatchPolicy {
        MatchPolicy {
            exact_match: !self.no_exact,
            partial_match: !self.no_partial,
            case_insensitive: !self.case_sensitive,
        }
    }
}

/// Open the mapper over a file-backed store rooted at `data_dir`.
pub fn open_mapper(data_dir: &Path) -> Result<Mapper<FileStorageBackend>, CliError> {
    let backend = FileStorageBackend::new(data_dir);
    Ok(Mapper::open(backend, Schema::clinical_study())?)
}

/// Read a JSON document from a file path, or from stdin when `input`
/// is `-`.
pub fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::StdinReadError(e.to_string()))?;
        return Ok(buffer);
    }
    let path = Path::new(input);
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))
}
