//! CLI-specific error types

use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::import::ImportError;
use crate::store::StoreError;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Failed to read stdin: {0}")]
    StdinReadError(String),

    #[error("Nothing to export: {0}")]
    NothingToExport(String),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
