//! `export` command handlers
//!
//! CSV exports cover the current worksheet. JSON and clipboard exports
//! describe the most recent insertion, reconstructed from the persisted
//! history log.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::cli::CliError;
use crate::export::{ClipboardExporter, CsvExporter, JsonExporter};
use crate::service::Mapper;
use crate::storage::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Current worksheet as CSV
    Csv,
    /// Most recent insertion as pretty-printed JSON
    Json,
    /// Most recent insertion as tab-separated clipboard text
    Clipboard,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_export<B: StorageBackend + Clone>(
    mapper: &Mapper<B>,
    args: &ExportArgs,
) -> Result<(), CliError> {
    let content = match args.format {
        ExportFormat::Csv => mapper.export_worksheet_csv(),
        ExportFormat::Json => {
            let entry = latest_entry(mapper)?;
            JsonExporter::export(&entry.identifier, &entry.mapped_fields, mapper.schema())?
        }
        ExportFormat::Clipboard => {
            let entry = latest_entry(mapper)?;
            ClipboardExporter::export(&entry.identifier, &entry.mapped_fields, mapper.schema())
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)
                .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
            println!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => println!("{content}"),
    }

    if args.format == ExportFormat::Csv && args.output.is_none() {
        eprintln!(
            "(suggested filename: {})",
            CsvExporter::filename(&mapper.worksheets().current().name, chrono::Utc::now())
        );
    }
    Ok(())
}

fn latest_entry<B: StorageBackend + Clone>(
    mapper: &Mapper<B>,
) -> Result<&crate::models::HistoryEntry, CliError> {
    mapper
        .history()
        .entries()
        .first()
        .ok_or_else(|| CliError::NothingToExport("no insertions in history".to_string()))
}
