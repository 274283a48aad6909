//! `map` and `insert` command handlers

use clap::Args;

use crate::cli::commands::PolicyArgs;
use crate::cli::CliError;
use crate::service::Mapper;
use crate::storage::StorageBackend;

#[derive(Debug, Args)]
pub struct MapArgs {
    /// Input JSON file path, or '-' for stdin
    pub input: String,
    /// Print the full mapping analysis instead of the summary table
    #[arg(long)]
    pub details: bool,
    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Input JSON file path, or '-' for stdin
    pub input: String,
    /// Identifier value for the new row (e.g. the source PDF name)
    #[arg(short, long)]
    pub identifier: String,
    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Preview the mapping report for a document without inserting anything.
pub fn handle_map<B: StorageBackend + Clone>(
    mapper: &mut Mapper<B>,
    args: &MapArgs,
) -> Result<(), CliError> {
    let text = crate::cli::commands::read_input(&args.input)?;
    mapper.set_policy(args.policy.to_policy());
    let report = mapper.process_document(&text)?;

    if args.details {
        println!("{}", report.details(mapper.schema()));
        return Ok(());
    }

    for mapping in report.mappings() {
        let column = mapping.spreadsheet_column.as_deref().unwrap_or("-");
        println!(
            "{:<40} -> {:<40} [{}]",
            mapping.json_field, column, mapping.match_type
        );
    }
    println!();
    println!(
        "{} fields, {} mapped ({} exact, {} partial), {} unmapped",
        report.total_fields(),
        report.mapped_count(),
        report.exact_count(),
        report.partial_count(),
        report.unmapped_count()
    );
    Ok(())
}

/// Process a document and insert it into the current worksheet.
pub fn handle_insert<B: StorageBackend + Clone>(
    mapper: &mut Mapper<B>,
    args: &InsertArgs,
) -> Result<(), CliError> {
    let text = crate::cli::commands::read_input(&args.input)?;
    mapper.set_policy(args.policy.to_policy());
    let report = mapper.process_document(&text)?;
    let row = mapper.insert(&args.identifier)?;

    println!(
        "Inserted row {} for '{}' into worksheet '{}'",
        row.id,
        args.identifier,
        mapper.worksheets().current().name
    );
    println!(
        "{} fields inserted ({} exact, {} partial), {} skipped",
        report.mapped_count(),
        report.exact_count(),
        report.partial_count(),
        report.unmapped_count()
    );
    Ok(())
}
