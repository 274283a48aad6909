//! CLI binary entry point for json-mapper-cli

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use json_mapper_sdk::cli::commands::export::{handle_export, ExportArgs};
use json_mapper_sdk::cli::commands::map::{handle_insert, handle_map, InsertArgs, MapArgs};
use json_mapper_sdk::cli::commands::{history, identifiers, open_mapper, worksheet};

#[derive(Parser)]
#[command(name = "json-mapper-cli")]
#[command(about = "Map JSON documents onto a fixed spreadsheet schema")]
#[command(version)]
struct Cli {
    /// Directory holding the persisted store
    #[arg(long, global = true, default_value = ".json-mapper")]
    data_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview how a JSON document maps onto the schema
    Map(MapArgs),
    /// Insert a JSON document into the current worksheet
    Insert(InsertArgs),
    /// Export the current worksheet or the latest insertion
    Export(ExportArgs),
    /// Manage worksheets
    Worksheet {
        #[command(subcommand)]
        command: WorksheetCommands,
    },
    /// Show or clear the insertion history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Manage the known identifier list
    Identifiers {
        #[command(subcommand)]
        command: IdentifierCommands,
    },
}

#[derive(Subcommand)]
enum WorksheetCommands {
    /// List worksheets; the current one is marked with '*'
    List,
    /// Create a worksheet and make it current
    Create { name: String },
    /// Switch the current worksheet
    Switch { id: String },
    /// Delete a worksheet (the default worksheet cannot be deleted)
    Delete { id: String },
}

#[derive(Subcommand)]
enum HistoryCommands {
    List,
    Clear,
}

#[derive(Subcommand)]
enum IdentifierCommands {
    List,
    Add { name: String },
    Remove { name: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut mapper = open_mapper(&cli.data_dir)?;

    match &cli.command {
        Commands::Map(args) => handle_map(&mut mapper, args)?,
        Commands::Insert(args) => handle_insert(&mut mapper, args)?,
        Commands::Export(args) => handle_export(&mapper, args)?,
        Commands::Worksheet { command } => match command {
            WorksheetCommands::List => worksheet::handle_list(&mapper)?,
            WorksheetCommands::Create { name } => worksheet::handle_create(&mut mapper, name)?,
            WorksheetCommands::Switch { id } => worksheet::handle_switch(&mut mapper, id)?,
            WorksheetCommands::Delete { id } => worksheet::handle_delete(&mut mapper, id)?,
        },
        Commands::History { command } => match command {
            HistoryCommands::List => history::handle_list(&mapper)?,
            HistoryCommands::Clear => history::handle_clear(&mut mapper)?,
        },
        Commands::Identifiers { command } => match command {
            IdentifierCommands::List => identifiers::handle_list(&mapper)?,
            IdentifierCommands::Add { name } => identifiers::handle_add(&mut mapper, name)?,
            IdentifierCommands::Remove { name } => identifiers::handle_remove(&mut mapper, name)?,
        },
    }

    Ok(())
}
