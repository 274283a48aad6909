//! `history` subcommand handlers

use crate::cli::CliError;
use crate::service::Mapper;
use crate::storage::StorageBackend;

pub fn handle_list<B: StorageBackend + Clone>(mapper: &Mapper<B>) -> Result<(), CliError> {
    if mapper.history().is_empty() {
        println!("No insertions recorded");
        return Ok(());
    }
    for entry in mapper.history().entries() {
        println!(
            "{}  {:<30} {} fields  ({})",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.identifier,
            entry.field_count,
            entry.id
        );
    }
    Ok(())
}

pub fn handle_clear<B: StorageBackend + Clone>(mapper: &mut Mapper<B>) -> Result<(), CliError> {
    mapper.history_mut().clear()?;
    println!("History cleared");
    Ok(())
}
