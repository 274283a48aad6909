//! `identifiers` subcommand handlers

use crate::cli::CliError;
use crate::service::Mapper;
use crate::storage::StorageBackend;

pub fn handle_list<B: StorageBackend + Clone>(mapper: &Mapper<B>) -> Result<(), CliError> {
    for name in mapper.identifiers().names() {
        println!("{name}");
    }
    Ok(())
}

pub fn handle_add<B: StorageBackend + Clone>(
    mapper: &mut Mapper<B>,
    name: &str,
) -> Result<(), CliError> {
    if mapper.identifiers_mut().add(name)? {
        println!("Added identifier '{name}'");
    } else {
        println!("Identifier '{name}' already known");
    }
    Ok(())
}

pub fn handle_remove<B: StorageBackend + Clone>(
    mapper: &mut Mapper<B>,
    name: &str,
) -> Result<(), CliError> {
    if mapper.identifiers_mut().remove(name)? {
        println!("Removed identifier '{name}'");
    } else {
        println!("Identifier '{name}' was not known");
    }
    Ok(())
}
