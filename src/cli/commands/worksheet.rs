//! `worksheet` subcommand handlers

use crate::cli::CliError;
use crate::service::Mapper;
use crate::storage::StorageBackend;

pub fn handle_list<B: StorageBackend + Clone>(mapper: &Mapper<B>) -> Result<(), CliError> {
    let current = mapper.worksheets().current_id().to_string();
    for (id, worksheet) in mapper.worksheets().worksheets() {
        let marker = if id == current { "*" } else { " " };
        println!(
            "{marker} {id:<16} {:<30} {} rows (modified {})",
            worksheet.name,
            worksheet.row_count(),
            worksheet.modified_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

pub fn handle_create<B: StorageBackend + Clone>(
    mapper: &mut Mapper<B>,
    name: &str,
) -> Result<(), CliError> {
    let id = mapper.worksheets_mut().create(name)?;
    println!("Created worksheet '{name}' ({id}) and made it current");
    Ok(())
}

pub fn handle_switch<B: StorageBackend + Clone>(
    mapper: &mut Mapper<B>,
    id: &str,
) -> Result<(), CliError> {
    if mapper.worksheets_mut().switch_current(id)? {
        println!("Switched to worksheet {id}");
    } else {
        println!("No worksheet with id {id}; current worksheet unchanged");
    }
    Ok(())
}

pub fn handle_delete<B: StorageBackend + Clone>(
    mapper: &mut Mapper<B>,
    id: &str,
) -> Result<(), CliError> {
    if mapper.worksheets_mut().delete(id)? {
        println!("Deleted worksheet {id}");
    } else {
        println!("Worksheet {id} was not deleted (default or unknown id)");
    }
    Ok(())
}
