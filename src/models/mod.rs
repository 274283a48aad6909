//! Core data model for the field-mapping engine

pub mod history;
pub mod mapping;
pub mod row;
pub mod schema;
pub mod worksheet;

pub use history::HistoryEntry;
pub use mapping::{FieldMapping, MappingReport, MatchPolicy, MatchType};
pub use row::Row;
pub use schema::Schema;
pub use worksheet::Worksheet;
