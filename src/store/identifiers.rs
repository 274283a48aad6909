//! Known-identifier registry
//!
//! Persisted list of identifier values (study PDF names) offered for row
//! insertion, kept sorted, under the `pdfNamesList` key. Seeded with the
//! default study list when storage is empty.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::storage::{keys, StorageBackend, StorageError};
use crate::store::StoreError;

static DEFAULT_IDENTIFIERS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "Lindeskog2018.pdf",
        "Champeaux2019.pdf",
        "Chen1992.pdf",
        "Fernandes2022.pdf",
        "Hernandez-Duranetal..pdf",
        "HernandezDuran2023.pdf",
        "Hornig1994.pdf",
        "Jauss1999.pdf",
        "Kim2016.pdf",
        "Kudo2007(1).pdf",
        "Kwon2021.pdf",
        "Lee2019.pdf",
        "Mattar2021.pdf",
        "Pfefferkorn2009.pdf",
        "Raco2003.pdf",
        "Taylor2020.pdf",
        "Tsitsopoulos2011_2.pdf",
        "Tsitsopoulos2011.pdf",
        "Wang2022.pdf",
        "Winslow2023.pdf",
        "Won2023.pdf",
        "wonetal..pdf",
        "Won2024.pdf",
        "Wu2023.pdf",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

/// Storage-backed identifier list.
pub struct IdentifierRegistry<B: StorageBackend> {
    backend: B,
    names: Vec<String>,
}

impl<B: StorageBackend> IdentifierRegistry<B> {
    /// Load the registry, falling back to the default list when storage
    /// is empty.
    pub fn load(backend: B) -> Result<Self, StoreError> {
        let names = match backend.read(keys::IDENTIFIERS)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Serialization(format!("identifiers: {e}")))?,
            None => DEFAULT_IDENTIFIERS.clone(),
        };
        Ok(Self { backend, names })
    }

    /// Add a name, keeping the list sorted. Returns `Ok(false)` when the
    /// name is already known.
    pub fn add(&mut self, name: &str) -> Result<bool, StoreError> {
        if self.names.iter().any(|n| n == name) {
            return Ok(false);
        }
        self.names.push(name.to_string());
        self.names.sort();
        self.persist()?;
        debug!(name, "added identifier");
        Ok(true)
    }

    /// Remove a name. Returns `Ok(false)` when it was not present.
    pub fn remove(&mut self, name: &str) -> Result<bool, StoreError> {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        if self.names.len() == before {
            return Ok(false);
        }
        self.persist()?;
        debug!(name, "removed identifier");
        Ok(true)
    }

    /// Known identifier values in sorted order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` is a known identifier.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.names)
            .map_err(|e| StorageError::Serialization(format!("identifiers: {e}")))?;
        self.backend.write(keys::IDENTIFIERS, &raw)
    }
}
