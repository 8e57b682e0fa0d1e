use std::collections::HashSet;
use thiserror::Error;

use super::data::PestRecord;

/// The twelve-entry reference list shipped inside the binary.
/// Compiled in so the directory works with no data directory and no network.
const CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

/// Problems with the bundled catalog payload. These can only surface at
/// startup; once a `Catalog` exists it is immutable.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse bundled catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bundled catalog contains no records")]
    Empty,
    #[error("duplicate catalog id: {0}")]
    DuplicateId(u32),
}

/// The Catalog holds the fixed reference list of known pests.
/// It is seeded once at startup and never mutated during a session.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PestRecord>,
}

impl Catalog {
    /// Load the catalog bundled with the binary.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parse and validate a catalog payload.
    /// Record order in the payload is the display order everywhere.
    fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<PestRecord> = serde_json::from_str(json)?;

        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        // Card keys and detail anchors rely on unique ids
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Catalog { records })
    }

    /// All records in catalog order
    pub fn records(&self) -> &[PestRecord] {
        &self.records
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
