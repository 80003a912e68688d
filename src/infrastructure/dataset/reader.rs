//! Reference dataset reader
//!
//! The dataset is only used to enumerate the categorical values the model was
//! trained on. It is read once, validated, and reduced to a catalog.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

use crate::domain::{CategoryCatalog, DomainError};

pub const MANUFACTURER_COLUMN: &str = "Company";
pub const PRODUCT_TYPE_COLUMN: &str = "TypeName";

/// Line prefixes left behind by an unresolved version-control merge
const CONFLICT_MARKERS: [&str; 3] = ["<<<<<<<", "=======", ">>>>>>>"];

/// Categorical values enumerated from the reference dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataset {
    pub manufacturers: Vec<String>,
    pub product_types: Vec<String>,
    pub rows: usize,
}

impl ReferenceDataset {
    /// Load and validate the dataset at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading reference dataset");

        let bytes = std::fs::read(path).map_err(|e| {
            DomainError::io(format!(
                "failed to read dataset '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dataset = Self::from_bytes(&bytes)?;
        info!(
            rows = dataset.rows,
            manufacturers = dataset.manufacturers.len(),
            product_types = dataset.product_types.len(),
            "Reference dataset loaded"
        );

        Ok(dataset)
    }

    /// Parse ISO-8859-1 encoded CSV content
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        let text = decode_latin1(bytes);
        reject_conflict_markers(&text)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| DomainError::malformed_dataset(format!("unreadable header: {}", e)))?
            .clone();

        let manufacturer_idx = column_index(&headers, MANUFACTURER_COLUMN)?;
        let product_type_idx = column_index(&headers, PRODUCT_TYPE_COLUMN)?;

        let mut manufacturers = BTreeSet::new();
        let mut product_types = BTreeSet::new();
        let mut rows = 0;

        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                DomainError::malformed_dataset(format!("record {}: {}", idx + 1, e))
            })?;
            rows += 1;

            if let Some(value) = record.get(manufacturer_idx).filter(|v| !v.is_empty()) {
                manufacturers.insert(value.to_string());
            }

            if let Some(value) = record.get(product_type_idx).filter(|v| !v.is_empty()) {
                product_types.insert(value.to_string());
            }
        }

        if manufacturers.is_empty() {
            return Err(DomainError::malformed_dataset(format!(
                "column '{}' has no values",
                MANUFACTURER_COLUMN
            )));
        }

        if product_types.is_empty() {
            return Err(DomainError::malformed_dataset(format!(
                "column '{}' has no values",
                PRODUCT_TYPE_COLUMN
            )));
        }

        Ok(Self {
            manufacturers: manufacturers.into_iter().collect(),
            product_types: product_types.into_iter().collect(),
            rows,
        })
    }

    pub fn into_catalog(self) -> CategoryCatalog {
        CategoryCatalog::new(self.manufacturers, self.product_types)
    }
}

/// ISO-8859-1 maps every byte to the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn reject_conflict_markers(text: &str) -> Result<(), DomainError> {
    for (idx, line) in text.lines().enumerate() {
        if CONFLICT_MARKERS.iter().any(|marker| line.starts_with(marker)) {
            return Err(DomainError::malformed_dataset(format!(
                "line {} contains a merge conflict marker; clean the dataset before loading",
                idx + 1
            )));
        }
    }

    Ok(())
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, DomainError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DomainError::column_not_found(column))
}
