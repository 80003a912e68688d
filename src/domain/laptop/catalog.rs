//! Categorical value enumerations used for validation and one-hot encoding

use serde::Serialize;

use super::STORAGE_TYPES;

/// Sorted, de-duplicated categorical enumerations.
///
/// The first element of each list is the drop-first reference level, so the
/// lists are always kept in lexicographic order regardless of input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCatalog {
    manufacturers: Vec<String>,
    product_types: Vec<String>,
    storage_types: Vec<String>,
}

impl CategoryCatalog {
    /// Create a catalog with the standard storage types
    pub fn new<M, P>(manufacturers: M, product_types: P) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            manufacturers: sorted_unique(manufacturers),
            product_types: sorted_unique(product_types),
            storage_types: sorted_unique(STORAGE_TYPES),
        }
    }

    pub fn manufacturers(&self) -> &[String] {
        &self.manufacturers
    }

    pub fn product_types(&self) -> &[String] {
        &self.product_types
    }

    pub fn storage_types(&self) -> &[String] {
        &self.storage_types
    }

    pub fn has_manufacturer(&self, value: &str) -> bool {
        self.manufacturers.binary_search_by(|m| m.as_str().cmp(value)).is_ok()
    }

    pub fn has_product_type(&self, value: &str) -> bool {
        self.product_types.binary_search_by(|t| t.as_str().cmp(value)).is_ok()
    }

    pub fn has_storage_type(&self, value: &str) -> bool {
        self.storage_types.binary_search_by(|t| t.as_str().cmp(value)).is_ok()
    }
}

fn sorted_unique<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
    values.sort();
    values.dedup();
    values
}
