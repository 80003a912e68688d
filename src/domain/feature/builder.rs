//! Feature vector construction with drop-first one-hot encoding

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::{
    FeatureVector, SchemaPolicy, SchemaReport, INCHES_COLUMN, IPS_PANEL_COLUMN,
    MANUFACTURER_PREFIX, PIXELS_COLUMN, PRODUCT_TYPE_PREFIX, RAM_COLUMN, STORAGE_SIZE_COLUMN,
    STORAGE_TYPE_PREFIX, TOUCHSCREEN_COLUMN, WEIGHT_COLUMN,
};
use crate::domain::laptop::{CategoryCatalog, LaptopSpec};
use crate::domain::DomainError;

/// Column name for a one-hot encoded categorical value
pub fn one_hot_column(prefix: &str, value: &str) -> String {
    format!("{}_{}", prefix, value)
}

/// Every column the builder emits for a catalog, in emission order.
///
/// The set depends only on the catalog, never on the laptop being encoded.
pub fn generated_column_names(catalog: &CategoryCatalog) -> Vec<String> {
    let mut names: Vec<String> = [
        INCHES_COLUMN,
        RAM_COLUMN,
        WEIGHT_COLUMN,
        TOUCHSCREEN_COLUMN,
        IPS_PANEL_COLUMN,
        PIXELS_COLUMN,
        STORAGE_SIZE_COLUMN,
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();

    for (prefix, values) in categorical_fields(catalog) {
        names.extend(values.iter().skip(1).map(|value| one_hot_column(prefix, value)));
    }

    names
}

fn categorical_fields(catalog: &CategoryCatalog) -> [(&'static str, &[String]); 3] {
    [
        (MANUFACTURER_PREFIX, catalog.manufacturers()),
        (PRODUCT_TYPE_PREFIX, catalog.product_types()),
        (STORAGE_TYPE_PREFIX, catalog.storage_types()),
    ]
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Maps laptop specifications onto the model's feature layout
#[derive(Debug, Clone)]
pub struct FeatureVectorBuilder {
    catalog: CategoryCatalog,
    feature_names: Arc<[String]>,
    report: SchemaReport,
}

impl FeatureVectorBuilder {
    /// Create a builder, checking the catalog's columns against the model's
    /// features once up front.
    ///
    /// Under [`SchemaPolicy::Strict`] any zero-filled or dropped column is a
    /// `SchemaMismatch`; under [`SchemaPolicy::Lenient`] it is logged.
    pub fn new(
        catalog: CategoryCatalog,
        feature_names: Arc<[String]>,
        policy: SchemaPolicy,
    ) -> Result<Self, DomainError> {
        let report = SchemaReport::compare(&generated_column_names(&catalog), &feature_names);

        if !report.is_clean() {
            match policy {
                SchemaPolicy::Strict => {
                    return Err(DomainError::schema_mismatch(report.to_string()));
                }
                SchemaPolicy::Lenient => {
                    warn!(
                        zero_filled = report.zero_filled.len(),
                        dropped = report.dropped.len(),
                        "Feature columns do not match the model: {}",
                        report
                    );
                }
            }
        }

        Ok(Self {
            catalog,
            feature_names,
            report,
        })
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn feature_names(&self) -> &Arc<[String]> {
        &self.feature_names
    }

    pub fn report(&self) -> &SchemaReport {
        &self.report
    }

    /// Build the model input for a single specification.
    ///
    /// Values are emitted in `feature_names` order; column mismatches were
    /// already settled by the schema report in [`FeatureVectorBuilder::new`].
    pub fn build(&self, spec: &LaptopSpec) -> Result<FeatureVector, DomainError> {
        let columns = self.encode(spec);
        let lookup: HashMap<&str, f64> = columns
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();

        if !self.report.is_clean() {
            debug!(
                zero_filled = ?self.report.zero_filled,
                dropped = ?self.report.dropped,
                "Aligning feature columns"
            );
        }

        let values = self
            .feature_names
            .iter()
            .map(|name| lookup.get(name.as_str()).copied().unwrap_or(0.0))
            .collect();

        FeatureVector::new(self.feature_names.clone(), values)
    }

    /// Raw encoded columns before alignment
    fn encode(&self, spec: &LaptopSpec) -> Vec<(String, f64)> {
        let mut columns = vec![
            (INCHES_COLUMN.to_string(), spec.screen_inches),
            (RAM_COLUMN.to_string(), f64::from(spec.ram_gb)),
            (WEIGHT_COLUMN.to_string(), spec.weight_kg),
            (TOUCHSCREEN_COLUMN.to_string(), flag(spec.touchscreen)),
            (IPS_PANEL_COLUMN.to_string(), flag(spec.ips_panel)),
            (PIXELS_COLUMN.to_string(), spec.pixels() as f64),
            (STORAGE_SIZE_COLUMN.to_string(), f64::from(spec.storage_size_gb)),
        ];

        let selected = [
            spec.manufacturer.as_str(),
            spec.product_type.as_str(),
            spec.storage_type.as_str(),
        ];

        for ((prefix, values), chosen) in categorical_fields(&self.catalog).into_iter().zip(selected) {
            for value in values.iter().skip(1) {
                columns.push((one_hot_column(prefix, value), flag(value == chosen)));
            }
        }

        columns
    }
}
