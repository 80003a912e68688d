//! Ordered feature vector consumed by the scaler and the model

use std::sync::Arc;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::domain::DomainError;

/// Feature values in exactly the order of the model's feature names
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Arc<[String]>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Pair values with feature names; lengths must agree
    pub fn new(names: Arc<[String]>, values: Vec<f64>) -> Result<Self, DomainError> {
        if names.len() != values.len() {
            return Err(DomainError::schema_mismatch(format!(
                "{} values for {} feature names",
                values.len(),
                names.len()
            )));
        }

        Ok(Self { names, values })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named feature
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.values[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
