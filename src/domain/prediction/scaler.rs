//! Pre-fitted standardization

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Standard scaler with training-time mean and scale per feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, DomainError> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Check internal consistency of deserialized parameters
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.mean.len() != self.scale.len() {
            return Err(DomainError::invalid_artifact(
                "scaler",
                format!(
                    "mean has {} entries but scale has {}",
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }

        if let Some(idx) = self.mean.iter().position(|m| !m.is_finite()) {
            return Err(DomainError::invalid_artifact(
                "scaler",
                format!("mean[{}] is not finite", idx),
            ));
        }

        if let Some(idx) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(DomainError::invalid_artifact(
                "scaler",
                format!("scale[{}] must be finite and non-zero", idx),
            ));
        }

        Ok(())
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Standardize a feature row: `(x - mean) / scale`
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>, DomainError> {
        if values.len() != self.n_features() {
            return Err(DomainError::scaler_shape_mismatch(
                self.n_features(),
                values.len(),
            ));
        }

        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
