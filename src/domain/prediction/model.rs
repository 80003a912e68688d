//! Fitted linear regression model

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearRegression {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Result<Self, DomainError> {
        let model = Self {
            intercept,
            coefficients,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.intercept.is_finite() {
            return Err(DomainError::invalid_artifact("model", "intercept is not finite"));
        }

        if let Some(idx) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(DomainError::invalid_artifact(
                "model",
                format!("coefficients[{}] is not finite", idx),
            ));
        }

        Ok(())
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Per-feature terms `scaled[i] * coefficient[i]`
    pub fn terms(&self, scaled: &[f64]) -> Result<Vec<f64>, DomainError> {
        if scaled.len() != self.n_features() {
            return Err(DomainError::schema_mismatch(format!(
                "model expects {} features, got {}",
                self.n_features(),
                scaled.len()
            )));
        }

        Ok(scaled
            .iter()
            .zip(&self.coefficients)
            .map(|(x, coef)| x * coef)
            .collect())
    }

    /// Linear score: intercept plus the dot product with the coefficients
    pub fn predict(&self, scaled: &[f64]) -> Result<f64, DomainError> {
        Ok(self.intercept + self.terms(scaled)?.iter().sum::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict() {
        let model = LinearRegression::new(100.0, vec![2.0, -3.0]).unwrap();
        assert_eq!(model.predict(&[1.0, 1.0]).unwrap(), 99.0);
        assert_eq!(model.terms(&[2.0, 0.5]).unwrap(), vec![4.0, -1.5]);
    }

    #[test]
    fn test_wrong_length() {
        let model = LinearRegression::new(0.0, vec![1.0, 1.0]).unwrap();
        assert!(model.predict(&[1.0]).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(LinearRegression::new(f64::NAN, vec![1.0]).is_err());
        assert!(LinearRegression::new(0.0, vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_deserialize() {
        let model: LinearRegression =
            serde_json::from_str(r#"{"intercept": 1134.9, "coefficients": [12.5, -4.0]}"#)
                .unwrap();
        assert_eq!(model.intercept(), 1134.9);
        assert_eq!(model.n_features(), 2);
    }
}
