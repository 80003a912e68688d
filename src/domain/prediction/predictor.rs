//! Scaling, scoring, and contribution breakdown

use super::{Contribution, LinearRegression, PredictionResult, StandardScaler};
use crate::domain::feature::FeatureVector;
use crate::domain::DomainError;

/// Pairs a fitted scaler with a fitted model over the same feature layout
#[derive(Debug, Clone)]
pub struct PricePredictor {
    scaler: StandardScaler,
    model: LinearRegression,
}

impl PricePredictor {
    /// Both artifacts must agree on the feature count
    pub fn new(scaler: StandardScaler, model: LinearRegression) -> Result<Self, DomainError> {
        if scaler.n_features() != model.n_features() {
            return Err(DomainError::invalid_artifact(
                "model",
                format!(
                    "model has {} coefficients but scaler has {} features",
                    model.n_features(),
                    scaler.n_features()
                ),
            ));
        }

        Ok(Self { scaler, model })
    }

    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }

    pub fn intercept(&self) -> f64 {
        self.model.intercept()
    }

    /// Scale the vector, score it, and break the score into contributions
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, DomainError> {
        let scaled = self.scaler.transform(vector.values())?;
        let terms = self.model.terms(&scaled)?;
        let price = self.model.intercept() + terms.iter().sum::<f64>();

        let contributions = vector
            .names()
            .iter()
            .zip(terms)
            .map(|(name, value)| Contribution::new(name.clone(), value))
            .collect();

        Ok(PredictionResult::new(price, contributions))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn vector(values: Vec<f64>) -> FeatureVector {
        let names: Arc<[String]> = (0..values.len()).map(|i| format!("f{}", i)).collect();
        FeatureVector::new(names, values).unwrap()
    }

    fn predictor() -> PricePredictor {
        PricePredictor::new(
            StandardScaler::new(vec![15.0, 8.0, 2.0], vec![1.5, 4.0, 0.5]).unwrap(),
            LinearRegression::new(1100.0, vec![-20.0, 310.0, -45.0]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_prediction_equals_intercept_plus_contributions() {
        let result = predictor().predict(&vector(vec![13.3, 16.0, 1.3])).unwrap();

        let expected = 1100.0 + (13.3 - 15.0) / 1.5 * -20.0 + 2.0 * 310.0 + (-1.4) * -45.0;
        assert!((result.price - expected).abs() < 1e-9);
        assert!((result.contribution_total() + predictor().intercept() - result.price).abs() < 1e-9);
    }

    #[test]
    fn test_contributions_sorted() {
        let result = predictor().predict(&vector(vec![13.3, 16.0, 1.3])).unwrap();

        assert_eq!(result.contributions.len(), 3);
        assert_eq!(result.contributions[0].feature, "f1");
        assert!(
            result
                .contributions
                .windows(2)
                .all(|pair| pair[0].value >= pair[1].value)
        );
    }

    #[test]
    fn test_at_mean_predicts_intercept() {
        let result = predictor().predict(&vector(vec![15.0, 8.0, 2.0])).unwrap();
        assert_eq!(result.price, 1100.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = predictor().predict(&vector(vec![1.0, 2.0])).unwrap_err();
        assert!(matches!(err, DomainError::ScalerShapeMismatch { .. }));
    }

    #[test]
    fn test_artifact_disagreement() {
        let result = PricePredictor::new(
            StandardScaler::new(vec![0.0; 2], vec![1.0; 2]).unwrap(),
            LinearRegression::new(0.0, vec![1.0; 3]).unwrap(),
        );
        assert!(matches!(result, Err(DomainError::InvalidArtifact { .. })));
    }
}
