//! Prediction service - validation, feature encoding, and scoring per request

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::{
    validate_laptop_spec, CategoryCatalog, DomainError, FeatureVector, FeatureVectorBuilder,
    LaptopSpec, PredictionResult, PricePredictor, SchemaPolicy, SchemaReport,
};
use crate::infrastructure::artifacts::ArtifactStore;
use crate::infrastructure::observability::record_prediction;

/// Stateless per-request prediction over artifacts loaded at startup
#[derive(Debug, Clone)]
pub struct PredictionService {
    builder: FeatureVectorBuilder,
    predictor: PricePredictor,
}

impl PredictionService {
    pub fn new(builder: FeatureVectorBuilder, predictor: PricePredictor) -> Result<Self, DomainError> {
        if builder.feature_names().len() != predictor.n_features() {
            return Err(DomainError::scaler_shape_mismatch(
                predictor.n_features(),
                builder.feature_names().len(),
            ));
        }

        Ok(Self { builder, predictor })
    }

    /// Assemble the service from the loaded catalog and artifacts
    pub fn from_artifacts(
        catalog: CategoryCatalog,
        artifacts: ArtifactStore,
        policy: SchemaPolicy,
    ) -> Result<Self, DomainError> {
        let (feature_names, predictor) = artifacts.into_parts();
        let builder = FeatureVectorBuilder::new(catalog, feature_names, policy)?;

        info!(
            features = predictor.n_features(),
            policy = ?policy,
            schema = %builder.report(),
            "Prediction service ready"
        );

        Self::new(builder, predictor)
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        self.builder.catalog()
    }

    pub fn schema_report(&self) -> &SchemaReport {
        self.builder.report()
    }

    pub fn feature_count(&self) -> usize {
        self.predictor.n_features()
    }

    /// Validate a spec and encode it as model input
    pub fn encode(&self, spec: &LaptopSpec) -> Result<FeatureVector, DomainError> {
        validate_laptop_spec(spec, self.catalog())?;
        self.builder.build(spec)
    }

    /// Predict the price of a laptop with its full contribution breakdown
    pub fn predict(&self, spec: &LaptopSpec) -> Result<PredictionResult, DomainError> {
        let start = Instant::now();
        let result = self
            .encode(spec)
            .and_then(|vector| self.predictor.predict(&vector));

        match &result {
            Ok(prediction) => {
                debug!(
                    manufacturer = %spec.manufacturer,
                    product_type = %spec.product_type,
                    price = prediction.price,
                    "Prediction computed"
                );
            }
            Err(e) if e.is_client_error() => {
                debug!(error = %e, "Rejected laptop specification");
            }
            Err(e) => {
                warn!(error = %e, "Prediction failed");
            }
        }

        record_prediction(
            result.as_ref().map(|prediction| prediction.price),
            start.elapsed(),
        );

        result
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::domain::StandardScaler;

    #[test]
    fn test_predict_macbook() {
        let service = service();
        let result = service.predict(&macbook()).unwrap();

        assert_eq!(result.contributions.len(), FEATURES.len());
        assert!(result.price.is_finite());

        let reconstructed = result.contribution_total() + predictor().intercept();
        assert!((reconstructed - result.price).abs() < 1e-6);
    }

    #[test]
    fn test_encode_macbook() {
        let vector = service().encode(&macbook()).unwrap();

        assert_eq!(vector.get("IPS_Panel"), Some(1.0));
        assert_eq!(vector.get("Pixels"), Some(4_096_000.0));
        assert_eq!(vector.get("Storage_Type_SSD"), Some(1.0));
        assert_eq!(vector.get("Storage_Type_HDD"), Some(0.0));
        assert_eq!(vector.get("Storage_Type_Hybrid"), Some(0.0));
    }

    #[test]
    fn test_invalid_spec_is_validation_error() {
        let spec = macbook().with_weight_kg(7.5);
        let err = service().predict(&spec).unwrap_err();

        assert!(err.is_client_error());
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn test_boundary_values_predict() {
        let service = service();

        assert!(service.predict(&macbook().with_weight_kg(0.5)).is_ok());
        assert!(service.predict(&macbook().with_weight_kg(5.0)).is_ok());
        assert!(service.predict(&macbook().with_storage(32, "SSD")).is_ok());
        assert!(service.predict(&macbook().with_storage(2000, "HDD")).is_ok());
    }

    #[test]
    fn test_mismatched_predictor_rejected() {
        let builder =
            FeatureVectorBuilder::new(catalog(), feature_names(), SchemaPolicy::Strict).unwrap();
        let small = PricePredictor::new(
            StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap(),
            crate::domain::LinearRegression::new(0.0, vec![1.0; 3]).unwrap(),
        )
        .unwrap();

        let err = PredictionService::new(builder, small).unwrap_err();
        assert!(matches!(err, DomainError::ScalerShapeMismatch { .. }));
    }

    #[test]
    fn test_from_artifacts_lenient_reports_schema() {
        let artifacts = ArtifactStore::from_json(
            r#"{"intercept": 500.0, "coefficients": [1.0, 2.0, 3.0]}"#,
            r#"{"mean": [8.0, 0.0, 0.0], "scale": [4.0, 1.0, 1.0]}"#,
            r#"["Ram", "Company_Apple", "Company_Razer"]"#,
        )
        .unwrap();

        let service =
            PredictionService::from_artifacts(catalog(), artifacts, SchemaPolicy::Lenient).unwrap();

        assert_eq!(service.feature_count(), 3);
        assert_eq!(service.schema_report().zero_filled, vec!["Company_Razer".to_string()]);
        assert!(service.schema_report().dropped.contains(&"Company_Dell".to_string()));

        let vector = service.encode(&macbook()).unwrap();
        assert_eq!(vector.values(), [8.0, 1.0, 0.0]);
    }

    #[test]
    fn test_from_artifacts_strict_fails() {
        let artifacts = ArtifactStore::from_json(
            r#"{"intercept": 500.0, "coefficients": [1.0]}"#,
            r#"{"mean": [8.0], "scale": [4.0]}"#,
            r#"["Ram"]"#,
        )
        .unwrap();

        let err = PredictionService::from_artifacts(catalog(), artifacts, SchemaPolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, DomainError::SchemaMismatch { .. }));
    }
}
