//! Artifact loading from exported JSON files

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ArtifactsConfig;
use crate::domain::{DomainError, LinearRegression, PricePredictor, StandardScaler};

/// Read-only model artifacts, loaded once at startup
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    feature_names: Arc<[String]>,
    predictor: PricePredictor,
}

impl ArtifactStore {
    /// Load the model, scaler, and feature names from the configured paths
    pub fn load(config: &ArtifactsConfig) -> Result<Self, DomainError> {
        info!(
            model = %config.model_path,
            scaler = %config.scaler_path,
            features = %config.features_path,
            "Loading model artifacts"
        );

        let model = read_artifact("model", &config.model_path)?;
        let scaler = read_artifact("scaler", &config.scaler_path)?;
        let features = read_artifact("features", &config.features_path)?;

        let store = Self::from_json(&model, &scaler, &features)?;
        info!(features = store.feature_names.len(), "Model artifacts loaded");

        Ok(store)
    }

    /// Parse and cross-check the three artifacts
    pub fn from_json(model: &str, scaler: &str, features: &str) -> Result<Self, DomainError> {
        let model: LinearRegression = parse_artifact("model", model)?;
        model.validate()?;

        let scaler: StandardScaler = parse_artifact("scaler", scaler)?;
        scaler.validate()?;

        let feature_names: Vec<String> = parse_artifact("features", features)?;
        validate_feature_names(&feature_names)?;

        if scaler.n_features() != feature_names.len() {
            return Err(DomainError::invalid_artifact(
                "scaler",
                format!(
                    "fitted on {} features but {} feature names were loaded",
                    scaler.n_features(),
                    feature_names.len()
                ),
            ));
        }

        let predictor = PricePredictor::new(scaler, model)?;
        debug!(intercept = predictor.intercept(), "Artifacts cross-checked");

        Ok(Self {
            feature_names: feature_names.into(),
            predictor,
        })
    }

    pub fn feature_names(&self) -> &Arc<[String]> {
        &self.feature_names
    }

    pub fn predictor(&self) -> &PricePredictor {
        &self.predictor
    }

    pub fn into_parts(self) -> (Arc<[String]>, PricePredictor) {
        (self.feature_names, self.predictor)
    }
}

fn read_artifact(artifact: &str, path: impl AsRef<Path>) -> Result<String, DomainError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        DomainError::io(format!(
            "failed to read {} artifact '{}': {}",
            artifact,
            path.display(),
            e
        ))
    })
}

fn parse_artifact<T: DeserializeOwned>(artifact: &str, content: &str) -> Result<T, DomainError> {
    serde_json::from_str(content)
        .map_err(|e| DomainError::invalid_artifact(artifact, format!("invalid JSON: {}", e)))
}

fn validate_feature_names(names: &[String]) -> Result<(), DomainError> {
    if names.is_empty() {
        return Err(DomainError::invalid_artifact("features", "feature list is empty"));
    }

    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_artifact(
                "features",
                "feature names cannot be blank",
            ));
        }

        if !seen.insert(name.as_str()) {
            return Err(DomainError::invalid_artifact(
                "features",
                format!("duplicate feature name '{}'", name),
            ));
        }
    }

    Ok(())
}
