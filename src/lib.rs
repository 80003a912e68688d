//! Laptop Price Predictor
//!
//! Estimates a laptop's price from its specification with a pre-trained
//! linear regression model, and reports how much each encoded feature
//! moved the estimate.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use api::state::AppState;
use infrastructure::{
    artifacts::ArtifactStore, dataset::ReferenceDataset, services::PredictionService,
};

/// Load the reference dataset and model artifacts named in the configuration
pub fn create_prediction_service(config: &AppConfig) -> anyhow::Result<PredictionService> {
    let paths = &config.artifacts;

    let dataset = ReferenceDataset::load(&paths.dataset_path)
        .with_context(|| format!("loading reference dataset {}", paths.dataset_path))?;

    let artifacts = ArtifactStore::load(paths).context("loading model artifacts")?;

    let service = PredictionService::from_artifacts(
        dataset.into_catalog(),
        artifacts,
        config.prediction.schema_policy,
    )?;

    Ok(service)
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let service = create_prediction_service(config)?;
    Ok(AppState::new(Arc::new(service), config.prediction.clone()))
}
