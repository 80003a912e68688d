//! Application state for shared services

use std::sync::Arc;

use crate::config::PredictionConfig;
use crate::domain::{CategoryCatalog, DomainError, LaptopSpec, PredictionResult, SchemaReport};
use crate::infrastructure::services::PredictionService;

/// Application state shared by all handlers; immutable after startup
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<dyn PredictionServiceTrait>,
    pub settings: Arc<PredictionConfig>,
}

impl AppState {
    pub fn new(
        prediction_service: Arc<dyn PredictionServiceTrait>,
        settings: PredictionConfig,
    ) -> Self {
        Self {
            prediction_service,
            settings: Arc::new(settings),
        }
    }
}

/// Trait for prediction service operations
pub trait PredictionServiceTrait: Send + Sync {
    fn catalog(&self) -> &CategoryCatalog;
    fn feature_count(&self) -> usize;
    fn schema_report(&self) -> &SchemaReport;
    fn predict(&self, spec: &LaptopSpec) -> Result<PredictionResult, DomainError>;
}

impl PredictionServiceTrait for PredictionService {
    fn catalog(&self) -> &CategoryCatalog {
        PredictionService::catalog(self)
    }

    fn feature_count(&self) -> usize {
        PredictionService::feature_count(self)
    }

    fn schema_report(&self) -> &SchemaReport {
        PredictionService::schema_report(self)
    }

    fn predict(&self, spec: &LaptopSpec) -> Result<PredictionResult, DomainError> {
        PredictionService::predict(self, spec)
    }
}
