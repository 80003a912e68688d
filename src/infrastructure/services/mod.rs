//! Application services

mod prediction_service;

pub use prediction_service::PredictionService;

#[cfg(test)]
pub(crate) use prediction_service::fixtures;
