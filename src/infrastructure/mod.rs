//! Infrastructure layer - artifact and dataset loading, services, observability

pub mod artifacts;
pub mod dataset;
pub mod logging;
pub mod observability;
pub mod services;
