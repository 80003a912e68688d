//! Domain layer - Core business logic and entities

pub mod error;
pub mod feature;
pub mod laptop;
pub mod prediction;

pub use error::DomainError;
pub use feature::{FeatureVector, FeatureVectorBuilder, SchemaPolicy, SchemaReport};
pub use laptop::{
    validate_laptop_spec, CategoryCatalog, LaptopSpec, LaptopValidationError, Resolution,
};
pub use prediction::{
    Contribution, LinearRegression, PredictionResult, PricePredictor, StandardScaler,
};
