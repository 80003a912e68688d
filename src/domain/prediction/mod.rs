//! Prediction domain - scaler, linear model, and contribution breakdown

mod model;
mod predictor;
mod result;
mod scaler;

pub use model::LinearRegression;
pub use predictor::PricePredictor;
pub use result::{Contribution, PredictionResult};
pub use scaler::StandardScaler;
