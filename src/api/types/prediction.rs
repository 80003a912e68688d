//! Prediction API types

use serde::{Deserialize, Serialize};

use crate::config::PredictionConfig;
use crate::domain::laptop::{
    DEFAULT_SCREEN_INCHES, DEFAULT_STORAGE_SIZE_GB, DEFAULT_WEIGHT_KG, MAX_STORAGE_SIZE_GB,
    MAX_WEIGHT_KG, MIN_STORAGE_SIZE_GB, MIN_WEIGHT_KG, RAM_OPTIONS_GB, RESOLUTION_OPTIONS,
    SCREEN_INCHES_OPTIONS, STORAGE_TYPES,
};
use crate::domain::{CategoryCatalog, Contribution, PredictionResult};

/// Query parameters for `POST /v1/predict`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictQueryParams {
    /// Number of contributions to return, largest first
    pub limit: Option<usize>,
}

/// Response for `POST /v1/predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub price: f64,
    pub formatted_price: String,
    pub currency: String,
    pub contributions: Vec<Contribution>,
    /// Number of contributions before truncation
    pub total_contributions: usize,
}

impl PredictResponse {
    pub fn from_result(result: &PredictionResult, limit: usize, settings: &PredictionConfig) -> Self {
        Self {
            price: result.price,
            formatted_price: format_price(result.price, &settings.currency_symbol),
            currency: settings.currency_code.clone(),
            contributions: result.top_contributions(limit).to_vec(),
            total_contributions: result.contributions.len(),
        }
    }
}

/// Price with a currency symbol and two decimals, e.g. `€1234.56`
pub fn format_price(price: f64, symbol: &str) -> String {
    if price < 0.0 {
        format!("-{}{:.2}", symbol, price.abs())
    } else {
        format!("{}{:.2}", symbol, price)
    }
}

/// Inclusive numeric range for a form field
#[derive(Debug, Clone, Serialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
    pub default: T,
}

/// Form options for `GET /v1/options`
#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub manufacturers: Vec<String>,
    pub product_types: Vec<String>,
    pub storage_types: Vec<String>,
    pub screen_inches: Vec<f64>,
    pub default_screen_inches: f64,
    pub ram_gb: Vec<u32>,
    pub resolutions: Vec<String>,
    pub weight_kg: Bounds<f64>,
    pub storage_size_gb: Bounds<u32>,
}

impl OptionsResponse {
    pub fn from_catalog(catalog: &CategoryCatalog) -> Self {
        Self {
            manufacturers: catalog.manufacturers().to_vec(),
            product_types: catalog.product_types().to_vec(),
            storage_types: STORAGE_TYPES.iter().map(|s| s.to_string()).collect(),
            screen_inches: SCREEN_INCHES_OPTIONS.to_vec(),
            default_screen_inches: DEFAULT_SCREEN_INCHES,
            ram_gb: RAM_OPTIONS_GB.to_vec(),
            resolutions: RESOLUTION_OPTIONS.iter().map(|r| r.to_string()).collect(),
            weight_kg: Bounds {
                min: MIN_WEIGHT_KG,
                max: MAX_WEIGHT_KG,
                default: DEFAULT_WEIGHT_KG,
            },
            storage_size_gb: Bounds {
                min: MIN_STORAGE_SIZE_GB,
                max: MAX_STORAGE_SIZE_GB,
                default: DEFAULT_STORAGE_SIZE_GB,
            },
        }
    }
}
