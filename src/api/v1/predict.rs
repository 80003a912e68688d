//! Prediction endpoint handlers

use axum::extract::{Query, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, OptionsResponse, PredictQueryParams, PredictResponse};
use crate::domain::LaptopSpec;

/// Upper bound on `?limit=`; larger values return every contribution anyway
const MAX_CONTRIBUTIONS_LIMIT: usize = 1000;

/// GET /v1/options
pub async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse::from_catalog(state.prediction_service.catalog()))
}

/// POST /v1/predict
pub async fn predict_price(
    State(state): State<AppState>,
    Query(params): Query<PredictQueryParams>,
    Json(spec): Json<LaptopSpec>,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!(
        manufacturer = %spec.manufacturer,
        product_type = %spec.product_type,
        "Predicting laptop price"
    );

    let limit = params
        .limit
        .unwrap_or(state.settings.contributions_limit)
        .min(MAX_CONTRIBUTIONS_LIMIT);

    let result = state.prediction_service.predict(&spec)?;

    Ok(Json(PredictResponse::from_result(
        &result,
        limit,
        &state.settings,
    )))
}
