//! Health check endpoints for Kubernetes probes

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check over the loaded artifacts and catalog.
///
/// Zero-filled or dropped feature columns report as degraded.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks = vec![check_artifacts(&state), check_catalog(&state)];

    let overall_status = checks
        .iter()
        .map(|check| check.status)
        .fold(HealthStatus::Healthy, worst);

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn worst(a: HealthStatus, b: HealthStatus) -> HealthStatus {
    match (a, b) {
        (HealthStatus::Unhealthy, _) | (_, HealthStatus::Unhealthy) => HealthStatus::Unhealthy,
        (HealthStatus::Degraded, _) | (_, HealthStatus::Degraded) => HealthStatus::Degraded,
        _ => HealthStatus::Healthy,
    }
}

fn check_artifacts(state: &AppState) -> HealthCheck {
    let service = &state.prediction_service;
    let report = service.schema_report();

    let (status, message) = if service.feature_count() == 0 {
        (HealthStatus::Unhealthy, "no model features loaded".to_string())
    } else if report.is_clean() {
        (
            HealthStatus::Healthy,
            format!("{} features", service.feature_count()),
        )
    } else {
        (HealthStatus::Degraded, report.to_string())
    };

    HealthCheck {
        name: "artifacts".to_string(),
        status,
        message: Some(message),
    }
}

fn check_catalog(state: &AppState) -> HealthCheck {
    let catalog = state.prediction_service.catalog();
    let empty = catalog.manufacturers().is_empty() || catalog.product_types().is_empty();

    HealthCheck {
        name: "reference_dataset".to_string(),
        status: if empty {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        },
        message: Some(format!(
            "{} manufacturers, {} product types",
            catalog.manufacturers().len(),
            catalog.product_types().len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[test]
    fn test_worst_status() {
        use HealthStatus::*;

        assert_eq!(worst(Healthy, Healthy), Healthy);
        assert_eq!(worst(Healthy, Degraded), Degraded);
        assert_eq!(worst(Degraded, Unhealthy), Unhealthy);
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Degraded,
            version: "1.0.0".to_string(),
            checks: Some(vec![HealthCheck {
                name: "artifacts".to_string(),
                status: HealthStatus::Degraded,
                message: Some("zero-filled [Company_Razer], dropped []".to_string()),
            }]),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"degraded\""));
        assert!(json.contains("Company_Razer"));
    }
}
