//! Handler for health check endpoint.

use axum::{extract::State, http::StatusCode, Json};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "sink": {
///       "status": "ok",
///       "message": "Diagnostic sink ready"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let sink_check = check_sink(&state).await;

    let all_healthy = sink_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { sink: sink_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks whether the diagnostic sink is accepting records.
async fn check_sink(state: &AppState) -> CheckStatus {
    if state.sink.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Diagnostic sink ready".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Diagnostic sink unavailable".to_string()),
        }
    }
}
