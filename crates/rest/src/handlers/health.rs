//! Health check endpoint handler.

use std::collections::BTreeMap;

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs every configured probe (search engine, cache) and reports each one.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - every probe passed
/// - `503 Service Unavailable` - at least one probe failed
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    debug!("Processing health check request");

    let mut checks = BTreeMap::new();
    let mut healthy = true;

    for probe in state.probes() {
        let outcome = match probe.check().await {
            Ok(()) => "ok".to_string(),
            Err(message) => {
                warn!(probe = probe.name(), error = %message, "Health probe failed");
                healthy = false;
                message
            }
        };
        checks.insert(probe.name(), outcome);
    }

    let (status, label) = if healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (status, Json(json!({ "status": label, "checks": checks })))
}
