//! HTTP API handlers.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use tracing::warn;

use crate::lookup::LookupClient;

/// Error message returned when the upstream lookup fails.
pub const LOOKUP_FAILED_MESSAGE: &str = "Unable to retrieve IP address";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream lookup client.
    pub lookup: LookupClient,
}

impl AppState {
    /// Create new app state.
    pub fn new(lookup: LookupClient) -> Self {
        Self { lookup }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
}

/// Successful IP lookup response.
#[derive(Debug, Serialize)]
pub struct PublicIpResponse {
    /// Public IP as returned by the upstream provider, verbatim.
    pub public_ip: String,
}

/// Failed IP lookup response.
#[derive(Debug, Serialize)]
pub struct LookupFailedResponse {
    /// Fixed error message.
    pub error: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// Public IP handler - proxies one lookup to the upstream provider.
///
/// Both outcomes answer with HTTP 200; an upstream failure is encoded in
/// the body, not in the transport status.
pub async fn public_ip(State(state): State<AppState>) -> impl IntoResponse {
    match state.lookup.public_ip().await {
        Ok(ip) => Json(PublicIpResponse { public_ip: ip }).into_response(),
        Err(e) => {
            warn!(error = %e, "Upstream IP lookup failed");
            Json(LookupFailedResponse {
                error: LOOKUP_FAILED_MESSAGE,
            })
            .into_response()
        }
    }
}
