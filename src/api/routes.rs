//! HTTP API route definitions.

use axum::{routing::get, Router};

use super::handlers::{health, public_ip, AppState};

/// Create the API router.
///
/// Exactly two routes are bound; any other path falls through to axum's
/// default 404 response.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // IP lookup endpoint
        .route("/", get(public_ip))
        // Health endpoint
        .route("/health", get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::lookup::LookupClient;

    fn test_state() -> AppState {
        let config = Config {
            port: 8080,
            // Discard port: connection refused, no real network traffic.
            lookup_url: "http://127.0.0.1:9".to_string(),
            lookup_timeout_ms: 1_000,
        };
        AppState::new(LookupClient::new(&config))
    }

    #[tokio::test]
    async fn health_endpoint_returns_healthy() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/invalid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lookup_failure_is_encoded_in_body_with_200() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Unable to retrieve IP address"}));
    }
}
