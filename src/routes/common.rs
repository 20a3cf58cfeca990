//! Operational routes: liveness, readiness against the `cafe` table, build version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cafes: Option<i64>,
}

/// Ready only when the `cafe` table answers a count.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store.count().await {
        Ok(n) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
                cafes: Some(n),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "cafe table unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                    cafes: None,
                }),
            )
        }
    }
}

pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/ready", get(ready))
        .route(
            "/version",
            get(|| async {
                Json(json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }))
            }),
        )
        .with_state(state)
}
