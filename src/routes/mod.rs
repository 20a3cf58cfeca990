//! Router assembly.

mod cafe;
mod common;

pub use cafe::cafe_routes;
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body. `/add` forms are a few hundred bytes.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: cafe routes, operational routes, tracing and body limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(cafe_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
