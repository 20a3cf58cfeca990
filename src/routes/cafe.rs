//! Landing page and cafe routes.

use crate::handlers::{add, delete as delete_handler, home, list_all, random, search, update_price};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

pub fn cafe_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/random", get(random))
        .route("/all", get(list_all))
        .route("/search", get(search))
        .route("/add", post(add))
        .route("/update/:id", patch(update_price))
        .route("/delete/:id", delete(delete_handler))
        .with_state(state)
}
