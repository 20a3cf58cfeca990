//! Cafe API: CRUD over a single SQLite `cafe` table, served with axum.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StartupError};
pub use model::{form_flag, AddCafeForm, Cafe, NewCafe};
pub use routes::{app, cafe_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{connect_pool, ensure_cafe_table, CafeStore};
