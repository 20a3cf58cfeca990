//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failures while opening the store at startup.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cafe not found: {0}")]
    CafeNotFound(String),
    #[error("no cafe in location '{0}'")]
    NoMatches(String),
    #[error("no cafes stored")]
    EmptyStore,
    #[error("api key rejected")]
    Forbidden,
    #[error("duplicate cafe name: {0}")]
    DuplicateName(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Status, error label and public message. `None` for faults that carry no body.
    fn parts(&self) -> Option<(StatusCode, &'static str, String)> {
        let parts = match self {
            AppError::CafeNotFound(_) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "Sorry a cafe with that id was not found in the database.".to_string(),
            ),
            AppError::NoMatches(_) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "Sorry, There is no cafe in that location".to_string(),
            ),
            AppError::EmptyStore => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "Sorry, there are no cafes in the database yet.".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Sorry, Access is not allowed".to_string(),
            ),
            AppError::DuplicateName(_) => (
                StatusCode::CONFLICT,
                "Conflict",
                "Sorry, a cafe with that name already exists.".to_string(),
            ),
            AppError::BadRequest(detail) => (StatusCode::BAD_REQUEST, "Bad Request", detail.clone()),
            AppError::Db(_) => return None,
        };
        Some(parts)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.parts() {
            Some((status, label, message)) => (status, Json(error_body(label, message))).into_response(),
            None => {
                tracing::error!(error = %self, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Unique-constraint failures become `DuplicateName`; everything else stays a store fault.
pub fn map_insert_error(err: sqlx::Error, name: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateName(name.to_string())
        }
        _ => AppError::Db(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_share_label() {
        for err in [
            AppError::CafeNotFound("7".into()),
            AppError::NoMatches("Peckham".into()),
            AppError::EmptyStore,
        ] {
            let (status, label, _) = err.parts().unwrap();
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(label, "Not Found");
        }
    }

    #[test]
    fn store_faults_have_no_body() {
        let err = AppError::Db(sqlx::Error::PoolClosed);
        assert!(err.parts().is_none());
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn other_db_errors_are_not_duplicates() {
        let err = map_insert_error(sqlx::Error::RowNotFound, "Lighthaus");
        assert!(matches!(err, AppError::Db(sqlx::Error::RowNotFound)));
    }
}
