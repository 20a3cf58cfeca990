//! Response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{"cafe": ...}`. Used for a single record and for search results.
#[derive(Serialize)]
pub struct CafeOne<T> {
    pub cafe: T,
}

/// `{"cafes": [...]}`.
#[derive(Serialize)]
pub struct CafeMany<T> {
    pub cafes: Vec<T>,
}

pub fn cafe_one<T: Serialize>(cafe: T) -> (StatusCode, Json<CafeOne<T>>) {
    (StatusCode::OK, Json(CafeOne { cafe }))
}

pub fn cafe_many<T: Serialize>(cafes: Vec<T>) -> (StatusCode, Json<CafeMany<T>>) {
    (StatusCode::OK, Json(CafeMany { cafes }))
}

/// `{"response": {key: message}}` with 200.
pub fn success_message(key: &str, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "response": { key: message }
        })),
    )
}

pub fn error_body(label: &str, message: String) -> serde_json::Value {
    serde_json::json!({
        "error": { label: message }
    })
}
