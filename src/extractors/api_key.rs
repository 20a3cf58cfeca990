//! Extract the caller-supplied API key from the `api_key` query parameter.

use crate::model::first_value;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

/// Query parameter carrying the key.
pub const API_KEY_PARAM: &str = "api_key";

/// Extractor for an optional API key. Never rejects; a missing key is `None`.
#[derive(Clone, Debug)]
pub struct ApiKey(pub Option<String>);

impl ApiKey {
    /// Exact, case-sensitive comparison. A missing key never matches.
    pub fn matches(&self, secret: &str) -> bool {
        self.0.as_deref() == Some(secret)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(pairs)| first_value(&pairs, API_KEY_PARAM));
        Ok(ApiKey(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> ApiKey {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ApiKey::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_query_parameter() {
        let key = extract("/delete/1?api_key=TopSecretAPIKey").await;
        assert!(key.matches("TopSecretAPIKey"));
        assert!(!key.matches("topsecretapikey"));
    }

    #[tokio::test]
    async fn repeated_key_uses_first_value() {
        let key = extract("/delete/1?api_key=TopSecretAPIKey&api_key=wrong").await;
        assert!(key.matches("TopSecretAPIKey"));
        let key = extract("/delete/1?api_key=wrong&api_key=TopSecretAPIKey").await;
        assert!(!key.matches("TopSecretAPIKey"));
    }

    #[tokio::test]
    async fn missing_key_never_matches() {
        let key = extract("/delete/1").await;
        assert_eq!(key.0, None);
        assert!(!key.matches(""));
    }
}
