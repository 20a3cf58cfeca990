//! `POST /add` body: urlencoded or multipart, decoded into the same `AddCafeForm`.

use crate::error::AppError;
use crate::model::AddCafeForm;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header,
    response::{IntoResponse, Response},
    Form,
};

/// Decoded `/add` form. Repeated keys keep their first value in both encodings.
#[derive(Debug)]
pub struct CafeForm(pub AddCafeForm);

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

async fn multipart_pairs(mut multipart: Multipart) -> Result<Vec<(String, String)>, AppError> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("invalid multipart field '{}': {}", name, e)))?;
        pairs.push((name, value));
    }
    Ok(pairs)
}

#[async_trait]
impl<S> FromRequest<S> for CafeForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            multipart_pairs(multipart)
                .await
                .map_err(IntoResponse::into_response)?
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            pairs
        };
        Ok(CafeForm(AddCafeForm::from_pairs(&pairs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    async fn extract(content_type: &str, body: &'static str) -> Result<CafeForm, Response> {
        let req = Request::builder()
            .method("POST")
            .uri("/add")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        CafeForm::from_request(req, &()).await
    }

    #[tokio::test]
    async fn decodes_urlencoded() {
        let CafeForm(form) = extract("application/x-www-form-urlencoded", "name=A&name=B&wifi=on")
            .await
            .unwrap();
        assert_eq!(form.name.as_deref(), Some("A"));
        assert_eq!(form.wifi.as_deref(), Some("on"));
    }

    #[tokio::test]
    async fn decodes_multipart() {
        let body = "--XB\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nLighthaus\r\n\
                    --XB\r\nContent-Disposition: form-data; name=\"calls\"\r\n\r\nfalse\r\n\
                    --XB--\r\n";
        let CafeForm(form) = extract("multipart/form-data; boundary=XB", body).await.unwrap();
        assert_eq!(form.name.as_deref(), Some("Lighthaus"));
        assert_eq!(form.calls.as_deref(), Some("false"));
        assert_eq!(form.toilet, None);
    }

    #[tokio::test]
    async fn other_content_types_are_rejected() {
        let err = extract("application/json", "{}").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
