//! Request body extraction for write endpoints.
//!
//! [`RecordBody`] accepts either a JSON object or URL-encoded form data and
//! yields the fields as a JSON map, so validation and echoing work the same
//! for both encodings.

use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// The fields of a request body, keyed by name.
///
/// Form values are always strings. A request without a JSON or form content
/// type yields an empty record.
#[derive(Debug, Clone, Default)]
pub struct RecordBody(pub Map<String, Value>);

impl<S> FromRequest<S> for RecordBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state).await?;
            let record = fields
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            return Ok(RecordBody(record));
        }

        if content_type.starts_with("application/json") {
            let Json(record) = Json::<Map<String, Value>>::from_request(req, state).await?;
            return Ok(RecordBody(record));
        }

        Ok(RecordBody::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<RecordBody, ApiError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        RecordBody::from_request(req, &()).await
    }

    #[tokio::test]
    async fn json_object() {
        let RecordBody(record) = extract(Some("application/json"), r#"{"party_id":1}"#)
            .await
            .unwrap();
        assert_eq!(Value::Object(record), json!({ "party_id": 1 }));
    }

    #[tokio::test]
    async fn form_fields_are_strings() {
        let RecordBody(record) = extract(
            Some("application/x-www-form-urlencoded"),
            "first_name=Ronald&industry_connected=1",
        )
        .await
        .unwrap();
        assert_eq!(
            Value::Object(record),
            json!({ "first_name": "Ronald", "industry_connected": "1" })
        );
    }

    #[tokio::test]
    async fn missing_content_type_is_empty_record() {
        let RecordBody(record) = extract(None, "whatever").await.unwrap();
        assert!(record.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn json_array_is_bad_request() {
        let err = extract(Some("application/json"), "[1, 2]").await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
