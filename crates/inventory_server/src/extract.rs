//! Request body extraction shared by the write handlers.
//!
//! # Invariants
//! - Form fields arrive as JSON strings; the DTOs coerce them like any
//!   other untyped input.
//! - Every other content type goes through the JSON extractor and keeps its
//!   rejection text.

use crate::error::ApiErrorResponse;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use axum::{Form, Json};
use serde_json::{Map, Value};
use std::collections::HashMap;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Untyped request body, read from JSON or from an urlencoded form.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody(pub Value);

impl<State> FromRequest<State> for RequestBody
where
    State: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request(request: Request, state: &State) -> Result<Self, Self::Rejection> {
        if is_form(request.headers()) {
            let Form(fields): Form<HashMap<String, String>> =
                Form::from_request(request, state).await?;
            let props: Map<String, Value> = fields
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            return Ok(Self(Value::Object(props)));
        }

        let Json(value) = Json::<Value>::from_request(request, state).await?;
        Ok(Self(value))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}
