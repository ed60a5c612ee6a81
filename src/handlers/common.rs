use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{de::DeserializeOwned, Serialize};
use time::Date;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::parse_date;

/// JSON body extractor that reports every rejection as a 400 JSON error.
/// The body is decoded as JSON whatever `Content-Type` the client sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}

/// Confirmation body for delete endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Parse an integer path parameter, e.g. `parse_id("12", "project")`
pub fn parse_id(raw: &str, resource: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", resource)))
}

/// Treat empty strings the same as absent fields
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse an optional `YYYY-MM-DD` due date; empty means unset
pub fn parse_due_date(value: Option<String>) -> AppResult<Option<Date>> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid due date: {}", raw))),
    }
}
