use axum::extract::{FromRequest, rejection::JsonRejection};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// `Json` extractor whose rejections are reported as `400` in the crate's error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Path ids that are not UUIDs cannot resolve to a record.
pub fn parse_id(raw: &str, resource: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}

/// Treats a blank required text field as missing. The value is kept as sent.
pub fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
