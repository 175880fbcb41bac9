use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Add {
    pub id: Uuid,
    pub image: Option<String>,
    pub heading: Option<String>,
    pub detail: Option<String>,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAddRequest {
    pub image: Option<String>,
    pub heading: Option<String>,
    pub detail: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
}

/// Absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateAddRequest {
    pub image: Option<String>,
    pub heading: Option<String>,
    pub detail: Option<String>,
    pub price: Option<Decimal>,
}
