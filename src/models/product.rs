use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    #[serde(rename = "category")]
    pub category_id: Uuid,
    pub detail: String,
    pub public_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw upload body. `price` may arrive as a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    /// Category id, under either key; `category` wins when both are sent.
    pub category: Option<String>,
    pub category_id: Option<String>,
    pub detail: Option<String>,
    pub image: Option<String>,
    pub price: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub detail: String,
    pub public_id: String,
}

/// Product joined with its category's display name.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category: Option<String>,
    pub detail: String,
}
