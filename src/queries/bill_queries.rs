use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Bill, CreateBillRequest, DEFAULT_BILL_STATUS},
};

pub async fn create_bill(pool: &PgPool, req: &CreateBillRequest) -> Result<Bill> {
    let bill = sqlx::query_as::<_, Bill>(
        "INSERT INTO bills (email, name, address, house, city, postal_code, phone, status, cart)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(&req.email)
    .bind(&req.name)
    .bind(&req.address)
    .bind(&req.house)
    .bind(&req.city)
    .bind(&req.postal_code)
    .bind(&req.phone)
    .bind(req.status.as_deref().unwrap_or(DEFAULT_BILL_STATUS))
    .bind(&req.cart)
    .fetch_one(pool)
    .await?;

    Ok(bill)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Bill>> {
    let bills = sqlx::query_as::<_, Bill>("SELECT * FROM bills ORDER BY created_at ASC")
        .fetch_all(pool)
        .await?;

    Ok(bills)
}

/// Returns the updated bill, or `None` when the id is unknown.
pub async fn update_status(pool: &PgPool, id: Uuid, status: &str) -> Result<Option<Bill>> {
    let bill = sqlx::query_as::<_, Bill>(
        "UPDATE bills SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(bill)
}
