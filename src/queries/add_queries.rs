use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Add, CreateAddRequest, UpdateAddRequest},
};

/// Find add by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Add>> {
    let add = sqlx::query_as::<_, Add>("SELECT * FROM adds WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(add)
}

/// Get all adds
pub async fn get_all(pool: &PgPool) -> Result<Vec<Add>> {
    let adds = sqlx::query_as::<_, Add>("SELECT * FROM adds ORDER BY created_at ASC")
        .fetch_all(pool)
        .await?;

    Ok(adds)
}

/// Create a new add
pub async fn create_add(pool: &PgPool, req: &CreateAddRequest) -> Result<Add> {
    let add = sqlx::query_as::<_, Add>(
        "INSERT INTO adds (image, heading, detail, price, category)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&req.image)
    .bind(&req.heading)
    .bind(&req.detail)
    .bind(req.price)
    .bind(&req.category)
    .fetch_one(pool)
    .await?;

    Ok(add)
}

/// Update the supplied fields of an add
pub async fn update_add(pool: &PgPool, id: Uuid, req: &UpdateAddRequest) -> Result<Option<Add>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE adds SET ");
    let mut separated = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(image) = &req.image {
        separated.push("image = ").push_bind_unseparated(image.clone());
        has_fields = true;
    }

    if let Some(heading) = &req.heading {
        separated.push("heading = ").push_bind_unseparated(heading.clone());
        has_fields = true;
    }

    if let Some(detail) = &req.detail {
        separated.push("detail = ").push_bind_unseparated(detail.clone());
        has_fields = true;
    }

    if let Some(price) = req.price {
        separated.push("price = ").push_bind_unseparated(price);
        has_fields = true;
    }

    if !has_fields {
        // Nothing to change, report the current row
        return find_by_id(pool, id).await;
    }

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let add = query_builder
        .build_query_as::<Add>()
        .fetch_optional(pool)
        .await?;

    Ok(add)
}

/// Delete an add
pub async fn delete_add(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM adds WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
