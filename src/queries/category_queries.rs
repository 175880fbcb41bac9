use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Category, NewCategory},
};

/// Find category by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Get all categories (flat list)
pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY created_at ASC, name ASC")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

/// Create a new category
pub async fn create_category(pool: &PgPool, new: &NewCategory) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, image, public_id)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(&new.name)
    .bind(&new.image)
    .bind(&new.public_id)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

/// Delete a category. Products referencing it are left in place.
pub async fn delete_category(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
