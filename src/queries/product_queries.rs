use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewProduct, Product},
};

pub async fn create_product(pool: &PgPool, new: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, image, price, category_id, detail, public_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(&new.name)
    .bind(&new.image)
    .bind(new.price)
    .bind(new.category_id)
    .bind(&new.detail)
    .bind(&new.public_id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}
