use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    database::{connection, Store},
    error::Result,
    models::{
        Add, Bill, Category, CreateAddRequest, CreateBillRequest, NewCategory, NewProduct,
        Product, UpdateAddRequest, User,
    },
    queries::{add_queries, bill_queries, category_queries, product_queries, user_queries},
};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<()> {
        connection::check_health(&self.pool).await
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category> {
        category_queries::create_category(&self.pool, &new).await
    }

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>> {
        category_queries::find_by_id(&self.pool, id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        category_queries::get_all(&self.pool).await
    }

    async fn delete_category(&self, id: Uuid) -> Result<bool> {
        category_queries::delete_category(&self.pool, id).await
    }

    async fn create_product(&self, new: NewProduct) -> Result<Product> {
        product_queries::create_product(&self.pool, &new).await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        product_queries::get_all(&self.pool).await
    }

    async fn create_add(&self, req: CreateAddRequest) -> Result<Add> {
        add_queries::create_add(&self.pool, &req).await
    }

    async fn find_add(&self, id: Uuid) -> Result<Option<Add>> {
        add_queries::find_by_id(&self.pool, id).await
    }

    async fn list_adds(&self) -> Result<Vec<Add>> {
        add_queries::get_all(&self.pool).await
    }

    async fn update_add(&self, id: Uuid, req: UpdateAddRequest) -> Result<Option<Add>> {
        add_queries::update_add(&self.pool, id, &req).await
    }

    async fn delete_add(&self, id: Uuid) -> Result<bool> {
        add_queries::delete_add(&self.pool, id).await
    }

    async fn create_bill(&self, req: CreateBillRequest) -> Result<Bill> {
        bill_queries::create_bill(&self.pool, &req).await
    }

    async fn list_bills(&self) -> Result<Vec<Bill>> {
        bill_queries::get_all(&self.pool).await
    }

    async fn update_bill_status(&self, id: Uuid, status: &str) -> Result<Option<Bill>> {
        bill_queries::update_status(&self.pool, id, status).await
    }

    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        user_queries::create_user(&self.pool, name, email, password_hash).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        user_queries::get_all(&self.pool).await
    }
}
