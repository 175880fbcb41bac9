use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{
        Add, Bill, Category, CreateAddRequest, CreateBillRequest, NewCategory, NewProduct,
        Product, UpdateAddRequest, User,
    },
};

/// Persistence surface the route handlers depend on.
///
/// [`PgStore`](super::PgStore) is the production implementation; every method
/// is a single statement against one table.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn close(&self);

    // Categories
    async fn create_category(&self, new: NewCategory) -> Result<Category>;
    async fn find_category(&self, id: Uuid) -> Result<Option<Category>>;
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn delete_category(&self, id: Uuid) -> Result<bool>;

    // Products
    async fn create_product(&self, new: NewProduct) -> Result<Product>;
    async fn list_products(&self) -> Result<Vec<Product>>;

    // Adds
    async fn create_add(&self, req: CreateAddRequest) -> Result<Add>;
    async fn find_add(&self, id: Uuid) -> Result<Option<Add>>;
    async fn list_adds(&self) -> Result<Vec<Add>>;
    async fn update_add(&self, id: Uuid, req: UpdateAddRequest) -> Result<Option<Add>>;
    async fn delete_add(&self, id: Uuid) -> Result<bool>;

    // Bills
    async fn create_bill(&self, req: CreateBillRequest) -> Result<Bill>;
    async fn list_bills(&self) -> Result<Vec<Bill>>;
    async fn update_bill_status(&self, id: Uuid, status: &str) -> Result<Option<Bill>>;

    // Users
    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<User>;
    async fn list_users(&self) -> Result<Vec<User>>;
}
