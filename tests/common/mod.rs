#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use storefront_back::{
    AppState,
    database::Store,
    error::{AppError, Result},
    models::{
        Add, Bill, Category, CreateAddRequest, CreateBillRequest, DEFAULT_BILL_STATUS,
        NewCategory, NewProduct, Product, UpdateAddRequest, User,
    },
    routes,
    services::{MediaGateway, UploadedMedia},
};

pub const TEST_FOLDER: &str = "test_uploads";

/// Store double keeping rows in memory and counting reads.
#[derive(Default)]
pub struct MemoryStore {
    pub categories: Mutex<Vec<Category>>,
    pub products: Mutex<Vec<Product>>,
    pub adds: Mutex<Vec<Add>>,
    pub bills: Mutex<Vec<Bill>>,
    pub users: Mutex<Vec<User>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn seed_category(&self, name: &str, public_id: Option<&str>) -> Category {
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            image: Some(format!("https://media.test/{}.png", name)),
            public_id: public_id.map(str::to_string),
            created_at: Utc::now(),
        };
        self.categories.lock().unwrap().push(category.clone());
        category
    }

    pub fn seed_product(&self, name: &str, category_id: Uuid) -> Product {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            image: format!("https://media.test/{}.png", name),
            price: 10.into(),
            category_id,
            detail: format!("{} detail", name),
            public_id: Some(format!("{}/{}", TEST_FOLDER, name)),
            created_at: now,
            updated_at: now,
        };
        self.products.lock().unwrap().push(product.clone());
        product
    }

    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) {}

    async fn create_category(&self, new: NewCategory) -> Result<Category> {
        self.write()?;
        let category = Category {
            id: Uuid::new_v4(),
            name: new.name,
            image: Some(new.image),
            public_id: Some(new.public_id),
            created_at: Utc::now(),
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>> {
        self.read();
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.read();
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn delete_category(&self, id: Uuid) -> Result<bool> {
        self.write()?;
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() < before)
    }

    async fn create_product(&self, new: NewProduct) -> Result<Product> {
        self.write()?;
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: new.name,
            image: new.image,
            price: new.price,
            category_id: new.category_id,
            detail: new.detail,
            public_id: Some(new.public_id),
            created_at: now,
            updated_at: now,
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.read();
        Ok(self.products.lock().unwrap().clone())
    }

    async fn create_add(&self, req: CreateAddRequest) -> Result<Add> {
        self.write()?;
        let add = Add {
            id: Uuid::new_v4(),
            image: req.image,
            heading: req.heading,
            detail: req.detail,
            price: req.price,
            category: req.category,
            created_at: Utc::now(),
        };
        self.adds.lock().unwrap().push(add.clone());
        Ok(add)
    }

    async fn find_add(&self, id: Uuid) -> Result<Option<Add>> {
        self.read();
        Ok(self.adds.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn list_adds(&self) -> Result<Vec<Add>> {
        self.read();
        Ok(self.adds.lock().unwrap().clone())
    }

    async fn update_add(&self, id: Uuid, req: UpdateAddRequest) -> Result<Option<Add>> {
        self.write()?;
        let mut adds = self.adds.lock().unwrap();
        let Some(add) = adds.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(image) = req.image {
            add.image = Some(image);
        }
        if let Some(heading) = req.heading {
            add.heading = Some(heading);
        }
        if let Some(detail) = req.detail {
            add.detail = Some(detail);
        }
        if let Some(price) = req.price {
            add.price = Some(price);
        }
        Ok(Some(add.clone()))
    }

    async fn delete_add(&self, id: Uuid) -> Result<bool> {
        self.write()?;
        let mut adds = self.adds.lock().unwrap();
        let before = adds.len();
        adds.retain(|a| a.id != id);
        Ok(adds.len() < before)
    }

    async fn create_bill(&self, req: CreateBillRequest) -> Result<Bill> {
        self.write()?;
        let now = Utc::now();
        let bill = Bill {
            id: Uuid::new_v4(),
            email: req.email,
            name: req.name,
            address: req.address,
            house: req.house,
            city: req.city,
            postal_code: req.postal_code,
            phone: req.phone,
            status: req.status.unwrap_or_else(|| DEFAULT_BILL_STATUS.to_string()),
            cart: req.cart,
            created_at: now,
            updated_at: now,
        };
        self.bills.lock().unwrap().push(bill.clone());
        Ok(bill)
    }

    async fn list_bills(&self) -> Result<Vec<Bill>> {
        self.read();
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn update_bill_status(&self, id: Uuid, status: &str) -> Result<Option<Bill>> {
        self.write()?;
        let mut bills = self.bills.lock().unwrap();
        Ok(bills.iter_mut().find(|b| b.id == id).map(|bill| {
            bill.status = status.to_string();
            bill.updated_at = Utc::now();
            bill.clone()
        }))
    }

    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        self.write()?;
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.read();
        Ok(self.users.lock().unwrap().clone())
    }
}

/// Media gateway double that records every call.
#[derive(Default)]
pub struct FakeMedia {
    pub uploads: Mutex<Vec<(String, String)>>,
    pub deletes: Mutex<Vec<String>>,
    pub fail: bool,
}

impl FakeMedia {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaGateway for FakeMedia {
    async fn upload(&self, payload: &str, folder: &str) -> Result<UploadedMedia> {
        if self.fail {
            return Err(AppError::MediaError("upload rejected".to_string()));
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((payload.to_string(), folder.to_string()));
        let n = uploads.len();
        Ok(UploadedMedia {
            url: format!("https://media.test/{}/image-{}.png", folder, n),
            external_id: format!("{}/image-{}", folder, n),
        })
    }

    async fn delete(&self, external_id: &str) -> Result<()> {
        if self.fail {
            return Err(AppError::MediaError("destroy rejected".to_string()));
        }
        self.deletes.lock().unwrap().push(external_id.to_string());
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub media: Arc<FakeMedia>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(MemoryStore::default(), FakeMedia::default())
    }

    pub fn with(store: MemoryStore, media: FakeMedia) -> Self {
        let store = Arc::new(store);
        let media = Arc::new(media);

        let state = AppState {
            store: store.clone(),
            media: media.clone(),
            media_folder: TEST_FOLDER.to_string(),
            bcrypt_cost: 4,
        };

        Self {
            router: routes::create_router().with_state(state),
            store,
            media,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}
