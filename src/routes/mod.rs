mod adds;
mod bills;
mod categories;
mod health;
mod products;
mod register;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/upload-category", post(categories::create_category))
        .route("/delete-category/{id}", delete(categories::delete_category))
        .route("/category", get(categories::get_all_categories))
        .route("/upload-product", post(products::create_product))
        .route("/products", get(products::get_all_products))
        .route("/bill", post(bills::create_bill).get(bills::get_all_bills))
        .route("/bill/{id}", put(bills::update_bill_status))
        .route("/add", post(adds::create_add).get(adds::get_all_adds))
        .route(
            "/add/{id}",
            get(adds::get_add)
                .put(adds::update_add)
                .delete(adds::delete_add),
        )
        .route(
            "/register",
            post(register::register_user).get(register::get_all_users),
        )
}
