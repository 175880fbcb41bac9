use std::{collections::HashMap, str::FromStr};

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateProductRequest, NewProduct, Product, ProductListing},
    utils::extractors::{AppJson, required_text},
};

/// Upload fields that passed validation, before the image is hosted.
#[derive(Debug)]
struct ValidProduct {
    name: String,
    category_id: Uuid,
    detail: String,
    image: String,
    price: Decimal,
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let input = validate_product(payload)?;

    if state.store.find_category(input.category_id).await?.is_none() {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    let uploaded = state.media.upload(&input.image, &state.media_folder).await?;

    let product = state
        .store
        .create_product(NewProduct {
            name: input.name,
            image: uploaded.url,
            price: input.price,
            category_id: input.category_id,
            detail: input.detail,
            public_id: uploaded.external_id.clone(),
        })
        .await
        .inspect_err(|_| {
            tracing::warn!(
                "Product insert failed, uploaded image {} is orphaned",
                uploaded.external_id
            );
        })?;

    tracing::info!("Created product {} ({})", product.name, product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_all_products(State(state): State<AppState>) -> Result<Json<Vec<ProductListing>>> {
    // One category read and one product read, joined in memory
    let category_names: HashMap<Uuid, String> = state
        .store
        .list_categories()
        .await?
        .into_iter()
        .map(|category| (category.id, category.name))
        .collect();

    let products = state.store.list_products().await?;

    let listing = products
        .into_iter()
        .map(|product| ProductListing {
            category: category_names.get(&product.category_id).cloned(),
            id: product.id,
            name: product.name,
            image: product.image,
            price: product.price,
            detail: product.detail,
        })
        .collect();

    Ok(Json(listing))
}

fn validate_product(payload: CreateProductRequest) -> Result<ValidProduct> {
    let price = payload.price.filter(|p| !is_blank(p));
    let category = required_text(payload.category).or_else(|| required_text(payload.category_id));

    let (Some(name), Some(category), Some(detail), Some(image), Some(price)) = (
        required_text(payload.name),
        category,
        required_text(payload.detail),
        required_text(payload.image),
        price,
    ) else {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    };

    let price = parse_price(&price)?;

    let category_id = Uuid::parse_str(category.trim())
        .map_err(|_| AppError::BadRequest("Invalid category ID".to_string()))?;

    Ok(ValidProduct {
        name,
        category_id,
        detail,
        image,
        price,
    })
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Accepts a JSON number or numeric string that is zero or more.
fn parse_price(value: &Value) -> Result<Decimal> {
    let invalid = || AppError::BadRequest("Invalid price".to_string());

    let price = match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|_| invalid())?
        }
        Value::String(s) => Decimal::from_str(s.trim()).map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    if price < Decimal::ZERO {
        return Err(invalid());
    }

    Ok(price)
}
