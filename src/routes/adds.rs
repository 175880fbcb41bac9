use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Add, CreateAddRequest, UpdateAddRequest},
    utils::extractors::{AppJson, parse_id},
};

fn add_not_found() -> AppError {
    AppError::NotFound("Add not found".to_string())
}

pub async fn create_add(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAddRequest>,
) -> Result<(StatusCode, Json<Add>)> {
    let add = state.store.create_add(payload).await?;
    Ok((StatusCode::CREATED, Json(add)))
}

pub async fn get_all_adds(State(state): State<AppState>) -> Result<Json<Vec<Add>>> {
    let adds = state.store.list_adds().await?;
    Ok(Json(adds))
}

pub async fn get_add(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Add>> {
    let id = parse_id(&id, "Add")?;

    let add = state.store.find_add(id).await?.ok_or_else(add_not_found)?;

    Ok(Json(add))
}

pub async fn update_add(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateAddRequest>,
) -> Result<Json<Add>> {
    let id = parse_id(&id, "Add")?;

    let add = state
        .store
        .update_add(id, payload)
        .await?
        .ok_or_else(add_not_found)?;

    Ok(Json(add))
}

pub async fn delete_add(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id, "Add")?;

    if !state.store.delete_add(id).await? {
        return Err(add_not_found());
    }

    Ok(Json(json!({ "message": "Add deleted successfully" })))
}
