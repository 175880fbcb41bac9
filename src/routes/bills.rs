use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Bill, CreateBillRequest, UpdateBillStatusRequest},
    utils::extractors::{AppJson, parse_id, required_text},
};

pub async fn create_bill(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<CreateBillRequest>,
) -> Result<(StatusCode, Json<Bill>)> {
    // Blank status falls back to the default
    payload.status = required_text(payload.status);

    let bill = state.store.create_bill(payload).await?;

    tracing::info!("Created bill {} with status {}", bill.id, bill.status);

    Ok((StatusCode::CREATED, Json(bill)))
}

pub async fn get_all_bills(State(state): State<AppState>) -> Result<Json<Vec<Bill>>> {
    let bills = state.store.list_bills().await?;
    Ok(Json(bills))
}

pub async fn update_bill_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateBillStatusRequest>,
) -> Result<Json<Bill>> {
    let id = parse_id(&id, "Bill")?;

    let status = required_text(payload.status)
        .ok_or_else(|| AppError::BadRequest("status is required".to_string()))?;

    let bill = state
        .store
        .update_bill_status(id, &status)
        .await?
        .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

    tracing::info!("Bill {} moved to status {}", bill.id, bill.status);

    Ok(Json(bill))
}
