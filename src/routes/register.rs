use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{RegisterRequest, RegisterResponse},
    utils::extractors::{AppJson, required_text},
};

pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let (name, email, password) = validate_registration(payload)?;

    let password_hash = hash_password(password, state.bcrypt_cost).await?;

    let user = state.store.create_user(&name, &email, &password_hash).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(user))))
}

pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<RegisterResponse>>> {
    let users = state.store.list_users().await?;

    Ok(Json(users.into_iter().map(RegisterResponse::from).collect()))
}

/// bcrypt is CPU bound, so it runs on the blocking pool.
async fn hash_password(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))
}

fn validate_registration(payload: RegisterRequest) -> Result<(String, String, String)> {
    let name = required_text(payload.name)
        .ok_or_else(|| AppError::BadRequest("Name cannot be empty".to_string()))?;

    let email = required_text(payload.email)
        .ok_or_else(|| AppError::BadRequest("Email cannot be empty".to_string()))?;

    let password = payload
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("Password cannot be empty".to_string()))?;

    Ok((name, email, password))
}
