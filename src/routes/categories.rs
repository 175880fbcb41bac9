use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Category, CreateCategoryRequest, DeleteCategoryResponse, NewCategory},
    utils::extractors::{AppJson, parse_id, required_text},
};

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>)> {
    let name = required_text(payload.name).or_else(|| required_text(payload.category));

    let (Some(name), Some(image)) = (name, required_text(payload.image)) else {
        return Err(AppError::BadRequest(
            "Category and image are required".to_string(),
        ));
    };

    let uploaded = state.media.upload(&image, &state.media_folder).await?;

    let category = state
        .store
        .create_category(NewCategory {
            name,
            image: uploaded.url,
            public_id: uploaded.external_id.clone(),
        })
        .await
        .inspect_err(|_| {
            tracing::warn!(
                "Category insert failed, uploaded image {} is orphaned",
                uploaded.external_id
            );
        })?;

    tracing::info!("Created category {} ({})", category.name, category.id);

    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn get_all_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteCategoryResponse>> {
    let id = parse_id(&id, "Category")?;

    let category = state
        .store
        .find_category(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    if let Some(public_id) = category.public_id.as_deref().filter(|p| !p.is_empty()) {
        state.media.delete(public_id).await?;
    }

    if !state.store.delete_category(id).await? {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    tracing::info!("Deleted category {}", id);

    Ok(Json(DeleteCategoryResponse {
        success: true,
        message: "Category and image deleted successfully".to_string(),
    }))
}
