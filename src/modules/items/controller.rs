use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::{RequireItemsCreate, RequireItemsDelete, RequireItemsUpdate};
use crate::modules::items::model::{CreateItemDto, Item};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>)
    ),
    tag = "Items"
)]
#[instrument(skip(state))]
pub async fn get_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.items.find_all().await;

    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item details", body = Item),
        (status = 400, description = "Non-numeric item ID"),
        (status = 404, description = "Item not found")
    ),
    tag = "Items"
)]
#[instrument(skip(state))]
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .items
        .find(id)
        .await
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("item not found")))?;

    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires items:create permission")
    ),
    tag = "Items",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_item(
    State(state): State<AppState>,
    RequireItemsCreate(_auth_user): RequireItemsCreate,
    Json(dto): Json<CreateItemDto>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let item = state.items.create(dto).await;

    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = CreateItemDto,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 201, description = "Item did not exist and was created", body = Item),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires items:update permission")
    ),
    tag = "Items",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn upsert_item(
    State(state): State<AppState>,
    RequireItemsUpdate(_auth_user): RequireItemsUpdate,
    Path(id): Path<i64>,
    Json(dto): Json<CreateItemDto>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    // A lookup miss is not an error: fall back to creation with a fresh id.
    if state.items.find(id).await.is_some() {
        let item = state.items.update(id, dto).await?;
        return Ok((StatusCode::OK, Json(item)));
    }

    let item = state.items.create(dto).await;

    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires items:delete permission")
    ),
    tag = "Items",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    RequireItemsDelete(_auth_user): RequireItemsDelete,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    // No existence check; deleting an absent id still answers 204.
    state.items.remove(id).await;

    Ok(StatusCode::NO_CONTENT)
}
