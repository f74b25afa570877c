use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    lists::{
        dto::{CreateListRequest, UpdateListRequest},
        repo::List,
    },
    response::ApiResponse,
    state::AppState,
};

#[instrument(skip(state))]
pub async fn get_lists(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ApiResponse<Vec<List>>>, ApiError> {
    let lists = List::find_all_by_user(&state.db, user.id).await?;
    Ok(ApiResponse::ok(lists, "lists retrieved"))
}

#[instrument(skip(state, payload))]
pub async fn create_list(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateListRequest>,
) -> Result<Json<ApiResponse<List>>, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("name is required".into()));
    }
    let list = List::create(&state.db, user.id, name).await?;
    info!(user_id = %user.id, list_id = %list.id, "list created");
    Ok(ApiResponse::ok(list, "list created"))
}

#[instrument(skip(state))]
pub async fn get_list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<List>>, ApiError> {
    match List::find_by_id(&state.db, user.id, id).await? {
        Some(list) => Ok(ApiResponse::ok(list, "list retrieved")),
        None => Err(ApiError::NotFound("list not found".into())),
    }
}

#[instrument(skip(state, payload))]
pub async fn update_list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateListRequest>,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("name is required".into()));
    }
    let affected = List::update(&state.db, user.id, id, name).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("list not found".into()));
    }
    info!(user_id = %user.id, list_id = %id, "list updated");
    Ok(ApiResponse::ok(affected, "list updated"))
}

#[instrument(skip(state))]
pub async fn delete_list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    let affected = List::delete(&state.db, user.id, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("list not found".into()));
    }
    info!(user_id = %user.id, list_id = %id, "list deleted");
    Ok(ApiResponse::ok(affected, "list deleted"))
}
