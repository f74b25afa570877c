use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    response::ApiResponse,
    state::AppState,
    todos::{
        dto::{CreateTodoRequest, UpdateTodoRequest},
        repo::Todo,
    },
};

fn owner_filter(state: &AppState, user: &AuthUser) -> Option<i64> {
    state.config.scope_todos_to_owner.then_some(user.id)
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|d| d.is_foreign_key_violation())
        .unwrap_or(false)
}

#[instrument(skip(state, payload))]
pub async fn create_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("name is required".into()));
    }
    let todo = match Todo::create(&state.db, owner_filter(&state, &user), payload.list_id, name)
        .await
    {
        Ok(Some(t)) => t,
        Ok(None) => return Err(ApiError::NotFound("list not found".into())),
        // The unscoped path hits the FK instead of the ownership join.
        Err(e) if is_foreign_key_violation(&e) => {
            return Err(ApiError::NotFound("list not found".into()))
        }
        Err(e) => return Err(e.into()),
    };
    info!(user_id = %user.id, todo_id = %todo.id, list_id = %todo.list_id, "todo created");
    Ok(ApiResponse::ok(todo, "todo created"))
}

#[instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    match Todo::find_by_id(&state.db, owner_filter(&state, &user), id).await? {
        Some(todo) => Ok(ApiResponse::ok(todo, "todo retrieved")),
        None => Err(ApiError::NotFound("todo not found".into())),
    }
}

#[instrument(skip(state))]
pub async fn get_todos_by_list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(list_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
    let todos = Todo::find_all_by_list(&state.db, owner_filter(&state, &user), list_id).await?;
    Ok(ApiResponse::ok(todos, "todos retrieved"))
}

#[instrument(skip(state, payload))]
pub async fn update_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    let name = payload.name.as_deref().map(str::trim);
    if name.is_some_and(str::is_empty) {
        return Err(ApiError::Validation("name must not be empty".into()));
    }
    if name.is_none() && payload.completed.is_none() {
        return Err(ApiError::Validation("nothing to update".into()));
    }
    let affected = Todo::update(
        &state.db,
        owner_filter(&state, &user),
        id,
        name,
        payload.completed,
    )
    .await?;
    if affected == 0 {
        return Err(ApiError::NotFound("todo not found".into()));
    }
    info!(user_id = %user.id, todo_id = %id, "todo updated");
    Ok(ApiResponse::ok(affected, "todo updated"))
}

#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    let affected = Todo::delete(&state.db, owner_filter(&state, &user), id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("todo not found".into()));
    }
    info!(user_id = %user.id, todo_id = %id, "todo deleted");
    Ok(ApiResponse::ok(affected, "todo deleted"))
}
