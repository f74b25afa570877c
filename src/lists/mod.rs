use axum::{routing::get, Router};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/lists",
            get(handlers::get_lists).post(handlers::create_list),
        )
        .route(
            "/lists/:id",
            get(handlers::get_list)
                .put(handlers::update_list)
                .delete(handlers::delete_list),
        )
}
