use axum::routing::get;
use axum::{middleware, Router};

use crate::{handlers, middleware::trace_requests, state::AppState};

/// Versioned prefix of every route
pub const API_PREFIX: &str = "/api/v1";

pub fn create_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/hello", get(handlers::hello))
        .route(
            "/todo",
            get(handlers::list_todos).post(handlers::add_todo),
        )
        .route(
            "/todo/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        );

    Router::new()
        .nest(API_PREFIX, v1)
        .layer(middleware::from_fn(trace_requests))
        .with_state(state)
}
