// Library crate for the TrackP backend
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod state;
pub mod store;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_project, create_task, delete_project, delete_task, get_project, list_project_tasks,
    list_projects, update_project, update_task,
};
use crate::middlewares::cors_layer;
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Project routes
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Task routes (nested under projects)
        .route(
            "/projects/{id}/tasks",
            get(list_project_tasks).post(create_task),
        )
        // Task routes (direct access)
        .route("/tasks/{id}", put(update_task).delete(delete_task));

    let cors = cors_layer(state.config.cors_allowed_origin.clone());

    Router::new()
        .route("/", get(|| async { "TrackP API is running" }))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
