use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::{parse_id, timestamp_format, JsonBody, MessageResponse};
use crate::models::{CreateProject, Project, UpdateProject};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(with = "timestamp_format")]
    #[schema(value_type = String, example = "2024-01-15 09:30:00")]
    pub created_at: PrimitiveDateTime,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            created_at: p.created_at,
        }
    }
}

// ============ Handlers ============

/// List all projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "List of projects", body = [ProjectResponse]),
        (status = 500, description = "Storage error")
    ),
    tag = "Projects"
)]
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = state.store.list_projects().await?;
    Ok(Json(projects.into_iter().map(|p| p.into()).collect()))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created successfully", body = ProjectResponse),
        (status = 400, description = "Malformed body")
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    let create_project = CreateProject {
        title: payload.title.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
    };

    let project = state.store.create_project(create_project).await?;
    tracing::info!(project_id = project.id, "Created project");
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project details", body = ProjectResponse),
        (status = 400, description = "Invalid project ID"),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectResponse>> {
    let id = parse_id(&id, "project")?;
    let project = state.store.get_project(id).await?;
    Ok(Json(project.into()))
}

/// Update a project. Title and description are both replaced.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated successfully", body = ProjectResponse),
        (status = 400, description = "Invalid project ID or malformed body"),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    let id = parse_id(&id, "project")?;
    let update_project = UpdateProject {
        title: payload.title.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
    };

    let project = state.store.update_project(id, update_project).await?;
    Ok(Json(project.into()))
}

/// Delete a project together with its tasks
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted (or did not exist)", body = MessageResponse),
        (status = 400, description = "Invalid project ID")
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "project")?;
    state.store.delete_project(id).await?;
    tracing::info!(project_id = id, "Deleted project");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
