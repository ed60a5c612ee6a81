use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::{
    date_format, non_empty, parse_due_date, parse_id, timestamp_format, JsonBody, MessageResponse,
};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::state::AppState;

// ============ Request/Response DTOs ============

/// Task fields accepted on creation. `id`, `project_id` and `created_at`
/// are assigned by the server and ignored if sent.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to "To Do" when empty
    #[schema(example = "To Do")]
    pub status: Option<String>,
    #[schema(example = "2024-06-30")]
    pub due_date: Option<String>,
}

/// Partial update: empty or missing fields keep their stored value
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "In Progress")]
    pub status: Option<String>,
    #[schema(example = "2024-06-30")]
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    /// `YYYY-MM-DD`, or `null` when no due date is set
    #[serde(with = "date_format::option")]
    #[schema(value_type = Option<String>, example = "2024-06-30")]
    pub due_date: Option<Date>,
    pub project_id: i32,
    #[serde(with = "timestamp_format")]
    #[schema(value_type = String, example = "2024-01-15 09:30:00")]
    pub created_at: PrimitiveDateTime,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            status: t.status,
            due_date: t.due_date,
            project_id: t.project_id,
            created_at: t.created_at,
        }
    }
}

// ============ Handlers ============

/// List the tasks of a project, newest first
#[utoipa::path(
    get,
    path = "/api/projects/{id}/tasks",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Tasks of the project (empty if none)", body = [TaskResponse]),
        (status = 400, description = "Invalid project ID")
    ),
    tag = "Tasks"
)]
pub async fn list_project_tasks(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<TaskResponse>>> {
    let project_id = parse_id(&project_id, "project")?;
    let tasks = state.store.list_project_tasks(project_id).await?;
    Ok(Json(tasks.into_iter().map(|t| t.into()).collect()))
}

/// Create a task under a project
#[utoipa::path(
    post,
    path = "/api/projects/{id}/tasks",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created successfully", body = TaskResponse),
        (status = 400, description = "Invalid project ID or malformed body"),
        (status = 404, description = "Project not found")
    ),
    tag = "Tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    JsonBody(payload): JsonBody<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<TaskResponse>)> {
    let project_id = parse_id(&project_id, "project")?;
    let create_task = CreateTask {
        title: payload.title.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        status: payload.status.unwrap_or_default(),
        due_date: parse_due_date(payload.due_date)?,
    };

    let task = state.store.create_task(project_id, create_task).await?;
    tracing::info!(task_id = task.id, project_id, "Created task");
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Update a task
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 400, description = "Invalid task ID or malformed body"),
        (status = 404, description = "Task not found")
    ),
    tag = "Tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateTaskRequest>,
) -> AppResult<Json<TaskResponse>> {
    let id = parse_id(&id, "task")?;
    let update_task = UpdateTask {
        title: non_empty(payload.title),
        description: non_empty(payload.description),
        status: non_empty(payload.status),
        due_date: parse_due_date(payload.due_date)?,
    };

    let task = state.store.update_task(id, update_task).await?;
    Ok(Json(task.into()))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid task ID"),
        (status = 404, description = "Task not found")
    ),
    tag = "Tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "task")?;
    state.store.delete_task(id).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
