use time::{Date, PrimitiveDateTime};

pub mod common;
pub mod project;
pub mod task;

pub use common::{non_empty, parse_due_date, parse_id, JsonBody, MessageResponse};
pub use project::{
    create_project, delete_project, get_project, list_projects, update_project,
    CreateProjectRequest, ProjectResponse, UpdateProjectRequest,
};
pub use task::{
    create_task, delete_task, list_project_tasks, update_task, CreateTaskRequest, TaskResponse,
    UpdateTaskRequest,
};

// Wire formats: `created_at` as "YYYY-MM-DD HH:MM:SS", `due_date` as "YYYY-MM-DD"
time::serde::format_description!(
    timestamp_format,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);
time::serde::format_description!(date_format, Date, "[year]-[month]-[day]");
