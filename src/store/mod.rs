pub mod memory;
pub mod postgres;
pub mod seed;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use seed::seed_demo_data;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{CreateProject, CreateTask, Project, Task, UpdateProject, UpdateTask};

/// Persistence capability shared by the in-memory and PostgreSQL backends.
///
/// Lists are returned newest first. Deleting a project removes its tasks in
/// the same operation; deleting a missing project succeeds, deleting a
/// missing task is `NotFound`.
#[async_trait]
pub trait Store: Send + Sync {
    /// List every project
    async fn list_projects(&self) -> AppResult<Vec<Project>>;

    /// Create a project, assigning id and created_at
    async fn create_project(&self, input: CreateProject) -> AppResult<Project>;

    /// Get a project by ID
    async fn get_project(&self, id: i32) -> AppResult<Project>;

    /// Replace title and description, keeping id and created_at
    async fn update_project(&self, id: i32, input: UpdateProject) -> AppResult<Project>;

    /// Delete a project and all of its tasks
    async fn delete_project(&self, id: i32) -> AppResult<()>;

    /// List the tasks of a project (empty for unknown projects)
    async fn list_project_tasks(&self, project_id: i32) -> AppResult<Vec<Task>>;

    /// Create a task under an existing project
    async fn create_task(&self, project_id: i32, input: CreateTask) -> AppResult<Task>;

    /// Apply a partial update to a task
    async fn update_task(&self, id: i32, input: UpdateTask) -> AppResult<Task>;

    /// Delete a task
    async fn delete_task(&self, id: i32) -> AppResult<()>;
}
