use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;
use crate::models::{CreateProject, CreateTask, Project, Task, UpdateProject, UpdateTask};
use crate::repositories::{ProjectRepository, Repository, TaskRepository};
use crate::store::Store;

/// PostgreSQL-backed store. Atomicity of the cascading delete is left to the
/// foreign key on `tasks.project_id`.
#[derive(Clone)]
pub struct PgStore {
    db: DatabaseConnection,
}

impl PgStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        ProjectRepository::list(&self.db).await
    }

    async fn create_project(&self, input: CreateProject) -> AppResult<Project> {
        ProjectRepository::create(&self.db, &input).await
    }

    async fn get_project(&self, id: i32) -> AppResult<Project> {
        ProjectRepository::find_by_id(&self.db, id).await
    }

    async fn update_project(&self, id: i32, input: UpdateProject) -> AppResult<Project> {
        ProjectRepository::update(&self.db, id, &input).await
    }

    async fn delete_project(&self, id: i32) -> AppResult<()> {
        ProjectRepository::delete(&self.db, id).await
    }

    async fn list_project_tasks(&self, project_id: i32) -> AppResult<Vec<Task>> {
        TaskRepository::list_by_project(&self.db, project_id).await
    }

    async fn create_task(&self, project_id: i32, input: CreateTask) -> AppResult<Task> {
        TaskRepository::create(&self.db, project_id, &input).await
    }

    async fn update_task(&self, id: i32, input: UpdateTask) -> AppResult<Task> {
        TaskRepository::update(&self.db, id, &input).await
    }

    async fn delete_task(&self, id: i32) -> AppResult<()> {
        TaskRepository::delete(&self.db, id).await
    }
}
