use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entity::task::{self, ActiveModel, Column};
use crate::entity::{ProjectEntity, TaskEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateTask, Task, UpdateTask, DEFAULT_TASK_STATUS};
use crate::repositories::{not_found_as, Repository};

/// Task repository for database operations
pub struct TaskRepository;

#[async_trait]
impl Repository<Task> for TaskRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Task> {
        let model = TaskEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Task".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = TaskEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Task".to_string()));
        }

        Ok(())
    }
}

impl TaskRepository {
    /// Create a task under an existing project
    pub async fn create(
        db: &DatabaseConnection,
        project_id: i32,
        input: &CreateTask,
    ) -> AppResult<Task> {
        // Report a missing parent as 404 rather than a foreign key violation
        ProjectEntity::find_by_id(project_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

        let model = ActiveModel {
            id: NotSet,
            title: Set(input.title.clone()),
            description: Set(Some(input.description.clone())),
            status: Set(Some(input.status_or_default())),
            due_date: Set(input.due_date),
            project_id: Set(project_id),
            created_at: NotSet,
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// List tasks of a project, newest first
    pub async fn list_by_project(db: &DatabaseConnection, project_id: i32) -> AppResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(Column::ProjectId.eq(project_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Update only the fields present in `input`
    pub async fn update(db: &DatabaseConnection, id: i32, input: &UpdateTask) -> AppResult<Task> {
        let model = TaskEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Task".to_string()))?;

        let mut active: ActiveModel = model.into();

        if let Some(title) = &input.title {
            active.title = Set(title.clone());
        }
        if let Some(description) = &input.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(status) = &input.status {
            active.status = Set(Some(status.clone()));
        }
        if let Some(due_date) = input.due_date {
            active.due_date = Set(Some(due_date));
        }

        // Nothing changed: SeaORM would issue an empty UPDATE
        if !active.is_changed() {
            return Self::find_by_id(db, id).await;
        }

        let result = active.update(db).await.map_err(not_found_as("Task"))?;
        Ok(result.into())
    }
}

// Conversion from SeaORM model to our domain model
impl From<task::Model> for Task {
    fn from(m: task::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            status: m
                .status
                .unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string()),
            due_date: m.due_date,
            project_id: m.project_id,
            created_at: m.created_at,
        }
    }
}
