use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::entity::project::{self, ActiveModel, Column};
use crate::entity::ProjectEntity;
use crate::error::{AppError, AppResult};
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repositories::{not_found_as, Repository};

/// Project repository for database operations
pub struct ProjectRepository;

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Project> {
        let model = ProjectEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

        Ok(model.into())
    }

    /// Deleting a missing project is not an error. Tasks go with it through
    /// the `ON DELETE CASCADE` foreign key.
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = ProjectEntity::delete_by_id(id).exec(db).await?;
        tracing::debug!(project_id = id, rows = result.rows_affected, "Deleted project");
        Ok(())
    }
}

impl ProjectRepository {
    /// Create a new project, letting the database assign id and created_at
    pub async fn create(db: &DatabaseConnection, input: &CreateProject) -> AppResult<Project> {
        let model = ActiveModel {
            id: NotSet,
            title: Set(input.title.clone()),
            description: Set(Some(input.description.clone())),
            created_at: NotSet,
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// List all projects, newest first
    pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Replace title and description
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateProject,
    ) -> AppResult<Project> {
        let model = ProjectEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

        let mut active: ActiveModel = model.into();
        active.title = Set(input.title.clone());
        active.description = Set(Some(input.description.clone()));

        // The row can vanish between the read and the write
        let result = active.update(db).await.map_err(not_found_as("Project"))?;
        Ok(result.into())
    }
}

// Conversion from SeaORM model to our domain model
impl From<project::Model> for Project {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            created_at: m.created_at,
        }
    }
}
