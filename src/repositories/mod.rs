pub mod project;
pub mod task;

pub use project::ProjectRepository;
pub use task::TaskRepository;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::error::{AppError, AppResult};

/// Base repository trait for common CRUD operations
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<T>;

    /// Delete entity by ID
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()>;
}

/// Report a row that disappeared under an UPDATE as a missing `resource`
pub(crate) fn not_found_as(resource: &'static str) -> impl FnOnce(DbErr) -> AppError {
    move |err| match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            AppError::NotFound(resource.to_string())
        }
        err => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_as_names_the_resource() {
        let err = not_found_as("Task")(DbErr::RecordNotUpdated);
        assert_eq!(err.to_string(), "Task not found");

        let err = not_found_as("Project")(DbErr::RecordNotFound("projects".to_string()));
        assert_eq!(err.to_string(), "Project not found");
    }

    #[test]
    fn test_not_found_as_keeps_other_errors() {
        let err = not_found_as("Task")(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, AppError::Database(ref msg) if msg.contains("connection reset")));
    }
}
