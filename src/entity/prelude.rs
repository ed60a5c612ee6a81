pub use super::project::Entity as ProjectEntity;
pub use super::task::Entity as TaskEntity;
