use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{
    now_timestamp, CreateProject, CreateTask, Project, Task, UpdateProject, UpdateTask,
};
use crate::store::Store;

/// In-process store. Data lives as long as the process does.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryStoreInner>>,
}

/// Projects and tasks share one lock so a cascading delete is atomic with
/// respect to every task read and write.
struct MemoryStoreInner {
    // Newest first
    projects: Vec<Project>,
    tasks: Vec<Task>,
    next_project_id: i32,
    next_task_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryStoreInner {
                projects: Vec::new(),
                tasks: Vec::new(),
                next_project_id: 1,
                next_task_id: 1,
            })),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        let inner = self.inner.read().await;
        Ok(inner.projects.clone())
    }

    async fn create_project(&self, input: CreateProject) -> AppResult<Project> {
        let mut inner = self.inner.write().await;
        let project = Project {
            id: inner.next_project_id,
            title: input.title,
            description: input.description,
            created_at: now_timestamp(),
        };
        inner.next_project_id += 1;
        inner.projects.insert(0, project.clone());
        Ok(project)
    }

    async fn get_project(&self, id: i32) -> AppResult<Project> {
        let inner = self.inner.read().await;
        inner
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Project".to_string()))
    }

    async fn update_project(&self, id: i32, input: UpdateProject) -> AppResult<Project> {
        let mut inner = self.inner.write().await;
        let project = inner
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

        project.title = input.title;
        project.description = input.description;
        Ok(project.clone())
    }

    async fn delete_project(&self, id: i32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.projects.retain(|p| p.id != id);
        inner.tasks.retain(|t| t.project_id != id);
        Ok(())
    }

    async fn list_project_tasks(&self, project_id: i32) -> AppResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, project_id: i32, input: CreateTask) -> AppResult<Task> {
        let mut inner = self.inner.write().await;
        if !inner.projects.iter().any(|p| p.id == project_id) {
            return Err(AppError::NotFound("Project".to_string()));
        }

        let task = Task {
            id: inner.next_task_id,
            status: input.status_or_default(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            project_id,
            created_at: now_timestamp(),
        };
        inner.next_task_id += 1;
        inner.tasks.insert(0, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: i32, input: UpdateTask) -> AppResult<Task> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound("Task".to_string()))?;

        input.apply_to(task);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let index = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound("Task".to_string()))?;
        inner.tasks.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn new_project(title: &str) -> CreateProject {
        CreateProject {
            title: title.to_string(),
            description: format!("{} description", title),
        }
    }

    fn new_task(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_project_ids_increase() {
        let store = MemoryStore::new();

        let first = store.create_project(new_project("P1")).await.unwrap();
        let second = store.create_project(new_project("P2")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        // Ids are not reused after a delete
        store.delete_project(second.id).await.unwrap();
        let third = store.create_project(new_project("P3")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_list_projects_newest_first() {
        let store = MemoryStore::new();
        for title in ["A", "B", "C"] {
            store.create_project(new_project(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_update_project_keeps_identity() {
        let store = MemoryStore::new();
        let created = store.create_project(new_project("P1")).await.unwrap();

        let updated = store
            .update_project(
                created.id,
                UpdateProject {
                    title: "Renamed".to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "");
        assert_eq!(store.get_project(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_project_not_found() {
        let store = MemoryStore::new();
        let result = store.update_project(42, UpdateProject::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_task_defaults_status() {
        let store = MemoryStore::new();
        let project = store.create_project(new_project("P1")).await.unwrap();

        let task = store.create_task(project.id, new_task("T1")).await.unwrap();
        assert_eq!(task.status, "To Do");
        assert_eq!(task.project_id, project.id);
        assert_eq!(task.due_date, None);
    }

    #[tokio::test]
    async fn test_create_task_requires_project() {
        let store = MemoryStore::new();
        let result = store.create_task(7, new_task("orphan")).await;
        assert!(matches!(result, Err(AppError::NotFound(ref r)) if r == "Project"));
    }

    #[tokio::test]
    async fn test_update_task_partial() {
        let store = MemoryStore::new();
        let project = store.create_project(new_project("P1")).await.unwrap();
        let task = store
            .create_task(
                project.id,
                CreateTask {
                    title: "T1".to_string(),
                    description: "first".to_string(),
                    status: "In Progress".to_string(),
                    due_date: Some(date!(2024 - 05 - 01)),
                },
            )
            .await
            .unwrap();

        let updated = store
            .update_task(
                task.id,
                UpdateTask {
                    status: Some("Done".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "Done");
        assert_eq!(updated.title, "T1");
        assert_eq!(updated.description, "first");
        assert_eq!(updated.due_date, Some(date!(2024 - 05 - 01)));
        assert_eq!(updated.project_id, project.id);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let store = MemoryStore::new();
        let doomed = store.create_project(new_project("P1")).await.unwrap();
        let kept = store.create_project(new_project("P2")).await.unwrap();
        store.create_task(doomed.id, new_task("T1")).await.unwrap();
        store.create_task(doomed.id, new_task("T2")).await.unwrap();
        let survivor = store.create_task(kept.id, new_task("T3")).await.unwrap();

        store.delete_project(doomed.id).await.unwrap();

        assert!(store.list_project_tasks(doomed.id).await.unwrap().is_empty());
        assert_eq!(store.list_project_tasks(kept.id).await.unwrap(), vec![survivor]);
        assert!(matches!(
            store.get_project(doomed.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_asymmetry() {
        let store = MemoryStore::new();

        assert!(store.delete_project(99).await.is_ok());
        assert!(matches!(
            store.delete_task(99).await,
            Err(AppError::NotFound(ref r)) if r == "Task"
        ));
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = MemoryStore::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create_project(new_project(&format!("P{}", i)))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }
}
