use trackp::models::{CreateProject, CreateTask, Project, Task};
use trackp::state::AppState;

/// Factory for creating test data directly through the store
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test project
    pub async fn create_project(&self) -> Project {
        self.create_project_with_title("Test Project").await
    }

    /// Create a test project with specific title
    pub async fn create_project_with_title(&self, title: &str) -> Project {
        let input = CreateProject {
            title: title.to_string(),
            description: "Test project description".to_string(),
        };

        self.state.store.create_project(input).await.unwrap()
    }

    /// Create a test task with default status
    pub async fn create_task(&self, project_id: i32) -> Task {
        self.create_task_with_status(project_id, "").await
    }

    /// Create a test task with specific status
    pub async fn create_task_with_status(&self, project_id: i32, status: &str) -> Task {
        let input = CreateTask {
            title: "Test Task".to_string(),
            description: "Test task description".to_string(),
            status: status.to_string(),
            due_date: None,
        };

        self.state
            .store
            .create_task(project_id, input)
            .await
            .unwrap()
    }
}
