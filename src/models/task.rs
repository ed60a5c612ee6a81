use time::{Date, PrimitiveDateTime};

/// Status given to tasks created without one
pub const DEFAULT_TASK_STATUS: &str = "To Do";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: Option<Date>,
    pub project_id: i32,
    pub created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    /// Empty means [`DEFAULT_TASK_STATUS`]
    pub status: String,
    pub due_date: Option<Date>,
}

impl CreateTask {
    pub fn status_or_default(&self) -> String {
        if self.status.is_empty() {
            DEFAULT_TASK_STATUS.to_string()
        } else {
            self.status.clone()
        }
    }
}

/// Partial task update: `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<Date>,
}

impl UpdateTask {
    /// Copy every present field onto `task`
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = &self.status {
            task.status = status.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = Some(due_date);
        }
    }
}
