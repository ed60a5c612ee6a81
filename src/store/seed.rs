use crate::error::AppResult;
use crate::models::{CreateProject, CreateTask};
use crate::store::Store;

struct DemoProject {
    title: &'static str,
    description: &'static str,
    tasks: &'static [(&'static str, &'static str, &'static str)],
}

const DEMO_PROJECTS: &[DemoProject] = &[
    DemoProject {
        title: "Sample Project",
        description: "This is a sample project to get you started with TrackP",
        tasks: &[
            (
                "Set up development environment",
                "Install all necessary tools and dependencies",
                "Done",
            ),
            (
                "Create database schema",
                "Design and implement the database structure",
                "Done",
            ),
            (
                "Implement user interface",
                "Build the React frontend components",
                "In Progress",
            ),
            ("API development", "Create RESTful API endpoints", "To Do"),
        ],
    },
    DemoProject {
        title: "Website Redesign",
        description: "Complete redesign of the company website with modern UI/UX",
        tasks: &[
            (
                "Research design trends",
                "Look into current web design trends and best practices",
                "To Do",
            ),
            (
                "Create wireframes",
                "Design the layout and structure of new pages",
                "To Do",
            ),
        ],
    },
];

/// Load the sample projects and tasks through the regular store operations.
///
/// Does nothing when the store already holds projects. Returns whether data
/// was inserted.
pub async fn seed_demo_data(store: &dyn Store) -> AppResult<bool> {
    if !store.list_projects().await?.is_empty() {
        return Ok(false);
    }

    for demo in DEMO_PROJECTS {
        let project = store
            .create_project(CreateProject {
                title: demo.title.to_string(),
                description: demo.description.to_string(),
            })
            .await?;

        for (title, description, status) in demo.tasks {
            store
                .create_task(
                    project.id,
                    CreateTask {
                        title: title.to_string(),
                        description: description.to_string(),
                        status: status.to_string(),
                        due_date: None,
                    },
                )
                .await?;
        }
    }

    tracing::info!(projects = DEMO_PROJECTS.len(), "Loaded demo data");
    Ok(true)
}
