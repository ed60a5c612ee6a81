use time::PrimitiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
}

/// Full replacement of the mutable project fields
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: String,
    pub description: String,
}
