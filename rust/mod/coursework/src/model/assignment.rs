use serde::{Deserialize, Serialize};

/// A piece of coursework set by the course group's faculty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Owning course group id.
    pub course_group: String,

    /// Assignment title.
    pub title: String,

    /// Task description.
    #[serde(default)]
    pub description: String,

    /// RFC 3339 deadline. Submissions after this are flagged late.
    pub due_at: String,

    /// Identity id of the setting faculty.
    pub created_by: String,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for setting an assignment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignment {
    #[serde(default)]
    pub course_group_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_at: String,
}
