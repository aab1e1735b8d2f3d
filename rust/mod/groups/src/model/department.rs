use serde::{Deserialize, Serialize};

/// An academic department. The membership arrays live inside the
/// document so an access check is a single fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Department name, unique across the college.
    pub name: String,

    /// Identity id of the head of department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hod: Option<String>,

    /// Identity ids of the teaching staff.
    #[serde(default)]
    pub faculties: Vec<String>,

    /// Identity ids of the enrolled students.
    #[serde(default)]
    pub students: Vec<String>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for creating a department.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartment {
    #[serde(default)]
    pub name: String,
}

/// Input for HOD assignment and member addition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    #[serde(default)]
    pub identity_id: String,
}
