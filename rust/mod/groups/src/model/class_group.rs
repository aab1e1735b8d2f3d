use serde::{Deserialize, Serialize};

/// A class group: one admission batch of one department, e.g.
/// "CSE 2024-28 A". At most one tutor and one program coordinator at a
/// time; both optional, both replaced on re-assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassGroup {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Study year.
    pub year: u32,

    /// Admission batch label, e.g. "2024-28".
    pub batch: String,

    /// Owning department id.
    pub department: String,

    /// Identity id of the class tutor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor: Option<String>,

    /// Identity id of the program coordinator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_coordinator: Option<String>,

    /// Identity ids of the enrolled students.
    #[serde(default)]
    pub students: Vec<String>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for creating a class group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub department_id: String,
}

/// Input for enrolling students into a class group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudents {
    #[serde(default)]
    pub student_ids: Vec<String>,
}
