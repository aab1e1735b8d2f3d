use serde::{Deserialize, Serialize};

/// A course offering taught to one class group. Students are copied
/// from the class group at creation time, not referenced live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseGroup {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Course code, e.g. "CS301".
    pub course_code: String,

    /// Course title.
    pub course_name: String,

    /// Semester number.
    pub semester: u32,

    /// Identity id of the teaching faculty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,

    /// Owning class group id.
    pub class_group: String,

    /// Identity ids of the enrolled students (copy-on-create).
    #[serde(default)]
    pub students: Vec<String>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for the assign-course operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCourse {
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub semester: u32,
    #[serde(default)]
    pub faculty_id: String,
    #[serde(default)]
    pub class_group_id: String,
}
