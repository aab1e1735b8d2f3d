use serde::{Deserialize, Serialize};

/// One session's attendance for one course group. Keyed by
/// (courseGroup, date); recording the same date again replaces the
/// earlier sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Owning course group id.
    pub course_group: String,

    /// Session date, `YYYY-MM-DD`.
    pub date: String,

    /// Identity ids of the students marked present.
    #[serde(default)]
    pub present: Vec<String>,

    /// Identity id of the recording faculty.
    pub recorded_by: String,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for recording a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendance {
    #[serde(default)]
    pub course_group_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub present: Vec<String>,
}

/// A student's own attendance counts for one course group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Sessions recorded for the course group.
    pub held: usize,

    /// Sessions the student was marked present in.
    pub attended: usize,
}
