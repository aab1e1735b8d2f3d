use serde::{Deserialize, Serialize};

/// Submission lifecycle: replaceable while `submitted`, frozen once
/// `graded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Graded => "graded",
        }
    }
}

/// The grade attached to a marked submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    /// Marks out of 100.
    pub marks: u32,

    /// Optional written feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    /// Identity id of the marking faculty.
    pub graded_by: String,

    /// RFC 3339 grading timestamp.
    pub graded_at: String,
}

/// One student's submission for one assignment. At most one per
/// (assignment, student); resubmitting before grading replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Owning assignment id.
    pub assignment: String,

    /// Identity id of the submitting student.
    pub student: String,

    /// Submitted work (text or a link).
    pub content: String,

    /// RFC 3339 submission timestamp, refreshed on resubmit.
    pub submitted_at: String,

    /// True when submitted after the assignment deadline.
    pub late: bool,

    /// submitted | graded.
    pub status: SubmissionStatus,

    /// Present once graded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
}

/// Input for submitting work.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitWork {
    #[serde(default)]
    pub content: String,
}

/// Input for grading a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmission {
    pub marks: Option<u32>,
    #[serde(default)]
    pub feedback: Option<String>,
}
