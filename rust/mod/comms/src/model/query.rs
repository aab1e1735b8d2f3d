use serde::{Deserialize, Serialize};

/// Lifecycle of a student query: open until a staff member responds,
/// answered afterwards. Answered is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Open,
    Answered,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Open => "open",
            QueryStatus::Answered => "answered",
        }
    }
}

/// The staff response attached to an answered query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Identity id of the responding staff member.
    pub responder: String,

    /// Response body.
    pub content: String,

    /// RFC 3339 response timestamp.
    pub responded_at: String,
}

/// A student question addressed to a department inbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Identity id of the asking student.
    pub student: String,

    /// Target department id.
    pub department: String,

    /// Subject line.
    pub subject: String,

    /// Question body.
    pub content: String,

    /// open | answered.
    pub status: QueryStatus,

    /// Present once answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<QueryResponse>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for raising a query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
}

/// Input for responding to a query.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondQuery {
    #[serde(default)]
    pub content: String,
}
