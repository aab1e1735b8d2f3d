use campus_groups::model::GroupKind;
use serde::{Deserialize, Serialize};

/// A group-scoped announcement posted by teaching staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Identity id of the author.
    pub author: String,

    /// Target group collection.
    pub group_type: GroupKind,

    /// Target group id.
    pub group_id: String,

    /// Short headline.
    pub title: String,

    /// Announcement body.
    pub content: String,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Input for posting an announcement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnnouncement {
    #[serde(default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
