use campus_groups::model::GroupKind;
use serde::{Deserialize, Serialize};

/// A group chat message. Append-only; never edited or deleted.
/// Retrieval orders by timestamp descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Identity id of the sender.
    pub sender: String,

    /// Target group collection.
    pub group_type: GroupKind,

    /// Target group id.
    pub group_id: String,

    /// Message body.
    pub content: String,

    /// RFC 3339 timestamp assigned at insert.
    pub timestamp: String,
}

/// Input for sending a message. Group fields stay raw strings here so
/// the authorization sequence can produce its own wording for missing
/// or unknown values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessage {
    #[serde(default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub content: String,
}
