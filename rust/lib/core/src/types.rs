use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// Pagination parameters for list/query operations.
///
/// `page` is 1-based; `limit` is capped so a single request cannot drain
/// a large collection.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    50
}

/// Upper bound on `limit`.
pub const MAX_LIMIT: usize = 200;

impl PageParams {
    /// Effective limit, clamped to [1, MAX_LIMIT].
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_LIMIT)
    }

    /// Row offset for the current page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.limit()
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

/// Result wrapper for list operations.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Current time as an RFC 3339 UTC string with fixed microsecond
/// precision, so timestamps order lexicographically the same way they
/// order chronologically.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
