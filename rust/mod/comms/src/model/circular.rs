use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who a circular is addressed to. Students see `all` and `students`;
/// faculty, HODs and principals see `all` and `staff`; admins see
/// everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    All,
    Students,
    Staff,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Students => "students",
            Audience::Staff => "staff",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Audience::All),
            "students" => Ok(Audience::Students),
            "staff" => Ok(Audience::Staff),
            other => Err(format!("unknown audience: {other}")),
        }
    }
}

/// A college-wide circular from the principal's office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circular {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Identity id of the author.
    pub author: String,

    /// Circular title.
    pub title: String,

    /// Circular body.
    pub body: String,

    /// Addressed audience.
    pub audience: Audience,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Input for publishing a circular.
#[derive(Debug, Clone, Deserialize)]
pub struct PostCircular {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub audience: Option<String>,
}
