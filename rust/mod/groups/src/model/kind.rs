use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three group collections messages can target. Closed set: the
/// membership rules are an exhaustive match over this enum, so a new
/// group kind is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Department,
    ClassGroup,
    CourseGroup,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Department => "Department",
            GroupKind::ClassGroup => "ClassGroup",
            GroupKind::CourseGroup => "CourseGroup",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Department" => Ok(GroupKind::Department),
            "ClassGroup" => Ok(GroupKind::ClassGroup),
            "CourseGroup" => Ok(GroupKind::CourseGroup),
            other => Err(format!("unknown group type: {other}")),
        }
    }
}
