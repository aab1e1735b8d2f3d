use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five portal roles. Fixed at registration; there is no promotion
/// flow, so a role never changes after the identity is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Hod,
    Principal,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Hod => "hod",
            Role::Principal => "principal",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "hod" => Ok(Role::Hod),
            "principal" => Ok(Role::Principal),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A registered portal member.
///
/// The password hash is never part of this document; it lives in its own
/// column on the identities table and is only read during login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Login email, unique across the portal.
    pub email: String,

    /// Portal role, immutable after registration.
    pub role: Role,

    /// Department id, for students/faculty/HODs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Class group id, for students.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_group: Option<String>,

    /// Admission batch label, e.g. "2024-28".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,

    /// Current study year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for registering a new identity.
///
/// `role` stays a string here so an unknown value surfaces as a
/// validation failure with our envelope instead of a body-decode error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterIdentity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub class_group: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Hod).unwrap(), "\"hod\"");
        let role: Role = serde_json::from_str("\"principal\"").unwrap();
        assert_eq!(role, Role::Principal);
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert!("dean".parse::<Role>().is_err());
        assert_eq!("faculty".parse::<Role>().unwrap(), Role::Faculty);
    }

    #[test]
    fn test_identity_wire_shape() {
        let identity = Identity {
            id: "abc".into(),
            name: "Asha".into(),
            email: "asha@campus.edu".into(),
            role: Role::Student,
            department: Some("d1".into()),
            class_group: Some("c1".into()),
            batch: Some("2024-28".into()),
            year: Some(2),
            created_at: "2026-01-01T00:00:00.000000Z".into(),
            updated_at: "2026-01-01T00:00:00.000000Z".into(),
        };
        let v = serde_json::to_value(&identity).unwrap();
        assert_eq!(v["classGroup"], "c1");
        assert_eq!(v["createdAt"], "2026-01-01T00:00:00.000000Z");
        assert!(v.get("password_hash").is_none());
        assert!(v.get("passwordHash").is_none());
    }
}
