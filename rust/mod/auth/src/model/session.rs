use serde::{Deserialize, Serialize};

use crate::model::Role;

/// A token issuance record, kept so logout can revoke the token before
/// its seven-day expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session id (UUIDv4, no dashes). Embedded in the JWT as `sid`.
    pub id: String,

    /// Identity that owns this session.
    pub identity_id: String,

    /// RFC 3339 timestamp when the token was issued.
    pub issued_at: String,

    /// RFC 3339 timestamp when the token expires.
    pub expires_at: String,

    /// Whether this session has been revoked (logout).
    #[serde(default)]
    pub revoked: bool,
}

/// JWT claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: identity id.
    pub sub: String,

    /// Role at issuance. Roles are immutable, so this never goes stale.
    pub role: Role,

    /// Session id, for revocation.
    pub sid: String,

    /// Issued at (unix timestamp).
    pub iat: i64,

    /// Expiration (unix timestamp).
    pub exp: i64,
}
