//! Server-side configuration.
//!
//! A context name resolves to `/etc/campus/<name>.toml`; anything
//! containing `/` or `.` is treated as a literal path.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Server configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub storage: StorageConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
}

/// Storage paths.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the SQLite database.
    pub data_dir: String,
}

/// Token signing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// JWT signing secret.
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_expire_secs")]
    pub expire_secs: i64,
}

fn default_expire_secs() -> i64 {
    7 * 24 * 3600
}

/// The bootstrap admin account. Created on first start if missing.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_name")]
    pub name: String,
    pub email: String,
    /// Argon2id PHC string. Never a plaintext password.
    pub password_hash: String,
}

fn default_admin_name() -> String {
    "Administrator".to_string()
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/campus/{name_or_path}.toml"))
        }
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
