//! Bootstrap — first-start checks and admin account creation.
//!
//! When campusd starts:
//! 1. Verify the config carries an admin password hash — refuse to
//!    start without one.
//! 2. Ensure the admin identity exists in the database.

use std::sync::Arc;

use campus_auth::service::AuthService;

use crate::config::ServerConfig;

/// Verify server configuration is ready for production use.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.admin.password_hash.is_empty() {
        anyhow::bail!(
            "No admin password hash found in configuration.\n\
             Set [admin] password_hash to an argon2id PHC string first."
        );
    }
    if config.admin.email.is_empty() {
        anyhow::bail!("Admin email is empty in configuration.");
    }
    if config.jwt.secret.is_empty() {
        anyhow::bail!("JWT secret is empty in configuration.");
    }
    if config.storage.data_dir.is_empty() {
        anyhow::bail!("Storage data_dir is empty in configuration.");
    }
    Ok(())
}

/// Ensure the bootstrap admin identity exists. Creates it if missing;
/// an existing admin is left untouched, including its password hash.
pub fn ensure_admin(auth: &Arc<AuthService>, config: &ServerConfig) -> anyhow::Result<()> {
    auth.ensure_admin(
        &config.admin.name,
        &config.admin.email,
        &config.admin.password_hash,
    )
    .map_err(|e| anyhow::anyhow!("failed to ensure admin identity: {}", e))
}
