use campus_store::DocStore;

use crate::service::AuthError;

/// Initialize the SQLite schema for identities and sessions.
pub fn init_schema(store: &dyn DocStore) -> Result<(), AuthError> {
    let statements = [
        // Identities: the portal's user records. The argon2 hash is a
        // plain column, deliberately outside the JSON document.
        "CREATE TABLE IF NOT EXISTS identities (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_identities_role ON identities(role)",

        // Sessions: one row per issued token.
        "CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY,
            identity_id TEXT NOT NULL,
            revoked INTEGER NOT NULL DEFAULT 0,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            expires_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_sessions_identity ON sessions(identity_id)",
    ];

    for stmt in &statements {
        store.exec(stmt, &[])?;
    }

    Ok(())
}
