use campus_store::DocStore;

use crate::service::CommsError;

/// Initialize the SQLite schema for the comms collections.
pub fn init_schema(store: &dyn DocStore) -> Result<(), CommsError> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            sender TEXT NOT NULL,
            group_type TEXT NOT NULL,
            group_id TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_messages_group ON messages(group_type, group_id)",

        "CREATE TABLE IF NOT EXISTS announcements (
            id TEXT PRIMARY KEY,
            author TEXT NOT NULL,
            group_type TEXT NOT NULL,
            group_id TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_announcements_group ON announcements(group_type, group_id)",

        "CREATE TABLE IF NOT EXISTS circulars (
            id TEXT PRIMARY KEY,
            author TEXT NOT NULL,
            audience TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",

        "CREATE TABLE IF NOT EXISTS queries (
            id TEXT PRIMARY KEY,
            student TEXT NOT NULL,
            department TEXT NOT NULL,
            status TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_queries_department ON queries(department)",
        "CREATE INDEX IF NOT EXISTS idx_queries_student ON queries(student)",
    ];

    for stmt in &statements {
        store.exec(stmt, &[])?;
    }

    Ok(())
}
