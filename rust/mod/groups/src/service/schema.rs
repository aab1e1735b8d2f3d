use campus_store::DocStore;

use crate::service::GroupsError;

/// Initialize the SQLite schema for the three group collections.
///
/// Membership arrays are part of the JSON document, not join tables:
/// the access check reads one row and decides.
pub fn init_schema(store: &dyn DocStore) -> Result<(), GroupsError> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS departments (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",

        "CREATE TABLE IF NOT EXISTS class_groups (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            department TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_class_groups_department ON class_groups(department)",

        "CREATE TABLE IF NOT EXISTS course_groups (
            id TEXT PRIMARY KEY,
            course_code TEXT NOT NULL,
            class_group TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_course_groups_class ON course_groups(class_group)",
    ];

    for stmt in &statements {
        store.exec(stmt, &[])?;
    }

    Ok(())
}
