use campus_store::DocStore;

use crate::service::CourseworkError;

/// Initialize the SQLite schema for the coursework collections.
pub fn init_schema(store: &dyn DocStore) -> Result<(), CourseworkError> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS assignments (
            id TEXT PRIMARY KEY,
            course_group TEXT NOT NULL,
            created_by TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_assignments_course ON assignments(course_group)",

        "CREATE TABLE IF NOT EXISTS submissions (
            id TEXT PRIMARY KEY,
            assignment TEXT NOT NULL,
            student TEXT NOT NULL,
            status TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_submissions_assignment_student
            ON submissions(assignment, student)",

        "CREATE TABLE IF NOT EXISTS attendance (
            id TEXT PRIMARY KEY,
            course_group TEXT NOT NULL,
            date TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_course_date
            ON attendance(course_group, date)",
    ];

    for stmt in &statements {
        store.exec(stmt, &[])?;
    }

    Ok(())
}
