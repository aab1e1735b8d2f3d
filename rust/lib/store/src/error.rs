use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("execution error: {0}")]
    Execution(String),

    /// Unique-constraint violation on insert.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Stored JSON does not round-trip through the document type.
    #[error("document error: {0}")]
    Document(String),
}
