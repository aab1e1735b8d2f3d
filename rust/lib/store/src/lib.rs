//! Document store over embedded SQLite.
//!
//! Every collection is a table with a JSON `data` column plus a few
//! extracted index columns for filtering and ordering. Modules create
//! their own tables (see each module's `service/schema.rs`) and go
//! through the typed helpers in [`docs`] for CRUD; raw `query`/`exec`
//! remain available for joins and bulk statements.

pub mod docs;
pub mod error;
pub mod sqlite;
pub mod traits;

pub use error::StoreError;
pub use sqlite::SqliteStore;
pub use traits::{DocStore, Row, Value};
