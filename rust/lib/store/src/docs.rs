//! Typed helpers over [`DocStore`] for JSON-document tables.
//!
//! Document tables follow one convention: an `id TEXT PRIMARY KEY`
//! column, a `data TEXT` column holding the serialized document, a
//! `created_at TEXT` column for ordering, and whatever extra index
//! columns the owning module extracts for filtering. Modules create
//! their own tables in their `service/schema.rs`; these helpers only
//! read and write rows.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::traits::{DocStore, Value};

fn decode<T: DeserializeOwned>(data: &str) -> Result<T, StoreError> {
    serde_json::from_str(data).map_err(|e| StoreError::Document(e.to_string()))
}

fn encode<T: Serialize>(doc: &T) -> Result<String, StoreError> {
    serde_json::to_string(doc).map_err(|e| StoreError::Document(e.to_string()))
}

/// Insert a document. `index` lists extra index columns to populate
/// alongside `id` and `data`. A unique-constraint violation surfaces as
/// [`StoreError::Conflict`].
pub fn insert_doc<T: Serialize>(
    store: &dyn DocStore,
    table: &str,
    id: &str,
    index: &[(&str, Value)],
    doc: &T,
) -> Result<(), StoreError> {
    let mut columns = vec!["id".to_string(), "data".to_string()];
    let mut params = vec![Value::Text(id.to_string()), Value::Text(encode(doc)?)];
    for (name, value) in index {
        columns.push((*name).to_string());
        params.push(value.clone());
    }

    let placeholders: Vec<String> = (1..=params.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    );
    store.exec(&sql, &params)?;
    Ok(())
}

/// Fetch a document by primary key.
pub fn get_doc<T: DeserializeOwned>(
    store: &dyn DocStore,
    table: &str,
    id: &str,
) -> Result<Option<T>, StoreError> {
    get_doc_by(store, table, "id", &Value::Text(id.to_string()))
}

/// Fetch a document by an arbitrary index column. Returns the first
/// match; callers use this on unique columns only.
pub fn get_doc_by<T: DeserializeOwned>(
    store: &dyn DocStore,
    table: &str,
    column: &str,
    value: &Value,
) -> Result<Option<T>, StoreError> {
    let sql = format!("SELECT data FROM {table} WHERE {column} = ?1 LIMIT 1");
    let rows = store.query(&sql, std::slice::from_ref(value))?;
    match rows.first().and_then(|r| r.get_str("data")) {
        Some(data) => Ok(Some(decode(data)?)),
        None => Ok(None),
    }
}

/// Replace a document and its index columns. Returns false when no row
/// has the given id.
pub fn update_doc<T: Serialize>(
    store: &dyn DocStore,
    table: &str,
    id: &str,
    index: &[(&str, Value)],
    doc: &T,
) -> Result<bool, StoreError> {
    let mut sets = vec!["data = ?1".to_string()];
    let mut params = vec![Value::Text(encode(doc)?)];
    for (name, value) in index {
        params.push(value.clone());
        sets.push(format!("{} = ?{}", name, params.len()));
    }
    params.push(Value::Text(id.to_string()));
    let sql = format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        table,
        sets.join(", "),
        params.len()
    );
    Ok(store.exec(&sql, &params)? > 0)
}

/// Delete a document. Returns false when no row has the given id.
pub fn delete_doc(store: &dyn DocStore, table: &str, id: &str) -> Result<bool, StoreError> {
    let sql = format!("DELETE FROM {table} WHERE id = ?1");
    Ok(store.exec(&sql, &[Value::Text(id.to_string())])? > 0)
}

/// List documents matching every equality filter, newest first, with
/// the total match count for pagination.
pub fn list_docs<T: DeserializeOwned>(
    store: &dyn DocStore,
    table: &str,
    filters: &[(&str, Value)],
    limit: usize,
    offset: usize,
) -> Result<(Vec<T>, usize), StoreError> {
    let mut clauses = Vec::new();
    let mut params = Vec::new();
    for (name, value) in filters {
        params.push(value.clone());
        clauses.push(format!("{} = ?{}", name, params.len()));
    }
    let filter = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let count_sql = format!("SELECT COUNT(*) AS n FROM {table}{filter}");
    let total = store
        .query(&count_sql, &params)?
        .first()
        .and_then(|r| r.get_i64("n"))
        .unwrap_or(0) as usize;

    let sql = format!(
        "SELECT data FROM {table}{filter} ORDER BY created_at DESC LIMIT {limit} OFFSET {offset}"
    );
    let rows = store.query(&sql, &params)?;
    let mut items = Vec::with_capacity(rows.len());
    for row in &rows {
        if let Some(data) = row.get_str("data") {
            items.push(decode(data)?);
        }
    }
    Ok((items, total))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::sqlite::SqliteStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        author: String,
        body: String,
        created_at: String,
    }

    fn store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .exec(
                "CREATE TABLE notes (
                    id TEXT PRIMARY KEY,
                    author TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    data TEXT NOT NULL
                )",
                &[],
            )
            .unwrap();
        store
    }

    fn note(id: &str, author: &str, created_at: &str) -> Note {
        Note {
            id: id.to_string(),
            author: author.to_string(),
            body: format!("note {id}"),
            created_at: created_at.to_string(),
        }
    }

    fn put(store: &SqliteStore, n: &Note) {
        insert_doc(
            store,
            "notes",
            &n.id,
            &[
                ("author", Value::Text(n.author.clone())),
                ("created_at", Value::Text(n.created_at.clone())),
            ],
            n,
        )
        .unwrap();
    }

    #[test]
    fn test_insert_and_get() {
        let store = store();
        let n = note("n1", "alice", "2026-01-01T00:00:00.000000Z");
        put(&store, &n);

        let got: Option<Note> = get_doc(&store, "notes", "n1").unwrap();
        assert_eq!(got, Some(n));

        let missing: Option<Note> = get_doc(&store, "notes", "nope").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_get_by_index_column() {
        let store = store();
        put(&store, &note("n1", "alice", "2026-01-01T00:00:00.000000Z"));

        let got: Option<Note> =
            get_doc_by(&store, "notes", "author", &Value::Text("alice".into())).unwrap();
        assert_eq!(got.unwrap().id, "n1");
    }

    #[test]
    fn test_duplicate_id_is_conflict() {
        let store = store();
        let n = note("n1", "alice", "2026-01-01T00:00:00.000000Z");
        put(&store, &n);
        let err = insert_doc(
            &store,
            "notes",
            "n1",
            &[
                ("author", Value::Text("bob".into())),
                ("created_at", Value::Text(n.created_at.clone())),
            ],
            &n,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test]
    fn test_update() {
        let store = store();
        let mut n = note("n1", "alice", "2026-01-01T00:00:00.000000Z");
        put(&store, &n);

        n.body = "edited".to_string();
        let updated = update_doc(
            &store,
            "notes",
            "n1",
            &[("author", Value::Text(n.author.clone()))],
            &n,
        )
        .unwrap();
        assert!(updated);

        let got: Note = get_doc(&store, "notes", "n1").unwrap().unwrap();
        assert_eq!(got.body, "edited");

        let missing = update_doc(&store, "notes", "nope", &[], &n).unwrap();
        assert!(!missing);
    }

    #[test]
    fn test_delete() {
        let store = store();
        put(&store, &note("n1", "alice", "2026-01-01T00:00:00.000000Z"));
        assert!(delete_doc(&store, "notes", "n1").unwrap());
        assert!(!delete_doc(&store, "notes", "n1").unwrap());
    }

    #[test]
    fn test_list_filters_and_orders_newest_first() {
        let store = store();
        put(&store, &note("n1", "alice", "2026-01-01T00:00:00.000000Z"));
        put(&store, &note("n2", "bob", "2026-01-02T00:00:00.000000Z"));
        put(&store, &note("n3", "alice", "2026-01-03T00:00:00.000000Z"));

        let (all, total): (Vec<Note>, usize) = list_docs(&store, "notes", &[], 10, 0).unwrap();
        assert_eq!(total, 3);
        let ids: Vec<&str> = all.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n3", "n2", "n1"]);

        let (alice, total): (Vec<Note>, usize) = list_docs(
            &store,
            "notes",
            &[("author", Value::Text("alice".into()))],
            10,
            0,
        )
        .unwrap();
        assert_eq!(total, 2);
        assert!(alice.iter().all(|n| n.author == "alice"));
    }

    #[test]
    fn test_list_pagination_total_ignores_window() {
        let store = store();
        for i in 0..5 {
            put(
                &store,
                &note(
                    &format!("n{i}"),
                    "alice",
                    &format!("2026-01-0{}T00:00:00.000000Z", i + 1),
                ),
            );
        }
        let (page, total): (Vec<Note>, usize) = list_docs(&store, "notes", &[], 2, 2).unwrap();
        assert_eq!(total, 5);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "n2");
        assert_eq!(page[1].id, "n1");
    }
}
