//! SQLite persistence for the product collection.
//!
//! `Db` is a cheap handle holding the database path; a connection is opened
//! per call and the schema is ensured on open, so every operation works
//! against a valid table without a separate migration step. The store owns
//! identifier assignment (UUID v4, treated as an opaque string by everything
//! above this module) and timestamping: callers never supply either.

use chrono::{DateTime, Utc};
use common::model::product::Product;
use common::requests::ProductInput;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                image TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(conn)
    }

    /// Inserts a new record, assigning a fresh id and both timestamps.
    pub fn insert(&self, name: &str, price: f64, image: &str) -> rusqlite::Result<Product> {
        let conn = self.connect()?;
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price,
            image: image.to_string(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        conn.execute(
            "INSERT INTO products (id, name, price, image, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                product.id,
                product.name,
                product.price,
                product.image,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ],
        )?;

        Ok(product)
    }

    /// Returns every record in insertion order.
    pub fn list(&self) -> rusqlite::Result<Vec<Product>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, price, image, created_at, updated_at
             FROM products ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], row_to_product)?;
        rows.collect()
    }

    /// Applies the fields present in `input` to the record matching `id` and
    /// refreshes `updated_at`. Returns the full updated record, or `None` when
    /// no record matches.
    pub fn update(&self, id: &str, input: &ProductInput) -> rusqlite::Result<Option<Product>> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE products SET
                name = COALESCE(?2, name),
                price = COALESCE(?3, price),
                image = COALESCE(?4, image),
                updated_at = ?5
             WHERE id = ?1",
            params![
                id,
                input.name,
                input.price,
                input.image,
                Utc::now().to_rfc3339(),
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        find(&conn, id)
    }

    /// Deletes the record matching `id` if present. Returns whether a record
    /// actually existed; deleting an absent id is not an error.
    pub fn delete(&self, id: &str) -> rusqlite::Result<bool> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

fn find(conn: &Connection, id: &str) -> rusqlite::Result<Option<Product>> {
    let result = conn.query_row(
        "SELECT id, name, price, image, created_at, updated_at
         FROM products WHERE id = ?1",
        params![id],
        row_to_product,
    );
    match result {
        Ok(product) => Ok(Some(product)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        image: row.get(3)?,
        created_at: parse_timestamp(row.get(4)?),
        updated_at: parse_timestamp(row.get(5)?),
    })
}

fn parse_timestamp(raw: String) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_db() -> (TempDir, Db) {
        let dir = TempDir::new().unwrap();
        let db = Db::new(dir.path().join("products.sqlite"));
        (dir, db)
    }

    #[test]
    fn insert_assigns_distinct_ids_and_timestamps() {
        let (_dir, db) = temp_db();
        let first = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        let second = db.insert("Mug", 7.0, "http://x/mug.png").unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.created_at.is_some());
        assert_eq!(first.created_at, first.updated_at);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let (_dir, db) = temp_db();
        db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        db.insert("Mug", 7.0, "http://x/mug.png").unwrap();

        let names: Vec<String> = db.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Pen", "Mug"]);
    }

    #[test]
    fn update_applies_partial_fields_and_keeps_the_rest() {
        let (_dir, db) = temp_db();
        let created = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();

        let input = ProductInput {
            price: Some(2.0),
            ..Default::default()
        };
        let updated = db.update(&created.id, &input).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Pen");
        assert_eq!(updated.price, 2.0);
        assert_eq!(updated.image, created.image);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_of_unknown_id_touches_nothing() {
        let (_dir, db) = temp_db();
        let created = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();

        let input = ProductInput {
            name: Some("Pencil".to_string()),
            ..Default::default()
        };
        let missing = Uuid::new_v4().to_string();
        assert_eq!(db.update(&missing, &input).unwrap(), None);

        let all = db.list().unwrap();
        assert_eq!(all, vec![created]);
    }

    #[test]
    fn delete_is_idempotent_and_scoped_to_one_record() {
        let (_dir, db) = temp_db();
        let keep = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        let gone = db.insert("Mug", 7.0, "http://x/mug.png").unwrap();

        assert!(db.delete(&gone.id).unwrap());
        assert!(!db.delete(&gone.id).unwrap());

        let all = db.list().unwrap();
        assert_eq!(all, vec![keep]);
    }
}
