//! Persistence for the `Items` table.
//!
//! Stored fields stay nullable; placeholder defaults are a presentation
//! concern handled by the HTTP layer.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::db::Database;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(i64),

    #[error("database operation failed")]
    Database(#[from] rusqlite::Error),

    #[error("failed to prepare database location")]
    Io(#[from] std::io::Error),
}

/// A single to-do entry exactly as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: Option<String>,
    pub is_complete: Option<bool>,
}

/// Payload for creating an item. Both fields may be omitted or null.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: Option<bool>,
}

/// Merge-update payload: only `Some` fields overwrite stored values.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: Option<bool>,
}

#[derive(Clone)]
pub struct ItemStore {
    db: Database,
}

impl ItemStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// All items in insertion order.
    #[instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, isComplete FROM Items ORDER BY id")?;
            let items = stmt
                .query_map([], item_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(items)
        })
    }

    /// Insert a new item. A missing completion flag is stored as `false`.
    #[instrument(skip(self, input), fields(name = ?input.name))]
    pub fn create(&self, input: &NewItem) -> Result<Item, StoreError> {
        self.db.with_conn(|conn| {
            let is_complete = input.is_complete.unwrap_or(false);
            conn.execute(
                "INSERT INTO Items (name, isComplete) VALUES (?1, ?2)",
                params![input.name, is_complete],
            )?;
            let id = conn.last_insert_rowid();
            debug!(id, "item created");
            Ok(Item {
                id,
                name: input.name.clone(),
                is_complete: Some(is_complete),
            })
        })
    }

    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        self.db.with_conn(|conn| {
            let item = conn
                .query_row(
                    "SELECT id, name, isComplete FROM Items WHERE id = ?1",
                    [id],
                    item_from_row,
                )
                .optional()?;
            Ok(item)
        })
    }

    /// Overwrite only the non-null fields of `patch`. The merged row comes
    /// back from the same statement that wrote it.
    #[instrument(skip(self, patch))]
    pub fn update(&self, id: i64, patch: &ItemPatch) -> Result<Item, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "UPDATE Items
                 SET name = COALESCE(?2, name),
                     isComplete = COALESCE(?3, isComplete)
                 WHERE id = ?1
                 RETURNING id, name, isComplete",
                params![id, patch.name, patch.is_complete],
                item_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound(id))
        })
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let removed = self
            .db
            .with_conn(|conn| Ok(conn.execute("DELETE FROM Items WHERE id = ?1", [id])?))?;
        if removed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "item deleted");
        Ok(())
    }
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        is_complete: row.get(2)?,
    })
}
