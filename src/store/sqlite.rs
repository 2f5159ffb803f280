//! SQLite-backed plugin-data store (CLI persistence).

use crate::errors::AppResult;
use crate::store::{CardStore, Scope};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at `path` and ensure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS plugin_data (
                card_id TEXT NOT NULL,
                scope   TEXT NOT NULL,
                key     TEXT NOT NULL,
                value   TEXT NOT NULL,
                PRIMARY KEY (card_id, scope, key)
            );

            CREATE INDEX IF NOT EXISTS idx_plugin_data_card ON plugin_data(card_id);
            "#,
        )?;
        Ok(Self { conn })
    }

    /// Distinct ids of every card with at least one stored entry.
    pub fn tracked_cards(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT card_id FROM plugin_data ORDER BY card_id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut cards = Vec::new();
        for row in rows {
            cards.push(row?);
        }
        Ok(cards)
    }

    /// Assemble the card's shared entries into plugin-data fragments for the
    /// report layer (one JSON object blob keyed like the host stored them).
    pub fn fragments_for(&self, card_id: &str) -> AppResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, value FROM plugin_data WHERE card_id = ?1 AND scope = 'shared' ORDER BY key",
        )?;
        let rows = stmt.query_map(params![card_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut payload = serde_json::Map::new();
        for row in rows {
            let (key, raw) = row?;
            payload.insert(key, serde_json::from_str(&raw)?);
        }

        if payload.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![serde_json::to_string(&Value::Object(payload))?])
        }
    }
}

impl CardStore for SqliteStore {
    fn get(&self, card_id: &str, scope: Scope, key: &str) -> AppResult<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM plugin_data WHERE card_id = ?1 AND scope = ?2 AND key = ?3",
                params![card_id, scope.as_str(), key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, card_id: &str, scope: Scope, key: &str, value: Value) -> AppResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO plugin_data (card_id, scope, key, value) VALUES (?1, ?2, ?3, ?4)",
            params![card_id, scope.as_str(), key, serde_json::to_string(&value)?],
        )?;
        Ok(())
    }

    fn remove(&mut self, card_id: &str, scope: Scope, key: &str) -> AppResult<()> {
        self.conn.execute(
            "DELETE FROM plugin_data WHERE card_id = ?1 AND scope = ?2 AND key = ?3",
            params![card_id, scope.as_str(), key],
        )?;
        Ok(())
    }
}
