use crate::model::StorageError;
use crate::storage::KeyValueStore;
use rusqlite::{Connection, OptionalExtension, params};

/// Key-value store persisted in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
    quota_bytes: Option<usize>,
}

impl SqliteStore {
    /// Открывает базу и создаёт таблицу при необходимости
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        Self::init(Connection::open(db_path)?)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;

        // Older databases predate the timestamp column
        Self::migrate_add_column_if_missing(&conn, "local_storage", "updated_at", "TEXT NOT NULL DEFAULT ''")?;

        Ok(Self { conn, quota_bytes: None })
    }

    /// Caps the combined size of keys and values, like a browser origin quota.
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    fn migrate_add_column_if_missing(
        conn: &Connection,
        table: &str,
        column: &str,
        column_def: &str,
    ) -> Result<(), StorageError> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let existing_columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<_, _>>()?;

        if !existing_columns.iter().any(|c| c == column) {
            let alter_sql = format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, column_def);
            conn.execute(&alter_sql, [])?;
        }

        Ok(())
    }

    /// Bytes used by every entry except `key`.
    fn used_bytes_excluding(&self, key: &str) -> Result<usize, StorageError> {
        let used: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0)
             FROM local_storage WHERE key <> ?1",
            params![key],
            |row| row.get(0),
        )?;
        Ok(used.max(0) as usize)
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_excluding(key)? + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        self.conn.execute(
            "INSERT OR REPLACE INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}
