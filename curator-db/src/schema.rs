//! SQLite schema creation for the release store.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create all tables and indexes if they don't exist.
///
/// Idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create the release database at the given path.
///
/// The parent directory is created if absent.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Default database location under the user data directory.
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("archive-curator").join("releases.db"))
}

const SCHEMA_SQL: &str = r#"
-- One curated release of archived content
CREATE TABLE IF NOT EXISTS releases (
    id TEXT PRIMARY KEY,
    date TEXT NOT NULL,
    name TEXT NOT NULL,
    directory TEXT,
    file_count INTEGER,
    notes TEXT,
    size INTEGER,
    torrent_url TEXT,
    download_url TEXT,
    verification_outcome TEXT
);

-- Corrupted or missing files recorded during verification
CREATE TABLE IF NOT EXISTS incomplete_files (
    release_id TEXT NOT NULL REFERENCES releases(id),
    file_path TEXT NOT NULL,
    size INTEGER,
    status TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_incomplete_release ON incomplete_files(release_id);

-- Directory-to-URL cross references for release 14
CREATE TABLE IF NOT EXISTS release_14_links (
    directory_path TEXT NOT NULL,
    base_url TEXT NOT NULL
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_schema_is_idempotent() {
        let conn = open_memory().unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
    }

    #[test]
    fn test_open_database_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("releases.db");
        let conn = open_database(&path).unwrap();
        drop(conn);
        assert!(path.exists());
    }
}
