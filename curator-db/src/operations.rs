//! Insert operations for the release store.

use curator_core::{FileStatus, Release, ReleaseLink};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Unknown file status {0:?} in incomplete_files")]
    UnknownStatus(String),
}

/// Insert a release row.
pub fn insert_release(conn: &Connection, release: &Release) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO releases (id, date, name, directory, file_count, notes, size,
                               torrent_url, download_url, verification_outcome)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            release.id,
            release.date,
            release.name,
            release.directory,
            release.file_count,
            release.notes,
            release.size,
            release.torrent_url,
            release.download_url,
            release
                .verification_outcome
                .as_ref()
                .map(|outcome| outcome.to_string()),
        ],
    )?;
    Ok(())
}

/// Record a corrupted or missing file against a release.
pub fn insert_incomplete_file(
    conn: &Connection,
    release_id: &str,
    file_path: &str,
    size: Option<u64>,
    status: FileStatus,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO incomplete_files (release_id, file_path, size, status)
         VALUES (?1, ?2, ?3, ?4)",
        params![release_id, file_path, size, status.as_str()],
    )?;
    Ok(())
}

/// Insert a release 14 link row.
pub fn insert_release_14_link(
    conn: &Connection,
    link: &ReleaseLink,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO release_14_links (directory_path, base_url) VALUES (?1, ?2)",
        params![link.path, link.url],
    )?;
    Ok(())
}
