//! Read queries for the release store.
//!
//! All reporting access is read-only; each call opens a statement,
//! runs it, and maps rows straight to the flat core records.

use curator_core::{
    FileStatus, IncompleteFile, IncompleteReleaseSummary, Release, ReleaseLink,
    VerificationOutcome,
};
use rusqlite::Connection;

use crate::operations::OperationError;

/// List all releases in insertion order.
pub fn list_releases(conn: &Connection) -> Result<Vec<Release>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, name, directory, file_count, notes, size,
                torrent_url, download_url, verification_outcome
         FROM releases ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], row_to_release)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Aggregate defect counts and sizes for every INCOMPLETE release.
///
/// Sums over an empty status group come back as zero (COALESCE), so a
/// release with only corrupted files still reports a missing size of 0.
pub fn incomplete_release_summaries(
    conn: &Connection,
) -> Result<Vec<IncompleteReleaseSummary>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT r.name, r.file_count, r.size, r.notes,
                COUNT(CASE WHEN f.status = 'CORRUPTED' THEN 1 END),
                COUNT(CASE WHEN f.status = 'MISSING' THEN 1 END),
                COALESCE(SUM(CASE WHEN f.status = 'CORRUPTED' THEN f.size END), 0),
                COALESCE(SUM(CASE WHEN f.status = 'MISSING' THEN f.size END), 0)
         FROM releases r
         LEFT JOIN incomplete_files f ON f.release_id = r.id
         WHERE r.verification_outcome = 'INCOMPLETE'
         GROUP BY r.id
         ORDER BY r.rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(IncompleteReleaseSummary {
            name: row.get(0)?,
            file_count: row.get(1)?,
            size: row.get(2)?,
            notes: row.get(3)?,
            corrupt_file_count: row.get(4)?,
            missing_file_count: row.get(5)?,
            corrupt_size: row.get(6)?,
            missing_size: row.get(7)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List every defect row for INCOMPLETE releases, joined to the
/// owning release's name.
pub fn list_incomplete_files(conn: &Connection) -> Result<Vec<IncompleteFile>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT r.name, f.file_path, f.size, f.status
         FROM incomplete_files f
         JOIN releases r ON r.id = f.release_id
         WHERE r.verification_outcome = 'INCOMPLETE'
         ORDER BY r.rowid, f.rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<u64>>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut files = Vec::new();
    for row in rows {
        let (release_name, file_path, size, status) = row?;
        let status = FileStatus::from_label(&status)
            .ok_or_else(|| OperationError::UnknownStatus(status.clone()))?;
        files.push(IncompleteFile {
            release_name,
            file_path,
            size,
            status,
        });
    }
    Ok(files)
}

/// List all release 14 link rows. Callers sort as needed.
pub fn list_release_14_links(conn: &Connection) -> Result<Vec<ReleaseLink>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT directory_path, base_url FROM release_14_links ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ReleaseLink {
            path: row.get(0)?,
            url: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn row_to_release(row: &rusqlite::Row<'_>) -> rusqlite::Result<Release> {
    let outcome: Option<String> = row.get(9)?;
    Ok(Release {
        id: row.get(0)?,
        date: row.get(1)?,
        name: row.get(2)?,
        directory: row.get(3)?,
        file_count: row.get(4)?,
        notes: row.get(5)?,
        size: row.get(6)?,
        torrent_url: row.get(7)?,
        download_url: row.get(8)?,
        verification_outcome: outcome.map(|label| VerificationOutcome::from_label(&label)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{insert_incomplete_file, insert_release, insert_release_14_link};
    use crate::schema::open_memory;

    fn release(id: &str, name: &str, outcome: Option<VerificationOutcome>) -> Release {
        Release {
            id: id.to_string(),
            date: "2004-01-01".to_string(),
            name: name.to_string(),
            directory: Some(format!("/data/{id}")),
            file_count: Some(10),
            notes: None,
            size: Some(1024),
            torrent_url: None,
            download_url: Some(format!("https://example.com/{id}")),
            verification_outcome: outcome,
        }
    }

    #[test]
    fn test_list_releases_round_trip() {
        let conn = open_memory().unwrap();
        insert_release(&conn, &release("r1", "Release 1", Some(VerificationOutcome::Verified)))
            .unwrap();
        insert_release(&conn, &release("r2", "Release 2", None)).unwrap();

        let releases = list_releases(&conn).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].name, "Release 1");
        assert_eq!(
            releases[0].verification_outcome,
            Some(VerificationOutcome::Verified)
        );
        assert_eq!(releases[1].verification_outcome, None);
    }

    #[test]
    fn test_unlisted_outcome_passes_through() {
        let conn = open_memory().unwrap();
        let outcome = VerificationOutcome::Other("PARTIALLY CHECKED".to_string());
        insert_release(&conn, &release("r1", "Release 1", Some(outcome.clone()))).unwrap();

        let releases = list_releases(&conn).unwrap();
        assert_eq!(releases[0].verification_outcome, Some(outcome));
    }

    #[test]
    fn test_incomplete_release_summaries() {
        let conn = open_memory().unwrap();
        insert_release(
            &conn,
            &release("r1", "Broken", Some(VerificationOutcome::Incomplete)),
        )
        .unwrap();
        insert_release(
            &conn,
            &release("r2", "Fine", Some(VerificationOutcome::Verified)),
        )
        .unwrap();
        insert_incomplete_file(&conn, "r1", "/a/one.avi", Some(100), FileStatus::Corrupted)
            .unwrap();
        insert_incomplete_file(&conn, "r1", "/a/two.avi", Some(50), FileStatus::Corrupted)
            .unwrap();
        insert_incomplete_file(&conn, "r1", "/a/three.avi", None, FileStatus::Missing).unwrap();

        let summaries = incomplete_release_summaries(&conn).unwrap();
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.name, "Broken");
        assert_eq!(summary.corrupt_file_count, 2);
        assert_eq!(summary.missing_file_count, 1);
        assert_eq!(summary.corrupt_size, 150);
        // NULL sizes sum to NULL, normalized to zero.
        assert_eq!(summary.missing_size, 0);
    }

    #[test]
    fn test_incomplete_summary_without_defect_rows() {
        // INCOMPLETE implies defect rows exist, but the converse query
        // must still behave when none do.
        let conn = open_memory().unwrap();
        insert_release(
            &conn,
            &release("r1", "Broken", Some(VerificationOutcome::Incomplete)),
        )
        .unwrap();

        let summaries = incomplete_release_summaries(&conn).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].corrupt_file_count, 0);
        assert_eq!(summaries[0].missing_size, 0);
    }

    #[test]
    fn test_list_incomplete_files_filters_to_incomplete_releases() {
        let conn = open_memory().unwrap();
        insert_release(
            &conn,
            &release("r1", "Broken", Some(VerificationOutcome::Incomplete)),
        )
        .unwrap();
        insert_release(
            &conn,
            &release("r2", "Fine", Some(VerificationOutcome::Verified)),
        )
        .unwrap();
        insert_incomplete_file(&conn, "r1", "/a/one.avi", Some(100), FileStatus::Corrupted)
            .unwrap();
        insert_incomplete_file(&conn, "r2", "/b/stale.avi", Some(5), FileStatus::Missing)
            .unwrap();

        let files = list_incomplete_files(&conn).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].release_name, "Broken");
        assert_eq!(files[0].status, FileStatus::Corrupted);
    }

    #[test]
    fn test_list_release_14_links() {
        let conn = open_memory().unwrap();
        insert_release_14_link(
            &conn,
            &ReleaseLink {
                path: "42A".to_string(),
                url: "https://example.com/42A".to_string(),
            },
        )
        .unwrap();

        let links = list_release_14_links(&conn).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].path, "42A");
    }
}
