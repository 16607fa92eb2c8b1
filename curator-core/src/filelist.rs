//! Parsing and matching of line-oriented file listings.
//!
//! A listing pairs a path with a byte size, one `<path> (<size>)` entry
//! per line. Listings from two independent sources are matched on a
//! (basename, size) key as a proxy for file identity — no content is
//! compared, so two files with the same name and size are assumed to be
//! the same file.

use std::collections::HashMap;
use std::io::{BufRead, Read};
use std::path::Path;

use regex_lite::Regex;
use thiserror::Error;

/// Errors from reading listing or CSV inputs.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed CSV row (expected url,size): {0:?}")]
    MalformedRow(Vec<String>),

    #[error("Invalid size {value:?}: {source}")]
    InvalidSize {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// A parsed `<path> (<size>)` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub path: String,
    pub size: u64,
}

impl ListedFile {
    /// Final path component, used as the matching key.
    pub fn basename(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.path)
    }
}

/// Parse a listing, preserving line order.
///
/// Lines that don't match the `<path> (<size>)` pattern are silently
/// skipped.
pub fn parse_file_list<R: BufRead>(reader: R) -> Result<Vec<ListedFile>, ListError> {
    let pattern = Regex::new(r"^(.+) \((\d+)\)$").expect("static pattern");
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let Some(caps) = pattern.captures(line.trim()) else {
            continue;
        };
        // A size too large for u64 is treated like any other mismatch.
        let Ok(size) = caps[2].parse::<u64>() else {
            continue;
        };
        entries.push(ListedFile {
            path: caps[1].to_string(),
            size,
        });
    }
    Ok(entries)
}

/// Insertion-ordered map from (basename, size) key to full path.
///
/// Duplicate keys keep their first position but take the last value,
/// mirroring the historical listing tools.
#[derive(Debug, Default)]
pub struct KeyedListing {
    order: Vec<(String, u64)>,
    paths: HashMap<(String, u64), String>,
}

impl KeyedListing {
    pub fn from_entries(entries: &[ListedFile]) -> Self {
        let mut listing = Self::default();
        for entry in entries {
            let key = (entry.basename().to_string(), entry.size);
            if !listing.paths.contains_key(&key) {
                listing.order.push(key.clone());
            }
            listing.paths.insert(key, entry.path.clone());
        }
        listing
    }

    pub fn get(&self, name: &str, size: u64) -> Option<&str> {
        self.paths
            .get(&(name.to_string(), size))
            .map(String::as_str)
    }

    /// Iterate (basename, size, path) in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64, &str)> {
        self.order.iter().map(|(name, size)| {
            let path = self.paths[&(name.clone(), *size)].as_str();
            (name.as_str(), *size, path)
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Result of matching one listing against another.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// (first-listing path, second-listing path) pairs, in first-listing order.
    pub matched: Vec<(String, String)>,
    /// (path, size) entries from the first listing with no counterpart.
    pub unmatched: Vec<(String, u64)>,
}

/// Match every (basename, size) key in `first` against `second`.
pub fn match_listings(first: &KeyedListing, second: &KeyedListing) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for (name, size, path) in first.iter() {
        match second.get(name, size) {
            Some(other) => outcome.matched.push((path.to_string(), other.to_string())),
            None => outcome.unmatched.push((path.to_string(), size)),
        }
    }
    outcome
}

/// How the CSV-keyed matcher pairs rows against the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Look up by basename, require equal sizes.
    Filename,
    /// Emit every listing entry whose size matches, duplicates allowed.
    SizeOnly,
}

/// A `url,size` row from a remote listing export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSizeRow {
    pub url: String,
    pub size: u64,
}

/// Read a headerless `url,size` CSV.
pub fn read_url_size_csv<R: Read>(reader: R) -> Result<Vec<UrlSizeRow>, ListError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(ListError::MalformedRow(
                record.iter().map(String::from).collect(),
            ));
        }
        let size = record[1].trim().parse().map_err(|source| ListError::InvalidSize {
            value: record[1].to_string(),
            source,
        })?;
        rows.push(UrlSizeRow {
            url: record[0].to_string(),
            size,
        });
    }
    Ok(rows)
}

/// Insertion-ordered map from basename to (path, size).
///
/// Same duplicate-key behavior as [`KeyedListing`]: first position,
/// last value.
#[derive(Debug, Default)]
pub struct NameKeyedListing {
    order: Vec<String>,
    entries: HashMap<String, (String, u64)>,
}

impl NameKeyedListing {
    pub fn from_entries(entries: &[ListedFile]) -> Self {
        let mut listing = Self::default();
        for entry in entries {
            let name = entry.basename().to_string();
            if !listing.entries.contains_key(&name) {
                listing.order.push(name.clone());
            }
            listing.entries.insert(name, (entry.path.clone(), entry.size));
        }
        listing
    }

    pub fn get(&self, name: &str) -> Option<(&str, u64)> {
        self.entries
            .get(name)
            .map(|(path, size)| (path.as_str(), *size))
    }

    /// Iterate (basename, path, size) in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.order.iter().map(|name| {
            let (path, size) = &self.entries[name];
            (name.as_str(), path.as_str(), *size)
        })
    }
}

/// Match CSV rows against a name-keyed listing.
///
/// Returns (listing path, url) pairs in row order. Size-only mode can
/// emit several pairs per row and repeats across rows — no dedup.
pub fn match_csv_rows(
    listing: &NameKeyedListing,
    rows: &[UrlSizeRow],
    mode: MatchMode,
) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for row in rows {
        match mode {
            MatchMode::Filename => {
                let name = url_basename(&row.url);
                if let Some((path, size)) = listing.get(name) {
                    if size == row.size {
                        pairs.push((path.to_string(), row.url.clone()));
                    }
                }
            }
            MatchMode::SizeOnly => {
                for (_, path, size) in listing.iter() {
                    if size == row.size {
                        pairs.push((path.to_string(), row.url.clone()));
                    }
                }
            }
        }
    }
    pairs
}

/// Final path segment of a URL.
fn url_basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn listing(lines: &[&str]) -> Vec<ListedFile> {
        parse_file_list(Cursor::new(lines.join("\n"))).unwrap()
    }

    #[test]
    fn test_parse_file_list() {
        let entries = listing(&["/a/foo.mp4 (100)", "/b/bar.mp4 (200)"]);
        assert_eq!(
            entries,
            vec![
                ListedFile { path: "/a/foo.mp4".to_string(), size: 100 },
                ListedFile { path: "/b/bar.mp4".to_string(), size: 200 },
            ]
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let entries = listing(&[
            "/a/foo.mp4 (100)",
            "not a listing line",
            "/b/missing-size.mp4",
            "/c/bad-size.mp4 (12a)",
            "",
            "/d/ok.mp4 (7)",
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].path, "/d/ok.mp4");
    }

    #[test]
    fn test_basename() {
        let entry = ListedFile { path: "/a/b/foo.mp4".to_string(), size: 1 };
        assert_eq!(entry.basename(), "foo.mp4");
    }

    #[test]
    fn test_match_listings_round_trip() {
        let first = KeyedListing::from_entries(&listing(&[
            "/a/foo.mp4 (100)",
            "/b/bar.mp4 (200)",
        ]));
        let second = KeyedListing::from_entries(&listing(&["/c/foo.mp4 (100)"]));

        let outcome = match_listings(&first, &second);
        assert_eq!(
            outcome.matched,
            vec![("/a/foo.mp4".to_string(), "/c/foo.mp4".to_string())]
        );
        assert_eq!(outcome.unmatched, vec![("/b/bar.mp4".to_string(), 200)]);
    }

    #[test]
    fn test_same_name_different_size_is_unmatched() {
        let first = KeyedListing::from_entries(&listing(&["/a/foo.mp4 (100)"]));
        let second = KeyedListing::from_entries(&listing(&["/c/foo.mp4 (101)"]));

        let outcome = match_listings(&first, &second);
        assert!(outcome.matched.is_empty());
        assert_eq!(outcome.unmatched, vec![("/a/foo.mp4".to_string(), 100)]);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let first = KeyedListing::from_entries(&listing(&[
            "/a/foo.mp4 (100)",
            "/z/foo.mp4 (100)",
        ]));
        assert_eq!(first.len(), 1);
        assert_eq!(first.get("foo.mp4", 100), Some("/z/foo.mp4"));
    }

    #[test]
    fn test_read_url_size_csv() {
        let rows = read_url_size_csv(Cursor::new("http://x/a.avi,500\nhttp://x/b.avi,600\n"))
            .unwrap();
        assert_eq!(
            rows,
            vec![
                UrlSizeRow { url: "http://x/a.avi".to_string(), size: 500 },
                UrlSizeRow { url: "http://x/b.avi".to_string(), size: 600 },
            ]
        );
    }

    #[test]
    fn test_read_url_size_csv_bad_size() {
        let result = read_url_size_csv(Cursor::new("http://x/a.avi,lots\n"));
        assert!(matches!(result, Err(ListError::InvalidSize { .. })));
    }

    #[test]
    fn test_csv_match_by_filename() {
        let keyed = NameKeyedListing::from_entries(&listing(&["/x/video.avi (500)"]));
        let rows = vec![UrlSizeRow { url: "http://x/video.avi".to_string(), size: 500 }];

        let pairs = match_csv_rows(&keyed, &rows, MatchMode::Filename);
        assert_eq!(
            pairs,
            vec![("/x/video.avi".to_string(), "http://x/video.avi".to_string())]
        );
    }

    #[test]
    fn test_csv_match_by_filename_size_mismatch() {
        let keyed = NameKeyedListing::from_entries(&listing(&["/x/video.avi (500)"]));
        let rows = vec![UrlSizeRow { url: "http://x/video.avi".to_string(), size: 501 }];

        assert!(match_csv_rows(&keyed, &rows, MatchMode::Filename).is_empty());
    }

    #[test]
    fn test_csv_match_by_size_emits_every_match() {
        let keyed = NameKeyedListing::from_entries(&listing(&[
            "/x/one.avi (500)",
            "/y/two.avi (500)",
            "/z/other.avi (999)",
        ]));
        let rows = vec![
            UrlSizeRow { url: "http://x/a.avi".to_string(), size: 500 },
            UrlSizeRow { url: "http://x/b.avi".to_string(), size: 500 },
        ];

        let pairs = match_csv_rows(&keyed, &rows, MatchMode::SizeOnly);
        // Two listing entries match each row; repeats across rows are kept.
        assert_eq!(
            pairs,
            vec![
                ("/x/one.avi".to_string(), "http://x/a.avi".to_string()),
                ("/y/two.avi".to_string(), "http://x/a.avi".to_string()),
                ("/x/one.avi".to_string(), "http://x/b.avi".to_string()),
                ("/y/two.avi".to_string(), "http://x/b.avi".to_string()),
            ]
        );
    }
}
