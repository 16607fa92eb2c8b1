//! HTTP client for the archive.org APIs.

use std::time::Duration;

use crate::error::ArchiveError;
use crate::types::{ItemFile, MetadataResponse, SearchResponse};

const SEARCH_URL: &str = "https://archive.org/advancedsearch.php";
const METADATA_URL: &str = "https://archive.org/metadata";
const DOWNLOAD_URL: &str = "https://archive.org/download";

/// One page of collection search results.
#[derive(Debug)]
pub struct SearchPage {
    pub identifiers: Vec<String>,
    /// Server-reported total across all pages.
    pub num_found: u64,
}

/// The search surface the pagination loop runs against.
///
/// Split out as a trait so pagination can be exercised without a
/// network connection.
pub trait SearchBackend {
    /// Fetch one 1-based page of identifiers for a collection.
    fn search_page(
        &self,
        collection: &str,
        page_size: u32,
        page: u32,
    ) -> Result<SearchPage, ArchiveError>;
}

/// Blocking client with a 30 second request timeout.
pub struct ArchiveClient {
    http: reqwest::blocking::Client,
}

impl ArchiveClient {
    pub fn new() -> Result<Self, ArchiveError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch the files listed in an item's metadata.
    pub fn item_files(&self, identifier: &str) -> Result<Vec<ItemFile>, ArchiveError> {
        let url = format!("{METADATA_URL}/{identifier}");
        let text = self.http.get(&url).send()?.text()?;
        let meta: MetadataResponse =
            serde_json::from_str(&text).map_err(|source| ArchiveError::Metadata {
                identifier: identifier.to_string(),
                source,
            })?;
        Ok(meta.files)
    }
}

impl SearchBackend for ArchiveClient {
    fn search_page(
        &self,
        collection: &str,
        page_size: u32,
        page: u32,
    ) -> Result<SearchPage, ArchiveError> {
        let text = self
            .http
            .get(SEARCH_URL)
            .query(&[
                ("q", format!("collection:{collection}")),
                ("fl[]", "identifier".to_string()),
                ("rows", page_size.to_string()),
                ("page", page.to_string()),
                ("output", "json".to_string()),
            ])
            .send()?
            .text()?;

        let parsed: SearchResponse =
            serde_json::from_str(&text).map_err(ArchiveError::Listing)?;
        Ok(SearchPage {
            identifiers: parsed
                .response
                .docs
                .into_iter()
                .map(|doc| doc.identifier)
                .collect(),
            num_found: parsed.response.num_found,
        })
    }
}

/// Derive the direct download URL for a file within an item.
pub fn download_url(identifier: &str, file_name: &str) -> String {
    format!("{DOWNLOAD_URL}/{identifier}/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url() {
        assert_eq!(
            download_url("item-1", "tape 04.avi"),
            "https://archive.org/download/item-1/tape 04.avi"
        );
    }
}
