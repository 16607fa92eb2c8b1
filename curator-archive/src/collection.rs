//! Collection enumeration: paginated search plus per-item file
//! resolution.

use crate::client::{ArchiveClient, SearchBackend, download_url};
use crate::error::ArchiveError;

/// Sentinel written when an item's metadata doesn't report a size.
pub const UNKNOWN_SIZE: &str = "Unknown size";

/// A resolved collection item: direct download URL and reported size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFile {
    pub url: String,
    pub size: String,
}

/// Enumerate all item identifiers in a collection, in discovery order.
///
/// Pages are fetched sequentially until a page comes back empty, the
/// cumulative count reaches the server-reported total, or the optional
/// page cap is exceeded — whichever happens first. A malformed listing
/// response ends pagination early, keeping the identifiers already
/// fetched; any other error propagates.
pub fn fetch_collection(
    backend: &impl SearchBackend,
    collection: &str,
    page_size: u32,
    max_pages: Option<u32>,
) -> Result<Vec<String>, ArchiveError> {
    let mut identifiers = Vec::new();
    let mut page = 1u32;
    loop {
        let result = match backend.search_page(collection, page_size, page) {
            Ok(result) => result,
            Err(ArchiveError::Listing(e)) => {
                log::warn!("Error decoding listing page {page}: {e}");
                break;
            }
            Err(e) => return Err(e),
        };
        let fetched = result.identifiers.len();
        identifiers.extend(result.identifiers);
        log::info!("Fetched page {page} for {collection}");
        page += 1;
        if fetched == 0
            || identifiers.len() as u64 >= result.num_found
            || max_pages.is_some_and(|cap| page > cap)
        {
            break;
        }
    }
    Ok(identifiers)
}

/// Resolve the first listed file of an item to a download URL and size.
pub fn resolve_item(
    client: &ArchiveClient,
    identifier: &str,
) -> Result<CollectionFile, ArchiveError> {
    let files = client.item_files(identifier)?;
    let first = files
        .first()
        .ok_or_else(|| ArchiveError::NoFiles(identifier.to_string()))?;
    let size = first
        .size
        .as_ref()
        .map_or_else(|| UNKNOWN_SIZE.to_string(), |s| s.to_string());
    Ok(CollectionFile {
        url: download_url(identifier, &first.name),
        size,
    })
}
