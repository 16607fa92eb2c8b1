//! Blocking client for the archive.org search and metadata APIs.
//!
//! Used by the collection lister to enumerate every item in a named
//! collection and resolve each one to a direct download URL. All
//! requests are issued sequentially; there is no retry logic.

pub mod client;
pub mod collection;
pub mod error;
pub mod types;

pub use client::{ArchiveClient, SearchBackend, SearchPage, download_url};
pub use collection::{CollectionFile, UNKNOWN_SIZE, fetch_collection, resolve_item};
pub use error::ArchiveError;
pub use types::{ItemFile, SizeField};
