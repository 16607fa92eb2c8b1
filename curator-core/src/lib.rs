//! Core record types and pure curation logic.
//!
//! Everything in this crate is I/O-free: the flat release records, the
//! verification outcome labels, human-readable size formatting, the
//! file-list matchers, and the file-type category rules. The db, report,
//! and batch-engine crates all build on these types.

pub mod category;
pub mod filelist;
pub mod release;
pub mod util;

pub use category::{Category, classify};
pub use filelist::{
    KeyedListing, ListError, ListedFile, MatchMode, MatchOutcome, NameKeyedListing, UrlSizeRow,
    match_csv_rows, match_listings, parse_file_list, read_url_size_csv,
};
pub use release::{
    FileStatus, IncompleteFile, IncompleteReleaseSummary, Release, ReleaseLink,
    VerificationOutcome,
};
pub use util::format_size;
