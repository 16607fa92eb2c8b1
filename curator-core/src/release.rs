use std::fmt;

/// Verification status labels for a release.
///
/// The closed set drives report coloring; any other label found in the
/// store is carried through verbatim via `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    Missing,
    NoTorrent,
    Incomplete,
    Other(String),
}

impl VerificationOutcome {
    /// Parse a stored label. Unrecognized labels are preserved as-is.
    pub fn from_label(label: &str) -> Self {
        match label {
            "VERIFIED" => Self::Verified,
            "MISSING" => Self::Missing,
            "NO TORRENT" => Self::NoTorrent,
            "INCOMPLETE" => Self::Incomplete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VerificationOutcome::Verified => write!(f, "VERIFIED"),
            VerificationOutcome::Missing => write!(f, "MISSING"),
            VerificationOutcome::NoTorrent => write!(f, "NO TORRENT"),
            VerificationOutcome::Incomplete => write!(f, "INCOMPLETE"),
            VerificationOutcome::Other(label) => write!(f, "{label}"),
        }
    }
}

/// One curated unit of archived content.
///
/// Flat and immutable after construction; `id` is the foreign key for
/// incomplete-file lookups.
#[derive(Debug, Clone)]
pub struct Release {
    pub id: String,
    pub date: String,
    pub name: String,
    pub directory: Option<String>,
    pub file_count: Option<u64>,
    pub notes: Option<String>,
    pub size: Option<u64>,
    pub torrent_url: Option<String>,
    pub download_url: Option<String>,
    pub verification_outcome: Option<VerificationOutcome>,
}

/// Status of a single defective file within a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Corrupted,
    Missing,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Corrupted => "CORRUPTED",
            FileStatus::Missing => "MISSING",
        }
    }

    /// Parse a stored status label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "CORRUPTED" => Some(Self::Corrupted),
            "MISSING" => Some(Self::Missing),
            _ => None,
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A corrupted or missing file recorded against a release.
#[derive(Debug, Clone)]
pub struct IncompleteFile {
    pub release_name: String,
    pub file_path: String,
    pub size: Option<u64>,
    pub status: FileStatus,
}

/// Aggregated defect counts and sizes for one INCOMPLETE release.
///
/// Sums over an empty status group normalize to zero.
#[derive(Debug, Clone)]
pub struct IncompleteReleaseSummary {
    pub name: String,
    pub file_count: Option<u64>,
    pub corrupt_file_count: u64,
    pub missing_file_count: u64,
    pub size: Option<u64>,
    pub corrupt_size: u64,
    pub missing_size: u64,
    pub notes: Option<String>,
}

/// A directory path paired with a base URL, for the release 14
/// cross-reference sheet.
#[derive(Debug, Clone)]
pub struct ReleaseLink {
    pub path: String,
    pub url: String,
}
