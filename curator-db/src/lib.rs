//! SQLite persistence layer for the release store.
//!
//! Provides schema creation, insert operations, and the read queries
//! the report generator runs, backed by SQLite (via rusqlite with the
//! bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, insert_incomplete_file, insert_release, insert_release_14_link,
};
pub use queries::{
    incomplete_release_summaries, list_incomplete_files, list_release_14_links, list_releases,
};
pub use schema::{SchemaError, default_db_path, open_database, open_memory};
