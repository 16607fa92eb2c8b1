use std::path::{Path, PathBuf};

use curator_db::{
    incomplete_release_summaries, list_incomplete_files, list_release_14_links, list_releases,
    open_database,
};
use curator_report::{ReportData, write_report};

use crate::error::CliError;

pub(crate) fn run_report(db_path: Option<PathBuf>, output: &Path) -> Result<(), CliError> {
    let db_path = resolve_db_path(db_path)?;
    let conn = open_database(&db_path)?;

    log::info!("Reading release data from {}", db_path.display());
    let data = ReportData {
        releases: list_releases(&conn)?,
        incomplete_releases: incomplete_release_summaries(&conn)?,
        incomplete_files: list_incomplete_files(&conn)?,
        release_14_links: list_release_14_links(&conn)?,
    };

    log::info!("Writing {}", output.display());
    write_report(&data, output)?;
    Ok(())
}

/// CLI override, then the user data dir default.
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> Result<PathBuf, CliError> {
    cli_override
        .or_else(curator_db::default_db_path)
        .ok_or_else(|| {
            CliError::config("could not determine the user data directory; pass --db-path")
        })
}
