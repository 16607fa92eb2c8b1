use std::path::PathBuf;

use curator_core::format_size;
use curator_db::{list_releases, open_database};
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::commands::report::resolve_db_path;
use crate::error::CliError;

pub(crate) fn run_ls(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let db_path = resolve_db_path(db_path)?;
    let conn = open_database(&db_path)?;

    for release in list_releases(&conn)? {
        let files = release
            .file_count
            .map_or_else(|| "None".to_string(), |n| n.to_string());
        println!(
            "{}: {} ({} files, {})",
            release.date,
            release
                .name
                .if_supports_color(Stdout, |name| name.bold()),
            files,
            format_size(release.size),
        );
    }
    Ok(())
}
