use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use curator_archive::{ArchiveClient, fetch_collection, resolve_item};

use crate::error::CliError;

pub(crate) fn run_list_collection(
    collection: &str,
    page_size: u32,
    max_pages: Option<u32>,
    output: &Path,
) -> Result<(), CliError> {
    let client = ArchiveClient::new()?;
    let identifiers = fetch_collection(&client, collection, page_size, max_pages)?;
    let count = identifiers.len();
    log::info!("Found {count} items in {collection}");

    let mut writer = BufWriter::new(File::create(output)?);
    for (i, identifier) in identifiers.iter().enumerate() {
        log::info!("Processing file {} of {count}", i + 1);
        let file = resolve_item(&client, identifier)?;
        writeln!(writer, "{},{}", file.url, file.size)?;
    }
    writer.flush()?;

    log::info!("Wrote {count} lines to {}", output.display());
    Ok(())
}
