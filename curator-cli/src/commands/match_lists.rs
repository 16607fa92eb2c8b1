use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use curator_core::{KeyedListing, match_listings, parse_file_list};

use crate::error::CliError;

pub(crate) fn run_match_lists(file1: &Path, file2: &Path, output: &Path) -> Result<(), CliError> {
    let first = KeyedListing::from_entries(&parse_file_list(BufReader::new(File::open(file1)?))?);
    let second = KeyedListing::from_entries(&parse_file_list(BufReader::new(File::open(file2)?))?);

    let outcome = match_listings(&first, &second);

    let mut writer = BufWriter::new(File::create(output)?);
    for (path1, path2) in &outcome.matched {
        writeln!(writer, "\"{path1}\" => \"{path2}\"")?;
    }
    writer.flush()?;

    println!("{} files not found in second file:", outcome.unmatched.len());
    for (path, size) in &outcome.unmatched {
        println!("{path} ({size})");
    }
    Ok(())
}
