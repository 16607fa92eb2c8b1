use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use curator_core::{MatchMode, NameKeyedListing, match_csv_rows, parse_file_list, read_url_size_csv};

use crate::error::CliError;

pub(crate) fn run_match_csv(listing: &Path, csv: &Path, by_size: bool) -> Result<(), CliError> {
    let entries = parse_file_list(BufReader::new(File::open(listing)?))?;
    let keyed = NameKeyedListing::from_entries(&entries);
    let rows = read_url_size_csv(File::open(csv)?)?;

    let mode = if by_size {
        MatchMode::SizeOnly
    } else {
        MatchMode::Filename
    };
    for (path, url) in match_csv_rows(&keyed, &rows, mode) {
        println!("{path}, {url}");
    }
    Ok(())
}
