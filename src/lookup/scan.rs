use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::models::{IndexRecord, SelectionKey};

/// Scan index lines in order and return the payload of the first record matching `key`
///
/// Records end at `\n`, `\r\n` or a lone `\r`. Lines without a tab are skipped. Scanning
/// stops at the first match, so later duplicates are never read. A read error (including
/// non-UTF-8 content) ends the scan.
pub fn find_payload<R: BufRead>(reader: R, key: &SelectionKey) -> io::Result<Option<String>> {
    for line in reader.lines() {
        let line = line?;

        for record_line in line.split('\r') {
            if let Some(record) = IndexRecord::from_line(record_line)
                && record.matches(key.as_str())
            {
                return Ok(Some(record.payload.to_string()));
            }
        }
    }

    Ok(None)
}

/// Open `path` and run [`find_payload`] over it
///
/// The file handle is dropped on every return path.
pub fn find_payload_in_file(path: &Path, key: &SelectionKey) -> io::Result<Option<String>> {
    let file = File::open(path)?;
    find_payload(BufReader::new(file), key)
}
