extern crate log;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tar::{Archive, EntryType};

use crate::error::ArchiveError::InvalidArchive;
use crate::error::Result;
use crate::message::headers::{MessageHeaders, MessageReport};
use crate::message::parser;

/// Walks the archive at the given path and extracts the recognized
/// headers of every message in it.
///
/// The path has to point to a plain file holding a tar container.
/// Anything else dies with an invalid archive error before a single
/// entry is touched.
pub fn parse_archive(path: &Path) -> Result<MessageReport> {
    if !path.is_file() {
        return Err(InvalidArchive(format!("{} is not a valid file path.", path.display())));
    }

    info!("Scanning archive {}", path.display());
    let file = File::open(path)?;
    parse_entries(BufReader::new(file))
}

/// Walks every entry of a tar container in enumeration order and
/// scans each regular file as one message. Directory entries and
/// other non-file entries are traversed but produce no record.
///
/// The first undecodable or unreadable entry ends the whole run,
/// there is no partial result set.
pub fn parse_entries<R: Read>(container: R) -> Result<MessageReport> {
    let mut archive = Archive::new(container);
    let entries = archive.entries()
        .map_err(|error| InvalidArchive(format!("Not a readable tar container: {}", error)))?;

    let mut messages: Vec<MessageHeaders> = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|error| InvalidArchive(format!("Not a readable tar container: {}", error)))?;
        if entry.header().entry_type() != EntryType::Regular {
            debug!("Skipping non-file entry {}", String::from_utf8_lossy(&entry.path_bytes()));
            continue;
        }
        debug!("Scanning message entry {}", String::from_utf8_lossy(&entry.path_bytes()));
        messages.push(parser::parse_message(BufReader::new(entry))?);
    }

    info!("Extracted headers from {} message(s)", messages.len());
    Ok(MessageReport::new(messages))
}
