#[macro_use]
extern crate log;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
extern crate regex;
extern crate serde;
extern crate tar;

#[macro_use]
mod macros;

pub mod archive;
pub mod builder;
pub mod error;
pub mod io;
pub mod message;

use std::path::Path;

use crate::error::Result;
use crate::message::headers::MessageReport;

/// Scans the archive at the given path and persists the extracted
/// headers as a JSON document at the output path.
///
/// The returned report holds the same records the document does, so a
/// caller can render them without reading the document back.
pub fn parse_archive_to_file(archive_path: &Path, output_path: &Path) -> Result<MessageReport> {
    let report = archive::parse_archive(archive_path)?;
    io::save_report(&report, output_path)?;
    Ok(report)
}
