extern crate log;

use std::io::BufRead;

use regex::Regex;

use crate::error::ArchiveError::{DecodeError, IoError};
use crate::error::Result;
use crate::message::headers::{HeaderKind, MessageHeaders};

/// Scans the header block of a single message and returns the
/// recognized headers.
///
/// The scan runs line by line and ends at the first blank line, the
/// separator between header block and body. Body lines are never read
/// past that point. Header names match case-insensitively, folded
/// continuation lines are glued onto the header right above them, and
/// everything else is dropped.
pub fn parse_message<R: BufRead>(message: R) -> Result<MessageHeaders> {
    let patterns = header_patterns();
    let continuation_pattern = Regex::new(r"^\s+(.*)$").unwrap();

    let mut headers = MessageHeaders::new();
    let mut last_header: Option<HeaderKind> = None;

    for line in message.lines() {
        let line = decoded(line)?;
        //The blank-line check has to come first, an empty line must
        //never be treated as a continuation candidate
        if line.is_empty() {
            break;
        }
        if let Some((kind, value)) = match_header(&patterns, &line) {
            debug!("Matched header \"{}\"", kind.name());
            headers.set(kind, value);
            last_header = Some(kind);
        } else if let Some((kind, fragment)) = match_continuation(&continuation_pattern, last_header, &line) {
            debug!("Appending folded line to header \"{}\"", kind.name());
            headers.append(kind, &fragment);
        } else {
            //Unrecognized line. Dropped, and it also breaks adjacency:
            //a later folded line must not attach to a stale header
            last_header = None;
        }
    }

    Ok(headers)
}

/// The matcher table, one anchored pattern per recognized header, in
/// fixed order. Header patterns are always tried before the
/// continuation pattern.
fn header_patterns() -> Vec<(HeaderKind, Regex)> {
    vec![
        (HeaderKind::Date, Regex::new(r"(?i)^date:\s*(.*)$").unwrap()),
        (HeaderKind::From, Regex::new(r"(?i)^from:\s*(.*)$").unwrap()),
        (HeaderKind::Subject, Regex::new(r"(?i)^subject:\s*(.*)$").unwrap())
    ]
}

/// Tries every recognized-header pattern against the line. The capture
/// excludes the header name, its colon and the whitespace after the
/// colon, nothing else is trimmed off the value.
fn match_header(patterns: &[(HeaderKind, Regex)], line: &str) -> Option<(HeaderKind, String)> {
    patterns.iter().find_map(|(kind, pattern)|
        pattern.captures(line)
            .and_then(|captured| captured.get(1))
            .and_then(|value| Option::from((*kind, value.as_str().to_string())))
    )
}

/// A continuation line only counts while a recognized header is the
/// directly preceding match. The capture drops the leading fold
/// whitespace and keeps the rest of the line verbatim.
fn match_continuation(pattern: &Regex, last_header: Option<HeaderKind>, line: &str) -> Option<(HeaderKind, String)> {
    let kind = last_header?;
    pattern.captures(line)
        .and_then(|captured| captured.get(1))
        .and_then(|fragment| Option::from((kind, fragment.as_str().to_string())))
}

/// Message text has exactly one valid encoding, UTF-8. A line that
/// does not decode kills the whole run, there is no fallback encoding.
fn decoded(line: std::io::Result<String>) -> Result<String> {
    line.map_err(|error| match error.kind() {
        std::io::ErrorKind::InvalidData => DecodeError(error.to_string()),
        _ => IoError(error.to_string())
    })
}
