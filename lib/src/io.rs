extern crate log;

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::message::headers::MessageReport;

/// Persists a report as a JSON document with the single top-level key
/// `messages`, overwriting whatever sits at the path.
pub fn save_report(report: &MessageReport, path: &Path) -> Result<()> {
    info!("Saving report with {} record(s) to {}", report.messages.len(), path.display());
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

/// Loads a previously persisted report back into memory.
pub fn load_report(path: &Path) -> Result<MessageReport> {
    info!("Loading report from {}", path.display());
    let file = File::open(path)?;
    let report = serde_json::from_reader(file)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::error::ArchiveError;
    use crate::io::{load_report, save_report};

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    /// Saving and loading a report has to hand back the same records,
    /// with the same keys, in the same order
    #[test]
    fn saved_report_loads_back_identically() {
        let report = report![
            headers![
                Date => "Fri, 01 Apr 2011 05:52:55 PDT",
                From => "first@example.com",
                Subject => "First"
            ],
            headers![Subject => "Only a subject"],
            headers![]
        ];
        let path = scratch_file("header-scan-round-trip.json");

        save_report(&report, &path).unwrap();
        let loaded = load_report(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, report);
    }

    #[test]
    fn document_has_a_single_top_level_key() {
        let report = report![headers![Date => "X"]];
        let path = scratch_file("header-scan-top-level-key.json");

        save_report(&report, &path).unwrap();
        let document = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let value: serde_json::Value = serde_json::from_str(&document).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["messages"]);
    }

    /// A header that never matched stays off the document entirely
    /// instead of showing up as null
    #[test]
    fn absent_headers_are_not_written() {
        let report = report![headers![Date => "X"]];
        let path = scratch_file("header-scan-absent-keys.json");

        save_report(&report, &path).unwrap();
        let document = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(document.contains("date"));
        assert!(!document.contains("from"));
        assert!(!document.contains("subject"));
        assert!(!document.contains("null"));
    }

    #[test]
    fn loading_a_missing_document_fails() {
        match load_report(Path::new("/no/such/report.json")) {
            Err(ArchiveError::IoError(_)) => {},
            other => panic!("Expected an io error, got {:?}", other)
        }
    }
}
