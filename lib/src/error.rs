pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can end an archive run. Every variant is fatal: the
/// walker never hands out a partial result set.
#[derive(Debug,PartialEq)]
pub enum ArchiveError {
    /// The supplied path is not a file, or its content is not a
    /// readable tar container.
    InvalidArchive(String),
    /// A header line could not be decoded with the fixed text encoding
    /// (UTF-8).
    DecodeError(String),
    /// Reading the archive or writing the result document failed.
    IoError(String)
}

impl ArchiveError {
    /// The message shown to the user when the run dies with this error.
    pub fn human_readable_error_message(&self) -> String {
        match self {
            ArchiveError::InvalidArchive(reason) => reason.clone(),
            ArchiveError::DecodeError(reason) => format!("Could not decode message text: {}", reason),
            ArchiveError::IoError(reason) => format!("File operation failed: {}", reason)
        }
    }

    /// Process exit code for this error. Code 2 is taken by clap for
    /// usage errors.
    pub fn error_code(&self) -> i32 {
        match self {
            ArchiveError::InvalidArchive(_) => 1,
            ArchiveError::DecodeError(_) => 3,
            ArchiveError::IoError(_) => 4
        }
    }
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<std::io::Error> for ArchiveError {
    fn from(error: std::io::Error) -> Self {
        ArchiveError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for ArchiveError {
    fn from(error: serde_json::Error) -> Self {
        ArchiveError::IoError(error.to_string())
    }
}
