//! Error taxonomy for settings transactions.
//!
//! Every store operation returns a [`SettingsError`] precise enough for the
//! HTTP layer to map deterministically onto a status code: problems with the
//! request itself (bad term, duplicate, out-of-range index) are client
//! errors, file system and JSON corruption problems are server errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The submitted term failed the validity predicate.
    #[error("Invalid search term: {0}")]
    InvalidTerm(String),

    /// The submitted term already exists in the document.
    #[error("Search term already exists: {0}")]
    DuplicateTerm(String),

    /// The index is outside the current term list.
    #[error("Invalid index: {index} (have {len} search terms)")]
    BadIndex { index: usize, len: usize },

    /// File system failure while reading, backing up, or writing.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The canonical file does not contain a valid JSON settings object.
    #[error("Failed to parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SettingsError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// True when the request caused the failure (HTTP 400); false when the
    /// service's own state did (HTTP 500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTerm(_) | Self::DuplicateTerm(_) | Self::BadIndex { .. }
        )
    }
}
