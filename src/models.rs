//! The settings document and the receipts returned by mutating operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base URL template substituted when the document does not carry one.
/// External consumers replace `{search_term}` with each stored term.
pub const DEFAULT_BASE_URL: &str =
    "https://www.linkedin.com/jobs/search/?keywords={search_term}";

/// The persisted settings document.
///
/// Only `search_terms` is ever modified by this service. Keys beyond the two
/// named fields are captured in `extra` and written back on every persist,
/// so the document can carry settings owned by other tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub search_terms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SettingsDocument {
    /// The base URL consumers should use: the stored template, or
    /// [`DEFAULT_BASE_URL`] when the document does not set one. The default
    /// is never written back into the file.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Read-only view of the current terms returned by `list`.
#[derive(Debug, Clone, Serialize)]
pub struct TermList {
    pub search_terms: Vec<String>,
    pub base_url: String,
    pub count: usize,
}

/// Receipt for a successful append.
#[derive(Debug, Clone)]
pub struct AddedTerm {
    pub term: String,
    /// Filename of the backup taken just before the write.
    pub backup: String,
}

/// Receipt for a successful in-place replacement.
#[derive(Debug, Clone)]
pub struct UpdatedTerm {
    pub old_term: String,
    pub new_term: String,
    pub backup: String,
}

/// Receipt for a successful removal.
#[derive(Debug, Clone)]
pub struct RemovedTerm {
    pub term: String,
    pub backup: String,
}
