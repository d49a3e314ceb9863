//! The settings transaction manager.
//!
//! All reads and writes of the settings document go through
//! [`SettingsStore`]. Mutations follow a fixed sequence: validate the input,
//! load the current document, check domain invariants, copy the canonical
//! file to a timestamped backup, apply the change in memory, and atomically
//! replace the canonical file. Every rejection happens before the backup
//! step, so a failed mutation leaves the disk exactly as it was.
//!
//! There is no cross-process locking: two concurrent writers race between
//! load and persist, and the last rename wins. Readers are always safe,
//! since the write-to-temp-then-rename sequence never exposes a
//! half-written file under the canonical name.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::SettingsError;
use crate::models::{AddedTerm, RemovedTerm, SettingsDocument, TermList, UpdatedTerm};
use crate::validate::validate_term;

/// Mediates all access to the settings document on disk.
pub struct SettingsStore {
    path: PathBuf,
    backup_dir: PathBuf,
}

impl SettingsStore {
    /// Creates a store over the given canonical file and backup directory.
    /// Neither path is touched until an operation runs.
    pub fn new(path: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_dir: backup_dir.into(),
        }
    }

    /// The canonical settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the settings document.
    pub fn load(&self) -> Result<SettingsDocument, SettingsError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            SettingsError::io(
                format!("Failed to read settings file {}", self.path.display()),
                e,
            )
        })?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Copies the canonical file into the backup directory, creating the
    /// directory on first use. Returns the backup filename.
    ///
    /// Callers must treat a backup failure as fatal to the enclosing
    /// mutation: no write may happen after a failed backup.
    pub fn backup(&self) -> Result<String, SettingsError> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            SettingsError::io(
                format!(
                    "Failed to create backup directory {}",
                    self.backup_dir.display()
                ),
                e,
            )
        })?;

        let name = format!(
            "settings_backup_{}.json",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        let dest = self.backup_dir.join(&name);
        fs::copy(&self.path, &dest).map_err(|e| {
            SettingsError::io(format!("Failed to back up settings to {}", dest.display()), e)
        })?;

        Ok(name)
    }

    /// Serializes the document to a temporary file next to the canonical
    /// file, then renames it into place. The rename is the only transition
    /// the canonical file ever sees; on any earlier failure the old content
    /// stays intact and the temporary file is removed on drop.
    pub fn persist(&self, doc: &SettingsDocument) -> Result<(), SettingsError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| {
            SettingsError::io(
                format!("Failed to create temporary file in {}", parent.display()),
                e,
            )
        })?;

        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| SettingsError::io("Failed to serialize settings document", e.into()))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.write_all(b"\n"))
            .map_err(|e| SettingsError::io("Failed to write settings document", e))?;

        tmp.persist(&self.path).map_err(|e| {
            SettingsError::io(
                format!("Failed to replace settings file {}", self.path.display()),
                e.error,
            )
        })?;

        Ok(())
    }

    /// Appends a validated term. Fails without touching disk if the term is
    /// invalid or already present.
    pub fn add(&self, term: &str) -> Result<AddedTerm, SettingsError> {
        validate_term(term).map_err(SettingsError::InvalidTerm)?;

        let mut doc = self.load()?;
        if doc.search_terms.iter().any(|t| t == term) {
            return Err(SettingsError::DuplicateTerm(term.to_string()));
        }

        let backup = self.backup()?;
        doc.search_terms.push(term.to_string());
        self.persist(&doc)?;

        info!(term = %term, backup = %backup, "added search term");
        Ok(AddedTerm {
            term: term.to_string(),
            backup,
        })
    }

    /// Replaces the term at `index`. The duplicate check excludes the
    /// element being replaced, so re-submitting the current value succeeds.
    pub fn update(&self, index: usize, term: &str) -> Result<UpdatedTerm, SettingsError> {
        validate_term(term).map_err(SettingsError::InvalidTerm)?;

        let mut doc = self.load()?;
        let len = doc.search_terms.len();
        if index >= len {
            return Err(SettingsError::BadIndex { index, len });
        }
        if doc
            .search_terms
            .iter()
            .enumerate()
            .any(|(i, t)| i != index && t == term)
        {
            return Err(SettingsError::DuplicateTerm(term.to_string()));
        }

        let backup = self.backup()?;
        let old_term = std::mem::replace(&mut doc.search_terms[index], term.to_string());
        self.persist(&doc)?;

        info!(index, old = %old_term, new = %term, backup = %backup, "updated search term");
        Ok(UpdatedTerm {
            old_term,
            new_term: term.to_string(),
            backup,
        })
    }

    /// Removes the term at `index`, shifting later terms left.
    pub fn remove(&self, index: usize) -> Result<RemovedTerm, SettingsError> {
        let mut doc = self.load()?;
        let len = doc.search_terms.len();
        if index >= len {
            return Err(SettingsError::BadIndex { index, len });
        }

        let backup = self.backup()?;
        let term = doc.search_terms.remove(index);
        self.persist(&doc)?;

        info!(index, term = %term, backup = %backup, "removed search term");
        Ok(RemovedTerm { term, backup })
    }

    /// Read-only view of the current terms. Takes no backup and never
    /// rewrites the file.
    pub fn list(&self) -> Result<TermList, SettingsError> {
        let doc = self.load()?;
        Ok(TermList {
            base_url: doc.effective_base_url().to_string(),
            count: doc.search_terms.len(),
            search_terms: doc.search_terms,
        })
    }
}
