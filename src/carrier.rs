//! Carriers: where encoded layouts live outside the process.
//!
//! The engine talks to two slots through traits so any host can back them:
//! a persistence slot ([`LayoutStore`], e.g. browser local storage) and the
//! share-link fragment ([`FragmentCarrier`], e.g. the document location hash).
//! In-memory and file-backed implementations are provided for hosts without
//! a browser and for tests.

#[cfg(test)]
#[path = "carrier_test.rs"]
mod carrier_test;

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::PersistenceError;

/// A single named slot holding the encoded layout text.
pub trait LayoutStore {
    /// Read the slot. `None` when it is empty or unreadable.
    fn load(&self) -> Option<String>;

    /// Overwrite the slot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the backing store refuses the write.
    fn save(&mut self, text: &str) -> Result<(), PersistenceError>;
}

/// The share-link fragment of the current document location.
pub trait FragmentCarrier {
    /// Current fragment without the leading `#`, if any.
    fn read_fragment(&self) -> Option<String>;

    /// Replace the fragment. An empty string clears it.
    fn write_fragment(&mut self, fragment: &str);
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Keyed in-memory storage, one slot per key.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    key: String,
    slots: HashMap<String, String>,
    reject: Option<String>,
}

impl MemoryStore {
    /// Empty storage whose slot is named `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    /// Storage pre-filled with `text` in slot `key`.
    #[must_use]
    pub fn with_text(key: impl Into<String>, text: impl Into<String>) -> Self {
        let mut store = Self::new(key);
        store.slots.insert(store.key.clone(), text.into());
        store
    }

    /// Storage that refuses every write with `reason`, as a full quota would.
    #[must_use]
    pub fn rejecting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { reject: Some(reason.into()), ..Self::new(key) }
    }

    /// Raw content of any slot.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl LayoutStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slots.get(&self.key).cloned()
    }

    fn save(&mut self, text: &str) -> Result<(), PersistenceError> {
        if let Some(reason) = &self.reject {
            return Err(PersistenceError::Rejected(reason.clone()));
        }
        self.slots.insert(self.key.clone(), text.to_string());
        Ok(())
    }
}

/// In-memory document fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFragment {
    fragment: String,
}

impl MemoryFragment {
    /// Start from `fragment`; a leading `#` is dropped.
    #[must_use]
    pub fn new(fragment: &str) -> Self {
        Self { fragment: fragment.strip_prefix('#').unwrap_or(fragment).to_string() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.fragment
    }
}

impl FragmentCarrier for MemoryFragment {
    fn read_fragment(&self) -> Option<String> {
        if self.fragment.is_empty() {
            None
        } else {
            Some(self.fragment.clone())
        }
    }

    fn write_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.strip_prefix('#').unwrap_or(fragment).to_string();
    }
}

// =============================================================================
// FILE
// =============================================================================

/// A slot stored as a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot `key` stored as `<dir>/<key>.json`.
    #[must_use]
    pub fn in_dir(dir: &Path, key: &str) -> Self {
        Self::new(dir.join(format!("{key}.json")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutStore for FileStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "layout file unreadable; treating as empty");
                None
            }
        }
    }

    fn save(&mut self, text: &str) -> Result<(), PersistenceError> {
        // Write-then-rename: the slot holds either the old or the new text.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
