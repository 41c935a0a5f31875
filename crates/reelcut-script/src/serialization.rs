//! Cut-list persistence with versioning.
//!
//! Uses JSON with a schema version field so the format stays readable if
//! optional fields are added later.

use serde::{Deserialize, Serialize};

use reelcut_core::{CutError, CutList, Result};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Versioned on-disk wrapper for a [`CutList`].
#[derive(Debug, Serialize, Deserialize)]
pub struct CutListFile {
    /// Schema version for migration.
    pub version: u32,
    /// The cut list data.
    pub cuts: CutList,
}

impl CutListFile {
    /// Wrap a cut list for persistence.
    ///
    /// An empty cut list is not a valid persisted artifact (it describes
    /// no retained material for a downstream job), so it is rejected here
    /// rather than surfacing later at load or compile time.
    pub fn new(cuts: CutList) -> Result<Self> {
        if cuts.is_empty() {
            return Err(CutError::Empty);
        }
        Ok(Self {
            version: CURRENT_VERSION,
            cuts,
        })
    }

    /// Serialize to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| CutError::Malformed(format!("failed to serialize cut list: {e}")))
    }

    /// Deserialize from JSON bytes.
    ///
    /// The stored form is largely trusted, but the cheap structural checks
    /// (schema version, section ordering, framerate sign) are repeated
    /// here so a hand-edited file fails at load time instead of producing
    /// a broken script later.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let file: Self = serde_json::from_slice(data)
            .map_err(|e| CutError::Malformed(format!("invalid cut-list JSON: {e}")))?;

        if file.version > CURRENT_VERSION {
            return Err(CutError::Malformed(format!(
                "cut-list file version {} is newer than supported version {}",
                file.version, CURRENT_VERSION
            )));
        }
        if !file.cuts.is_well_formed() {
            return Err(CutError::Malformed(
                "sections are out of order or overlapping".into(),
            ));
        }

        Ok(file)
    }

    /// Save to a file path.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let data = self.to_json()?;
        std::fs::write(path, data)?;
        tracing::debug!(path = %path.display(), sections = self.cuts.len(), "saved cut list");
        Ok(())
    }

    /// Load from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let file = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), sections = file.cuts.len(), "loaded cut list");
        Ok(file)
    }
}
