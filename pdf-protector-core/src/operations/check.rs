//! Detection of password protection

use crate::document::LoadedDocument;
use crate::error::Result;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Outcome of a protection check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtectionStatus {
    /// The document carries encryption
    Protected,
    /// The document opened and carries no encryption
    NotProtected,
    /// The document could not be opened; the reason is kept for the caller
    Indeterminate(String),
}

impl ProtectionStatus {
    /// Collapse to a boolean; an indeterminate status counts as not protected
    pub fn is_protected(&self) -> bool {
        matches!(self, ProtectionStatus::Protected)
    }

    fn from_load(result: Result<LoadedDocument>) -> Self {
        match result {
            Ok(document) if document.is_encrypted() => ProtectionStatus::Protected,
            Ok(_) => ProtectionStatus::NotProtected,
            Err(e) => {
                debug!(error = %e, "protection status indeterminate");
                ProtectionStatus::Indeterminate(e.to_string())
            }
        }
    }
}

impl fmt::Display for ProtectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtectionStatus::Protected => write!(f, "PROTECTED"),
            ProtectionStatus::NotProtected => write!(f, "NOT_PROTECTED"),
            ProtectionStatus::Indeterminate(reason) => write!(f, "INDETERMINATE ({reason})"),
        }
    }
}

/// Check the document at `input_path`, keeping load failures distinct
pub fn check_protection<P: AsRef<Path>>(input_path: P) -> ProtectionStatus {
    ProtectionStatus::from_load(LoadedDocument::open(input_path))
}

/// Check a document held in memory
pub fn check_protection_bytes(input: &[u8]) -> ProtectionStatus {
    ProtectionStatus::from_load(LoadedDocument::from_bytes(input))
}

/// Whether the document at `input_path` is encrypted.
///
/// Any failure to open the document yields `false`.
pub fn is_protected<P: AsRef<Path>>(input_path: P) -> bool {
    check_protection(input_path).is_protected()
}
