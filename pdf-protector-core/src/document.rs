//! Exclusively owned handle on a loaded PDF document
//!
//! A [`LoadedDocument`] owns the whole object graph of one PDF. It is never
//! shared; dropping it releases everything the PDF engine holds, so a handle
//! created inside an operation is released on every return path.

use crate::encryption::{EncryptionDetails, ProtectionPolicy};
use crate::error::{ProtectorError, Result};
use lopdf::{Document, Object, StringFormat};
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Length of a generated file identifier in bytes
const FILE_ID_LEN: usize = 16;

/// A PDF document opened from disk or memory
#[derive(Debug)]
pub struct LoadedDocument {
    inner: Document,
}

impl LoadedDocument {
    /// Open the document at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading document");

        let inner = Document::load(path).map_err(|source| ProtectorError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { inner })
    }

    /// Parse a document held in memory
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        debug!(len = data.len(), "loading document from memory");

        let inner = Document::load_mem(data).map_err(ProtectorError::Parse)?;
        Ok(Self { inner })
    }

    /// Whether the document carries encryption.
    ///
    /// True while the trailer still has an `/Encrypt` entry, and also when
    /// the engine already unlocked the file with the empty user password.
    pub fn is_encrypted(&self) -> bool {
        self.inner.is_encrypted() || self.inner.encryption_state.is_some()
    }

    /// Encryption dictionary entries, if the trailer still carries them
    pub fn encryption_details(&self) -> Result<Option<EncryptionDetails>> {
        EncryptionDetails::from_document(&self.inner)
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Apply password protection to the document in place
    pub fn protect(&mut self, policy: &ProtectionPolicy) -> Result<()> {
        if self.is_encrypted() {
            return Err(ProtectorError::AlreadyEncrypted);
        }

        self.ensure_file_id();

        let state = policy.encryption_state(&self.inner)?;
        self.inner
            .encrypt(&state)
            .map_err(|e| ProtectorError::Encryption(e.to_string()))?;

        debug!(
            cipher = ?policy.cipher(),
            key_length = policy.key_length(),
            permissions = policy.permissions().bits(),
            "document encrypted"
        );
        Ok(())
    }

    /// Serialize the document into a byte buffer
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.inner.save_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Serialize the document to `path`.
    ///
    /// The whole file is rendered in memory first, so `path` may be the file
    /// the document was loaded from.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        fs::write(path, &bytes).map_err(|source| ProtectorError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "document saved");
        Ok(())
    }

    /// Key derivation mixes in the first file identifier; documents written
    /// without one get a random identifier.
    fn ensure_file_id(&mut self) {
        if self.inner.trailer.get(b"ID").is_ok() {
            return;
        }

        let id: [u8; FILE_ID_LEN] = rand::thread_rng().gen();
        self.inner.trailer.set(
            "ID",
            Object::Array(vec![
                Object::String(id.to_vec(), StringFormat::Hexadecimal),
                Object::String(id.to_vec(), StringFormat::Hexadecimal),
            ]),
        );
        debug!("generated file identifier");
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &Document {
        &self.inner
    }
}

impl From<Document> for LoadedDocument {
    fn from(inner: Document) -> Self {
        Self { inner }
    }
}
