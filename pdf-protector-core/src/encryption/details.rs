//! Reading back the encryption dictionary of a document
//!
//! Used to inspect what a protected file actually carries: the security
//! handler, algorithm version and revision, key length and the decoded
//! permission set (ISO 32000-1 Table 20 and Table 21).

use super::permissions::AccessPolicy;
use super::policy::{Cipher, KEY_LENGTH_BITS};
use crate::error::{ProtectorError, Result};
use lopdf::{Dictionary, Document, Object};

/// Encryption information extracted from a document trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionDetails {
    /// Security handler name (`Standard` for password protection)
    pub filter: String,
    /// `/V` entry
    pub algorithm_version: i64,
    /// `/R` entry
    pub revision: i64,
    /// `/O` entry (owner password hash)
    pub owner_hash: Vec<u8>,
    /// `/U` entry (user password hash)
    pub user_hash: Vec<u8>,
    /// Key length in bits
    pub key_length: i64,
    /// `/CFM` of the stream crypt filter, when crypt filters are used
    pub crypt_method: Option<String>,
    /// Decoded `/P` entry
    pub permissions: AccessPolicy,
}

impl EncryptionDetails {
    /// Extract details from the trailer's `/Encrypt` entry.
    ///
    /// Returns `Ok(None)` when the trailer has no `/Encrypt` entry.
    pub fn from_document(document: &Document) -> Result<Option<Self>> {
        let encrypt = match document.trailer.get(b"Encrypt") {
            Ok(encrypt) => encrypt,
            Err(_) => return Ok(None),
        };

        let dict = match encrypt {
            Object::Reference(id) => document
                .get_dictionary(*id)
                .map_err(|e| invalid(format!("unresolved /Encrypt reference: {e}")))?,
            Object::Dictionary(dict) => dict,
            _ => return Err(invalid("/Encrypt is not a dictionary")),
        };

        Self::from_dictionary(dict).map(Some)
    }

    /// Parse an encryption dictionary
    pub fn from_dictionary(dict: &Dictionary) -> Result<Self> {
        let filter = dict
            .get(b"Filter")
            .and_then(Object::as_name)
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .map_err(|_| invalid("missing /Filter"))?;

        let algorithm_version = dict.get(b"V").and_then(Object::as_i64).unwrap_or(0);

        let revision = dict
            .get(b"R")
            .and_then(Object::as_i64)
            .map_err(|_| invalid("missing /R"))?;

        let owner_hash = dict
            .get(b"O")
            .and_then(Object::as_str)
            .map_err(|_| invalid("missing /O"))?
            .to_vec();

        let user_hash = dict
            .get(b"U")
            .and_then(Object::as_str)
            .map_err(|_| invalid("missing /U"))?
            .to_vec();

        let p = dict
            .get(b"P")
            .and_then(Object::as_i64)
            .map_err(|_| invalid("missing /P"))?;

        let crypt_method = stream_crypt_method(dict);

        let key_length = match dict.get(b"Length").and_then(Object::as_i64) {
            // Some writers store the length in bytes; bit lengths start at 40
            Ok(length) if length <= 32 => length * 8,
            Ok(length) => length,
            Err(_) => match (algorithm_version, crypt_method.as_deref()) {
                (4, Some("AESV2")) => 128,
                (5, _) => 256,
                _ => 40,
            },
        };

        Ok(Self {
            filter,
            algorithm_version,
            revision,
            owner_hash,
            user_hash,
            key_length,
            crypt_method,
            permissions: AccessPolicy::from_p_value(p),
        })
    }

    /// The cipher these entries describe, if it is one this crate writes
    pub fn cipher(&self) -> Option<Cipher> {
        [Cipher::Aes128, Cipher::Rc4].into_iter().find(|cipher| {
            let written = match cipher {
                Cipher::Aes128 => self.crypt_method.as_deref() == Some("AESV2"),
                Cipher::Rc4 => self.key_length == KEY_LENGTH_BITS as i64,
            };
            written
                && self.algorithm_version == cipher.algorithm_version()
                && self.revision == cipher.revision()
        })
    }
}

fn stream_crypt_method(dict: &Dictionary) -> Option<String> {
    let filter_name = dict.get(b"StmF").and_then(Object::as_name).ok()?;
    let filters = dict.get(b"CF").and_then(Object::as_dict).ok()?;
    let filter = filters.get(filter_name).and_then(Object::as_dict).ok()?;
    filter
        .get(b"CFM")
        .and_then(Object::as_name)
        .ok()
        .map(|name| String::from_utf8_lossy(name).into_owned())
}

fn invalid(message: impl Into<String>) -> ProtectorError {
    ProtectorError::InvalidEncryptionDictionary(message.into())
}
