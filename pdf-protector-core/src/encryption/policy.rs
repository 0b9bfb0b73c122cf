//! Password protection policy for the standard security handler

use super::permissions::AccessPolicy;
use crate::error::{ProtectorError, Result};
use lopdf::encryption::crypt_filters::{Aes128CryptFilter, CryptFilter};
use lopdf::{decode_text_string, Document, EncryptionState, EncryptionVersion, Object, StringFormat};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Symmetric key length used for every protected document, in bits.
pub const KEY_LENGTH_BITS: usize = 128;

/// Name of the crypt filter registered for AES-128 (ISO 32000-1 7.6.5)
const STANDARD_CRYPT_FILTER: &[u8] = b"StdCF";

/// Cipher used with the 128-bit key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cipher {
    /// AES-128 through a crypt filter (V4, revision 4)
    #[default]
    Aes128,
    /// RC4 with a 128-bit key (V2, revision 3)
    Rc4,
}

impl Cipher {
    /// `/V` entry written to the encryption dictionary
    pub fn algorithm_version(self) -> i64 {
        match self {
            Cipher::Aes128 => 4,
            Cipher::Rc4 => 2,
        }
    }

    /// `/R` entry written to the encryption dictionary
    pub fn revision(self) -> i64 {
        match self {
            Cipher::Aes128 => 4,
            Cipher::Rc4 => 3,
        }
    }
}

/// Owner password, user password and permissions applied to a document.
///
/// The user password opens the document under the restricted permission
/// set; the owner password grants full access. An empty user password lets
/// anyone open the file while the permissions still apply.
#[derive(Clone)]
pub struct ProtectionPolicy {
    owner_password: String,
    user_password: String,
    permissions: AccessPolicy,
    cipher: Cipher,
}

impl ProtectionPolicy {
    /// Create a policy from explicit passwords and permissions
    pub fn new(
        owner_password: impl Into<String>,
        user_password: impl Into<String>,
        permissions: AccessPolicy,
    ) -> Self {
        Self {
            owner_password: owner_password.into(),
            user_password: user_password.into(),
            permissions,
            cipher: Cipher::default(),
        }
    }

    /// The policy used by the protect operation: fixed restricted permissions,
    /// with the owner password falling back to the user password.
    pub fn restricted(user_password: &str, owner_password: Option<&str>) -> Self {
        Self::new(
            owner_password.unwrap_or(user_password),
            user_password,
            AccessPolicy::restricted(),
        )
    }

    /// Select the cipher used with the 128-bit key
    pub fn with_cipher(mut self, cipher: Cipher) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn owner_password(&self) -> &str {
        &self.owner_password
    }

    pub fn user_password(&self) -> &str {
        &self.user_password
    }

    pub fn permissions(&self) -> AccessPolicy {
        self.permissions
    }

    pub fn cipher(&self) -> Cipher {
        self.cipher
    }

    /// Key length in bits
    pub fn key_length(&self) -> usize {
        KEY_LENGTH_BITS
    }

    /// Derive the keys and dictionary values for `document`.
    ///
    /// The document must already carry a file identifier in its trailer.
    /// Both passwords must be representable in PDFDocEncoding.
    pub(crate) fn encryption_state(&self, document: &Document) -> Result<EncryptionState> {
        for password in [&self.user_password, &self.owner_password] {
            if !is_pdf_doc_encodable(password) {
                return Err(ProtectorError::Encryption(format!(
                    "password contains characters not representable in PDFDocEncoding \
                     (required at revision {})",
                    self.cipher.revision()
                )));
            }
        }

        let permissions = self.permissions.to_lopdf();

        let version = match self.cipher {
            Cipher::Aes128 => {
                let crypt_filter: Arc<dyn CryptFilter> = Arc::new(Aes128CryptFilter);

                EncryptionVersion::V4 {
                    document,
                    encrypt_metadata: true,
                    crypt_filters: BTreeMap::from([(
                        STANDARD_CRYPT_FILTER.to_vec(),
                        crypt_filter,
                    )]),
                    stream_filter: STANDARD_CRYPT_FILTER.to_vec(),
                    string_filter: STANDARD_CRYPT_FILTER.to_vec(),
                    owner_password: &self.owner_password,
                    user_password: &self.user_password,
                    permissions,
                }
            }
            Cipher::Rc4 => EncryptionVersion::V2 {
                document,
                owner_password: &self.owner_password,
                user_password: &self.user_password,
                key_length: KEY_LENGTH_BITS,
                permissions,
            },
        };

        EncryptionState::try_from(version).map_err(|e| ProtectorError::Encryption(e.to_string()))
    }
}

/// Whether every character of `password` has a single-byte PDFDocEncoding code
pub fn is_pdf_doc_encodable(password: &str) -> bool {
    let alphabet: Vec<char> = (0..=u8::MAX)
        .filter_map(|code| {
            let byte = Object::String(vec![code], StringFormat::Literal);
            decode_text_string(&byte).ok()?.chars().next()
        })
        .collect();

    password.chars().all(|c| alphabet.contains(&c))
}

impl fmt::Debug for ProtectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectionPolicy")
            .field("owner_password", &"<redacted>")
            .field("user_password", &"<redacted>")
            .field("permissions", &self.permissions)
            .field("cipher", &self.cipher)
            .field("key_length", &KEY_LENGTH_BITS)
            .finish()
    }
}
