//! # pdf-protector
//!
//! Password protection and permission restriction for existing PDF files.
//!
//! The library loads a document, applies the standard security handler with
//! a 128-bit key and a fixed restricted permission set, and writes the
//! result. It can also report whether a document is already encrypted.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_protector::{is_protected, protect, Result};
//!
//! # fn main() -> Result<()> {
//! // Owner password falls back to the user password
//! protect("report.pdf", "report-protected.pdf", "reader-secret", None)?;
//! assert!(is_protected("report-protected.pdf"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Three-valued check
//!
//! ```rust,no_run
//! use pdf_protector::{check_protection, ProtectionStatus};
//!
//! match check_protection("maybe.pdf") {
//!     ProtectionStatus::Protected => println!("encrypted"),
//!     ProtectionStatus::NotProtected => println!("plain"),
//!     ProtectionStatus::Indeterminate(reason) => eprintln!("could not open: {reason}"),
//! }
//! ```
//!
//! ## Permissions
//!
//! Protected documents allow printing (including full-fidelity printing),
//! form filling and extraction for accessibility. Modification, content
//! extraction, annotation edits and page assembly are denied. See
//! [`AccessPolicy::restricted`].

pub mod document;
pub mod encryption;
pub mod error;
pub mod operations;

#[cfg(test)]
pub(crate) mod test_utils;

pub use document::LoadedDocument;
pub use encryption::{AccessPolicy, Cipher, EncryptionDetails, ProtectionPolicy, KEY_LENGTH_BITS};
pub use error::{ProtectorError, Result};
pub use operations::{
    check_protection, check_protection_bytes, is_protected, protect, protect_bytes,
    protect_with_policy, ProtectionStatus,
};

/// Current version of pdf-protector
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
