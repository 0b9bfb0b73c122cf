//! Password protection according to ISO 32000-1 Chapter 7.6
//!
//! Builds the standard security handler inputs (passwords, permissions,
//! 128-bit cipher) handed to the PDF engine, and reads back the encryption
//! dictionary of a protected document.

mod details;
mod permissions;
mod policy;

pub use details::EncryptionDetails;
pub use permissions::AccessPolicy;
pub use policy::{is_pdf_doc_encodable, Cipher, ProtectionPolicy, KEY_LENGTH_BITS};
