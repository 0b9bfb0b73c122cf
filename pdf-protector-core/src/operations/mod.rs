//! PDF operations module
//!
//! High-level entry points: apply password protection to a document, and
//! check whether a document is already protected. Each operation opens its
//! own [`LoadedDocument`](crate::LoadedDocument) and releases it before
//! returning.

pub mod check;
pub mod protect;

pub use check::{check_protection, check_protection_bytes, is_protected, ProtectionStatus};
pub use protect::{protect, protect_bytes, protect_with_policy};
