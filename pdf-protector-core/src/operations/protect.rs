//! Password protection of existing documents

use crate::document::LoadedDocument;
use crate::encryption::ProtectionPolicy;
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Protect the PDF at `input_path` and write the result to `output_path`.
///
/// Uses the restricted permission set and a 128-bit key. `owner_password`
/// falls back to `user_password` when `None`. `output_path` may be the same
/// file as `input_path`.
pub fn protect<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    user_password: &str,
    owner_password: Option<&str>,
) -> Result<()> {
    let policy = ProtectionPolicy::restricted(user_password, owner_password);
    protect_with_policy(input_path, output_path, &policy)
}

/// Protect the PDF at `input_path` with a caller-built policy
pub fn protect_with_policy<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    policy: &ProtectionPolicy,
) -> Result<()> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let mut document = LoadedDocument::open(input_path)?;
    document.protect(policy)?;
    document.save(output_path)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        "document protected"
    );
    Ok(())
}

/// Protect a document held in memory and return the encrypted bytes
pub fn protect_bytes(input: &[u8], policy: &ProtectionPolicy) -> Result<Vec<u8>> {
    let mut document = LoadedDocument::from_bytes(input)?;
    document.protect(policy)?;
    document.to_bytes()
}
