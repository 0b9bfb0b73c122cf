//! Interpretation of the positional command line and rendering of results
//!
//! ```text
//! pdf-protector <input-pdf> <output-pdf> <user-password> [owner-password]
//! pdf-protector --check <input-pdf>
//! ```

use anyhow::{Context, Result};
use pdf_protector::{check_protection, protect, ProtectionStatus};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// First argument selecting the check operation
pub const CHECK_FLAG: &str = "--check";

/// Printed to stderr when no arguments are given
pub const USAGE: [&str; 2] = [
    "Usage: pdf-protector <input-pdf> <output-pdf> <user-password> [owner-password]",
    "       pdf-protector --check <input-pdf>",
];

/// Line printed after every successful operation
pub const SUCCESS: &str = "SUCCESS";

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Protect {
        input: PathBuf,
        output: PathBuf,
        user_password: String,
        owner_password: Option<String>,
    },
    Check {
        input: PathBuf,
    },
}

/// Command lines that do not name an operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("No arguments given")]
    NoArguments,

    #[error("Input PDF path required for check operation")]
    MissingCheckInput,

    #[error("Insufficient arguments for protect operation")]
    InsufficientProtectArguments,
}

impl Invocation {
    /// Interpret the arguments following the program name.
    ///
    /// Arguments past the owner password are ignored.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        let (first, rest) = args.split_first().ok_or(UsageError::NoArguments)?;

        if first == CHECK_FLAG {
            let input = rest.first().ok_or(UsageError::MissingCheckInput)?;
            return Ok(Invocation::Check {
                input: PathBuf::from(input),
            });
        }

        match args {
            [input, output, user_password, extra @ ..] => Ok(Invocation::Protect {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
                user_password: user_password.clone(),
                owner_password: extra.first().cloned(),
            }),
            _ => Err(UsageError::InsufficientProtectArguments),
        }
    }
}

/// Run the operation and write its result lines to `out`
pub fn run<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    match invocation {
        Invocation::Protect {
            input,
            output,
            user_password,
            owner_password,
        } => {
            protect(input, output, user_password, owner_password.as_deref())
                .with_context(|| format!("Failed to protect {}", input.display()))?;
        }
        Invocation::Check { input } => {
            let status = check_protection(input);
            if let ProtectionStatus::Indeterminate(reason) = &status {
                debug!(input = %input.display(), %reason, "reporting as not protected");
            }

            let label = if status.is_protected() {
                "PROTECTED"
            } else {
                "NOT_PROTECTED"
            };
            writeln!(out, "{label}").context("Failed to write to stdout")?;
        }
    }

    writeln!(out, "{SUCCESS}").context("Failed to write to stdout")?;
    Ok(())
}
