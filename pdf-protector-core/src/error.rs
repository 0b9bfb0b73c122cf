use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load PDF {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Failed to parse PDF data: {0}")]
    Parse(#[source] lopdf::Error),

    #[error("Document is already encrypted")]
    AlreadyEncrypted,

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Invalid encryption dictionary: {0}")]
    InvalidEncryptionDictionary(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProtectorError>;
