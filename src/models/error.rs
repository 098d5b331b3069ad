use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditBackupError {
    #[error("Failed to read config file '{path}': {cause}")]
    ConfigRead { path: PathBuf, cause: io::Error },

    #[error("Failed to parse config file '{path}': {cause}")]
    ConfigParse {
        path: PathBuf,
        cause: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Failed to read payload '{source_name}': {cause}")]
    PayloadRead { source_name: String, cause: io::Error },

    #[error("Payload '{source_name}' is {size} bytes, which exceeds the limit of {limit} bytes")]
    PayloadTooLarge {
        source_name: String,
        size: u64,
        limit: u64,
    },

    #[error("Failed to decode edit backup request from '{source_name}': {cause}")]
    Decode {
        source_name: String,
        cause: serde_json::Error,
    },

    #[error("Failed to encode edit backup request: {cause}")]
    Encode { cause: serde_json::Error },

    #[error("Failed to read directory entry: {0}")]
    DirectoryRead(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, EditBackupError>;
