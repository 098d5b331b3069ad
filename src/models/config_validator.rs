use crate::models::config::Config;
use crate::models::error::{EditBackupError, Result};
use log::{info, warn};

/// Payloads above this size are allowed but almost certainly not edit requests
const LARGE_PAYLOAD_WARNING_BYTES: u64 = 64 * 1048576;

/// Validates the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating configuration...");

    validate_numeric_values(config)?;

    validate_payload_extension(&config.payload_extension)?;

    info!("Configuration validation passed");
    Ok(())
}

/// Validate numeric configuration values
fn validate_numeric_values(config: &Config) -> Result<()> {
    if config.max_depth == 0 {
        return Err(EditBackupError::ConfigInvalid(
            "max_depth of 0 means no payload files will be found. Set max_depth to at least 1."
                .to_string(),
        ));
    }

    if config.max_payload_bytes == 0 {
        return Err(EditBackupError::ConfigInvalid(
            "max_payload_bytes must be greater than 0".to_string(),
        ));
    }

    if config.max_payload_bytes > LARGE_PAYLOAD_WARNING_BYTES {
        warn!(
            "max_payload_bytes ({}) is larger than {} bytes. Edit backup requests are a few hundred bytes at most.",
            config.max_payload_bytes, LARGE_PAYLOAD_WARNING_BYTES
        );
    }

    Ok(())
}

/// Validate the file extension used when scanning directories
fn validate_payload_extension(extension: &str) -> Result<()> {
    if extension.trim().is_empty() {
        return Err(EditBackupError::ConfigInvalid(
            "payload_extension cannot be empty".to_string(),
        ));
    }

    // Path::extension only ever yields the part after the last dot
    if extension.contains('.') {
        return Err(EditBackupError::ConfigInvalid(format!(
            "payload_extension must not contain '.': {}\nSuggestion: use \"{}\"",
            extension,
            extension.rsplit('.').next().unwrap_or_default()
        )));
    }

    Ok(())
}
