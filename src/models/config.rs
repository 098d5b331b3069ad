use crate::models::config_validator::validate_config;
use crate::models::error::{EditBackupError, Result};
use crate::models::wire_naming::WireNaming;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub wire_naming: WireNaming,
    #[serde(default = "bool_false")]
    pub pretty: bool,
    #[serde(default = "default_payload_extension")]
    pub payload_extension: String,
    #[serde(default = "usize_max")]
    pub max_depth: usize,
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wire_naming: WireNaming::default(),
            pretty: bool_false(),
            payload_extension: default_payload_extension(),
            max_depth: usize_max(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

const fn usize_max() -> usize {
    usize::MAX
}
const fn bool_false() -> bool {
    false
}
const fn default_max_payload_bytes() -> u64 {
    1048576
}
fn default_payload_extension() -> String {
    "json".to_string()
}

pub fn setup_config(config_file: String) -> Result<Config> {
    let config_path = PathBuf::from(config_file);
    info!("Loading config from: {}", config_path.display());

    let config_str = fs::read_to_string(&config_path).map_err(|cause| {
        EditBackupError::ConfigRead {
            path: config_path.clone(),
            cause,
        }
    })?;

    let config: Config = serde_json::from_str(&config_str).map_err(|cause| {
        EditBackupError::ConfigParse {
            path: config_path,
            cause,
        }
    })?;

    validate_config(&config)?;

    Ok(config)
}
