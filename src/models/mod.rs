pub mod config;
pub mod config_validator;
pub mod edit_backup;
pub mod error;
pub mod wire_naming;
