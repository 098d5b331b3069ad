pub mod models;
pub mod service;
pub mod utils;

pub use models::edit_backup::EditBackupRequest;
pub use models::error::{EditBackupError, Result};
pub use models::wire_naming::WireNaming;
