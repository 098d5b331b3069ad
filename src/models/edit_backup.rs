use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Edit backup parameters.
///
/// Built by the request decoder and read once by whichever service applies
/// the edit. Both fields are optional and independent of each other; this
/// type checks neither of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBackupRequest {
    /// Time before deleting the backup from storage, in milliseconds,
    /// counted from the moment of the edit. Defaults to 0.
    #[serde(default, alias = "timeBeforeDeleteFromPresentInMillis")]
    pub retention_override_millis: i64,

    /// New backup storage config. `None` leaves the storage config as is.
    #[serde(
        default,
        alias = "storageConfigUUID",
        skip_serializing_if = "Option::is_none"
    )]
    pub replacement_storage_config_id: Option<Uuid>,
}

impl EditBackupRequest {
    pub fn new(retention_override_millis: i64, replacement_storage_config_id: Option<Uuid>) -> Self {
        Self {
            retention_override_millis,
            replacement_storage_config_id,
        }
    }
}
