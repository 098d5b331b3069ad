use crate::models::edit_backup::EditBackupRequest;
use crate::models::error::{EditBackupError, Result};
use crate::models::wire_naming::WireNaming;
use log::trace;
use serde::de::{self, Unexpected};
use serde::Serialize;
use std::io::Read;
use uuid::Uuid;

const INLINE_SOURCE: &str = "<inline>";

/// Edit backup request as written by the management API, explicit nulls included
#[derive(Debug, Serialize)]
struct LegacyEditBackupParams {
    #[serde(rename = "timeBeforeDeleteFromPresentInMillis")]
    time_before_delete_from_present_in_millis: i64,
    #[serde(rename = "storageConfigUUID")]
    storage_config_uuid: Option<Uuid>,
}

impl From<&EditBackupRequest> for LegacyEditBackupParams {
    fn from(request: &EditBackupRequest) -> Self {
        Self {
            time_before_delete_from_present_in_millis: request.retention_override_millis,
            storage_config_uuid: request.replacement_storage_config_id,
        }
    }
}

pub fn decode_str(payload: &str) -> Result<EditBackupRequest> {
    decode_payload(payload.as_bytes(), INLINE_SOURCE)
}

pub fn decode_slice(payload: &[u8]) -> Result<EditBackupRequest> {
    decode_payload(payload, INLINE_SOURCE)
}

pub fn decode_reader<R: Read>(mut reader: R) -> Result<EditBackupRequest> {
    let mut payload = Vec::new();
    reader
        .read_to_end(&mut payload)
        .map_err(|cause| EditBackupError::PayloadRead {
            source_name: INLINE_SOURCE.to_string(),
            cause,
        })?;
    decode_payload(&payload, INLINE_SOURCE)
}

/// Decodes one JSON payload, naming `source_name` in any error.
///
/// The payload must be a JSON object. Canonical and legacy field names are
/// both accepted, but not for the same field in one payload. Unknown fields
/// are ignored.
pub fn decode_payload(payload: &[u8], source_name: &str) -> Result<EditBackupRequest> {
    // The derived visitor would also take a JSON array, so check the shape first
    if let Some(found) = non_object_payload(payload) {
        let cause = <serde_json::Error as de::Error>::invalid_type(found, &"a JSON object");
        return Err(decode_error(source_name, cause));
    }

    let request: EditBackupRequest =
        serde_json::from_slice(payload).map_err(|cause| decode_error(source_name, cause))?;
    trace!("Decoded {}: {:?}", source_name, request);
    Ok(request)
}

pub fn encode(request: &EditBackupRequest, naming: WireNaming, pretty: bool) -> Result<String> {
    let encoded = match naming {
        WireNaming::Canonical => to_json(request, pretty),
        WireNaming::Legacy => to_json(&LegacyEditBackupParams::from(request), pretty),
    };
    encoded.map_err(|cause| EditBackupError::Encode { cause })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn decode_error(source_name: &str, cause: serde_json::Error) -> EditBackupError {
    EditBackupError::Decode {
        source_name: source_name.to_string(),
        cause,
    }
}

/// Kind of the top-level JSON value when it is clearly not an object.
/// Anything unrecognised is left for serde_json to report with a position.
fn non_object_payload(payload: &[u8]) -> Option<Unexpected<'static>> {
    let first = payload.iter().find(|b| !b.is_ascii_whitespace())?;
    match first {
        b'[' => Some(Unexpected::Seq),
        b'"' => Some(Unexpected::Other("string")),
        b't' | b'f' => Some(Unexpected::Other("boolean")),
        b'n' => Some(Unexpected::Unit),
        b'-' | b'0'..=b'9' => Some(Unexpected::Other("number")),
        _ => None,
    }
}
