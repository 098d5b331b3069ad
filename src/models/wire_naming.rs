use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field naming used when an edit backup request is written back out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WireNaming {
    /// `retentionOverrideMillis` / `replacementStorageConfigId`, absent id omitted
    #[default]
    Canonical,

    /// `timeBeforeDeleteFromPresentInMillis` / `storageConfigUUID`, absent id written as null
    Legacy,
}

impl WireNaming {
    /// Returns true if the legacy management API names are used
    pub fn is_legacy(&self) -> bool {
        matches!(self, WireNaming::Legacy)
    }

    /// Name of the retention override field on the wire
    pub fn retention_field(&self) -> &'static str {
        match self {
            WireNaming::Canonical => "retentionOverrideMillis",
            WireNaming::Legacy => "timeBeforeDeleteFromPresentInMillis",
        }
    }

    /// Name of the storage config id field on the wire
    pub fn storage_config_field(&self) -> &'static str {
        match self {
            WireNaming::Canonical => "replacementStorageConfigId",
            WireNaming::Legacy => "storageConfigUUID",
        }
    }
}

impl fmt::Display for WireNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireNaming::Canonical => write!(f, "canonical"),
            WireNaming::Legacy => write!(f, "legacy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(WireNaming::default(), WireNaming::Canonical);
        assert!(!WireNaming::default().is_legacy());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(WireNaming::Canonical.retention_field(), "retentionOverrideMillis");
        assert_eq!(
            WireNaming::Canonical.storage_config_field(),
            "replacementStorageConfigId"
        );
        assert_eq!(
            WireNaming::Legacy.retention_field(),
            "timeBeforeDeleteFromPresentInMillis"
        );
        assert_eq!(WireNaming::Legacy.storage_config_field(), "storageConfigUUID");
    }

    #[test]
    fn test_deserializes_from_lowercase() {
        let naming: WireNaming = serde_json::from_str(r#""legacy""#).unwrap();
        assert_eq!(naming, WireNaming::Legacy);
        assert!(serde_json::from_str::<WireNaming>(r#""Legacy""#).is_err());
    }

    #[test]
    fn test_display_matches_cli_value() {
        for naming in [WireNaming::Canonical, WireNaming::Legacy] {
            assert_eq!(WireNaming::from_str(&naming.to_string(), false), Ok(naming));
        }
    }
}
