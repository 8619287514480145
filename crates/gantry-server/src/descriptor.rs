//! Published plugin descriptor and schema wrappers.
//!
//! These are the wire shapes the surrounding server's serialization
//! layer renders for operators and tooling; field names and ordering
//! are part of the contract.

use std::time::SystemTime;

use gantry_core::SchemaNode;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Top-level schema document published for one plugin.
///
/// Serializes as `{"name": .., "fields": [{"config": ..}]}`. The
/// `config` slot is `null` when the configuration type itself is
/// unrepresentable; absence propagation only governs fields inside
/// records, the wrapper always keeps its key.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSchema {
    /// Plugin name, as resolved by the naming service.
    pub name: String,
    /// Schema of the plugin's configuration type.
    pub config: Option<SchemaNode>,
}

impl Serialize for ConfigSchema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("fields", &[ConfigEntry(&self.config)])?;
        map.end()
    }
}

struct ConfigEntry<'a>(&'a Option<SchemaNode>);

impl Serialize for ConfigEntry<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("config", self.0)?;
        map.end()
    }
}

/// Descriptor published for one registered plugin.
///
/// Read-only once produced; `mod_time` and `load_time` are populated
/// by the surrounding server and omitted from serialization while
/// unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginDescriptor {
    /// Plugin name.
    #[serde(rename = "Name")]
    pub name: String,

    /// Plugin file modification time.
    #[serde(rename = "ModTime", skip_serializing_if = "Option::is_none")]
    pub mod_time: Option<SystemTime>,

    /// Plugin load time.
    #[serde(rename = "LoadTime", skip_serializing_if = "Option::is_none")]
    pub load_time: Option<SystemTime>,

    /// Lifecycle phases the plugin handles, lowercased, in vocabulary
    /// order.
    #[serde(rename = "Phases")]
    pub phases: Vec<String>,

    /// Version string, stored verbatim from registration.
    #[serde(rename = "Version")]
    pub version: String,

    /// Priority, stored verbatim from registration.
    #[serde(rename = "Priority")]
    pub priority: i32,

    /// Config schema document.
    #[serde(rename = "Schema")]
    pub schema: ConfigSchema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::SchemaKind;
    use serde_json::json;

    #[test]
    fn test_config_schema_serialization() {
        let schema = ConfigSchema {
            name: "rate-limit".to_string(),
            config: Some(SchemaNode::record(vec![(
                "limit".to_string(),
                SchemaNode::leaf(SchemaKind::Integer { between: None }),
            )])),
        };
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "name": "rate-limit",
                "fields": [{
                    "config": {
                        "type": "record",
                        "fields": [{"limit": {"type": "integer"}}],
                    },
                }],
            })
        );
    }

    #[test]
    fn test_unrepresentable_config_serializes_null() {
        let schema = ConfigSchema {
            name: "opaque".to_string(),
            config: None,
        };
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"name": "opaque", "fields": [{"config": null}]})
        );
    }

    #[test]
    fn test_descriptor_omits_unset_timestamps() {
        let descriptor = PluginDescriptor {
            name: "demo".to_string(),
            mod_time: None,
            load_time: None,
            phases: vec!["access".to_string(), "log".to_string()],
            version: "0.2".to_string(),
            priority: 1,
            schema: ConfigSchema {
                name: "demo".to_string(),
                config: None,
            },
        };
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["Name"], "demo");
        assert_eq!(value["Phases"], json!(["access", "log"]));
        assert_eq!(value["Version"], "0.2");
        assert_eq!(value["Priority"], 1);
        assert!(value.get("ModTime").is_none());
        assert!(value.get("LoadTime").is_none());
    }
}
