//! Declarative schema nodes and their published serialization.
//!
//! The schema tree is the contract the surrounding server's
//! serialization layer depends on: leaf kinds, `array`/`map`/`record`
//! wrapping, record field ordering, and the `required`/`default` side
//! keys must all be reproduced exactly.

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

/// Range attached to unsigned integers.
///
/// The upper bound is the signed 32-bit overflow boundary and is
/// applied to every unsigned width as a fixed policy, not derived from
/// the source type.
pub const UNSIGNED_RANGE: [i64; 2] = [0, 2_147_483_648];

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Shape kind of the described type.
    pub kind: SchemaKind,
    /// `required` side key merged from a field annotation.
    pub required: Option<bool>,
    /// `default` side key merged from a field annotation; kept as the
    /// literal annotation value.
    pub default: Option<String>,
}

/// The kinds a schema node can take.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// Textual value.
    String,
    /// Boolean value.
    Boolean,
    /// Floating-point value.
    Number,
    /// Integer value; unsigned sources carry [`UNSIGNED_RANGE`].
    Integer { between: Option<[i64; 2]> },
    /// Sequence of one element kind.
    Array(Box<SchemaNode>),
    /// Mapping from a key kind to a value kind.
    Map(Box<SchemaNode>, Box<SchemaNode>),
    /// Ordered named fields; insertion order is declaration order.
    Record(Vec<(String, SchemaNode)>),
}

impl SchemaNode {
    /// Node of the given kind with no side keys.
    pub fn leaf(kind: SchemaKind) -> Self {
        Self {
            kind,
            required: None,
            default: None,
        }
    }

    /// Array node wrapping an element node.
    pub fn array(element: SchemaNode) -> Self {
        Self::leaf(SchemaKind::Array(Box::new(element)))
    }

    /// Map node wrapping key and value nodes.
    pub fn map(keys: SchemaNode, values: SchemaNode) -> Self {
        Self::leaf(SchemaKind::Map(Box::new(keys), Box::new(values)))
    }

    /// Record node over ordered `(name, node)` pairs.
    pub fn record(fields: Vec<(String, SchemaNode)>) -> Self {
        Self::leaf(SchemaKind::Record(fields))
    }
}

impl Serialize for SchemaNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match &self.kind {
            SchemaKind::String => map.serialize_entry("type", "string")?,
            SchemaKind::Boolean => map.serialize_entry("type", "boolean")?,
            SchemaKind::Number => map.serialize_entry("type", "number")?,
            SchemaKind::Integer { between } => {
                map.serialize_entry("type", "integer")?;
                if let Some(range) = between {
                    map.serialize_entry("between", range)?;
                }
            }
            SchemaKind::Array(element) => {
                map.serialize_entry("type", "array")?;
                map.serialize_entry("elements", element)?;
            }
            SchemaKind::Map(keys, values) => {
                map.serialize_entry("type", "map")?;
                map.serialize_entry("keys", keys)?;
                map.serialize_entry("values", values)?;
            }
            SchemaKind::Record(fields) => {
                map.serialize_entry("type", "record")?;
                map.serialize_entry("fields", &RecordFields(fields))?;
            }
        }
        if let Some(required) = self.required {
            map.serialize_entry("required", &required)?;
        }
        if let Some(default) = &self.default {
            map.serialize_entry("default", default)?;
        }
        map.end()
    }
}

/// Record fields serialize as a sequence of single-key objects so the
/// published document preserves declaration order.
struct RecordFields<'a>(&'a [(String, SchemaNode)]);

impl Serialize for RecordFields<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (name, node) in self.0 {
            seq.serialize_element(&FieldEntry(name, node))?;
        }
        seq.end()
    }
}

struct FieldEntry<'a>(&'a str, &'a SchemaNode);

impl Serialize for FieldEntry<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_serialization() {
        let node = SchemaNode::leaf(SchemaKind::String);
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"type": "string"}));

        let node = SchemaNode::leaf(SchemaKind::Boolean);
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"type": "boolean"}));

        let node = SchemaNode::leaf(SchemaKind::Number);
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"type": "number"}));
    }

    #[test]
    fn test_integer_serialization() {
        let node = SchemaNode::leaf(SchemaKind::Integer { between: None });
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"type": "integer"}));

        let node = SchemaNode::leaf(SchemaKind::Integer {
            between: Some(UNSIGNED_RANGE),
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "integer", "between": [0, 2147483648i64]})
        );
    }

    #[test]
    fn test_array_serialization() {
        let node = SchemaNode::array(SchemaNode::leaf(SchemaKind::String));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "array", "elements": {"type": "string"}})
        );
    }

    #[test]
    fn test_map_serialization() {
        let node = SchemaNode::map(
            SchemaNode::leaf(SchemaKind::String),
            SchemaNode::leaf(SchemaKind::Number),
        );
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "map",
                "keys": {"type": "string"},
                "values": {"type": "number"},
            })
        );
    }

    #[test]
    fn test_record_preserves_field_order() {
        let node = SchemaNode::record(vec![
            ("zeta".to_string(), SchemaNode::leaf(SchemaKind::String)),
            ("alpha".to_string(), SchemaNode::leaf(SchemaKind::Boolean)),
        ]);
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "record",
                "fields": [
                    {"zeta": {"type": "string"}},
                    {"alpha": {"type": "boolean"}},
                ],
            })
        );
    }

    #[test]
    fn test_side_keys_serialization() {
        let mut node = SchemaNode::leaf(SchemaKind::String);
        node.required = Some(true);
        node.default = Some("5".to_string());
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "string", "required": true, "default": "5"})
        );
    }
}
