//! Shape-to-schema synthesis.

use tracing::trace;

use crate::annotation;
use crate::schema::{SchemaKind, SchemaNode, UNSIGNED_RANGE};
use crate::shape::Shape;

/// Converts a structural shape into a schema node.
///
/// Returns `None` when the shape cannot be represented. Absence
/// propagates upward: a sequence or mapping over an unrepresentable
/// shape is itself absent, and an unrepresentable record field is
/// dropped from its parent rather than replaced by a placeholder.
pub fn synthesize(shape: &Shape) -> Option<SchemaNode> {
    match shape {
        Shape::Text => Some(SchemaNode::leaf(SchemaKind::String)),

        Shape::Bool => Some(SchemaNode::leaf(SchemaKind::Boolean)),

        Shape::Int => Some(SchemaNode::leaf(SchemaKind::Integer { between: None })),

        Shape::UInt => Some(SchemaNode::leaf(SchemaKind::Integer {
            between: Some(UNSIGNED_RANGE),
        })),

        Shape::Float => Some(SchemaNode::leaf(SchemaKind::Number)),

        Shape::Optional(inner) => synthesize(inner),

        Shape::Sequence(element) => synthesize(element).map(SchemaNode::array),

        Shape::Mapping(keys, values) => {
            let keys = synthesize(keys)?;
            let values = synthesize(values)?;
            Some(SchemaNode::map(keys, values))
        }

        Shape::Record(fields) => {
            let mut out = Vec::with_capacity(fields.len());
            for field in fields {
                if field.hidden {
                    continue;
                }
                let Some(mut node) = synthesize(&field.shape) else {
                    trace!(field = field.ident, "Dropping unrepresentable field");
                    continue;
                };
                if let Some(raw) = field.annotation {
                    annotation::apply(&mut node, raw);
                }
                let name = match field.rename {
                    Some(tag) if !tag.is_empty() => tag.to_string(),
                    _ => field.ident.to_lowercase(),
                };
                out.push((name, node));
            }
            Some(SchemaNode::record(out))
        }

        Shape::Opaque => None,
    }
}
