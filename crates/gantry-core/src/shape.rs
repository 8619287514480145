//! Structural metadata for plugin configuration types.
//!
//! A configuration type is described by an explicit, author-supplied
//! [`Shape`] tree rather than runtime type inspection. The shape is a
//! closed set: the walker in [`synth`](crate::synth) matches on it
//! exhaustively and there is no fallback "any" kind.

use crate::phase::Phase;

/// Structural description of one configuration type.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Textual value.
    Text,
    /// Boolean value.
    Bool,
    /// Signed integer, 32-bit or platform-width.
    Int,
    /// Unsigned integer, 32-bit or platform-width.
    UInt,
    /// Floating-point value of any width.
    Float,
    /// Optional wrapper around another shape; the schema describes the
    /// wrapped shape directly.
    Optional(Box<Shape>),
    /// Homogeneous sequence of elements.
    Sequence(Box<Shape>),
    /// Associative mapping from key shape to value shape.
    Mapping(Box<Shape>, Box<Shape>),
    /// Structured record; fields keep declaration order.
    Record(Vec<FieldShape>),
    /// Anything the schema cannot represent (closures, channels,
    /// trait objects).
    Opaque,
}

/// One field of a [`Shape::Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    /// Identifier of the field in the configuration struct.
    pub ident: &'static str,
    /// Serialization tag overriding the identifier, when non-empty.
    pub rename: Option<&'static str>,
    /// Raw validation/CLI annotation string — comma-separated
    /// `key=value` pairs, e.g. `"required=true,default=5"`.
    pub annotation: Option<&'static str>,
    /// Hidden fields are internal to the plugin and never published,
    /// whatever their shape.
    pub hidden: bool,
    /// Shape of the field's value.
    pub shape: Shape,
}

impl FieldShape {
    /// Creates a visible, untagged field.
    pub fn new(ident: &'static str, shape: Shape) -> Self {
        Self {
            ident,
            rename: None,
            annotation: None,
            hidden: false,
            shape,
        }
    }

    /// Overrides the published field name with a serialization tag.
    pub fn renamed(mut self, tag: &'static str) -> Self {
        self.rename = Some(tag);
        self
    }

    /// Attaches a raw annotation string.
    pub fn annotated(mut self, raw: &'static str) -> Self {
        self.annotation = Some(raw);
        self
    }

    /// Marks the field as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Implemented by plugin configuration types.
///
/// Implementors supply the structural [`Shape`] of their configuration
/// and declare which lifecycle [`Phase`]s the plugin handles. Both are
/// static facts about the type; the server queries them once, at
/// registration time.
///
/// # Example
///
/// ```rust,ignore
/// struct RateLimitConfig;
///
/// impl PluginConfig for RateLimitConfig {
///     fn shape(&self) -> Shape {
///         Shape::Record(vec![
///             FieldShape::new("Limit", Shape::UInt).annotated("required=true"),
///             FieldShape::new("Message", Shape::Text).renamed("error_message"),
///         ])
///     }
///
///     fn handles(&self, phase: Phase) -> bool {
///         matches!(phase, Phase::Access | Phase::Log)
///     }
/// }
/// ```
pub trait PluginConfig: Send + Sync {
    /// Structural description of this configuration type.
    fn shape(&self) -> Shape;

    /// Whether the plugin handles the given lifecycle phase.
    ///
    /// Defaults to handling none.
    fn handles(&self, phase: Phase) -> bool {
        let _ = phase;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder_defaults() {
        let field = FieldShape::new("Host", Shape::Text);
        assert_eq!(field.ident, "Host");
        assert_eq!(field.rename, None);
        assert_eq!(field.annotation, None);
        assert!(!field.hidden);
    }

    #[test]
    fn test_field_builder_chaining() {
        let field = FieldShape::new("Host", Shape::Text)
            .renamed("host_name")
            .annotated("required=true");
        assert_eq!(field.rename, Some("host_name"));
        assert_eq!(field.annotation, Some("required=true"));
    }

    #[test]
    fn test_default_config_handles_no_phase() {
        struct Empty;
        impl PluginConfig for Empty {
            fn shape(&self) -> Shape {
                Shape::Record(vec![])
            }
        }

        let config = Empty;
        for phase in Phase::ALL {
            assert!(!config.handles(phase));
        }
    }
}
