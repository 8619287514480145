//! Field annotation merging.
//!
//! Annotations are comma-separated `key=value` pairs attached to a
//! record field, e.g. `"required=true,default=5"`. Only the `required`
//! and `default` keys are recognised; anything else — including pairs
//! that do not split into exactly two parts on `=` — is ignored
//! without error.

use crate::schema::SchemaNode;

/// Merges one field's annotation string into its schema node.
///
/// `default` keeps the literal value string; `required` stores the
/// result of comparing the value against `"true"`. The node is left
/// unchanged when `raw` carries no recognised pair. Malformed input
/// never fails, it degrades to no effect.
pub fn apply(node: &mut SchemaNode, raw: &str) {
    for pair in raw.split(',') {
        let parts: Vec<&str> = pair.split('=').collect();
        if parts.len() != 2 {
            continue;
        }
        match parts[0] {
            "default" => node.default = Some(parts[1].to_string()),
            "required" => node.required = Some(parts[1] == "true"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;

    fn leaf() -> SchemaNode {
        SchemaNode::leaf(SchemaKind::String)
    }

    #[test]
    fn test_required_and_default() {
        let mut node = leaf();
        apply(&mut node, "required=true,default=5");
        assert_eq!(node.required, Some(true));
        assert_eq!(node.default, Some("5".to_string()));
    }

    #[test]
    fn test_required_false() {
        let mut node = leaf();
        apply(&mut node, "required=false");
        assert_eq!(node.required, Some(false));
        assert_eq!(node.default, None);
    }

    #[test]
    fn test_required_non_true_value_is_false() {
        let mut node = leaf();
        apply(&mut node, "required=yes");
        assert_eq!(node.required, Some(false));
    }

    #[test]
    fn test_default_kept_as_literal_string() {
        let mut node = leaf();
        apply(&mut node, "default=false");
        assert_eq!(node.default, Some("false".to_string()));
        assert_eq!(node.required, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut node = leaf();
        apply(&mut node, "help=some text,short=h");
        assert_eq!(node, leaf());
    }

    #[test]
    fn test_malformed_pairs_ignored() {
        let mut node = leaf();
        apply(&mut node, "required,default=a=b,=,required=true");
        // `required` has no value and `default=a=b` splits into three
        // parts; only the final well-formed pair applies.
        assert_eq!(node.required, Some(true));
        assert_eq!(node.default, None);
    }

    #[test]
    fn test_empty_string_no_effect() {
        let mut node = leaf();
        apply(&mut node, "");
        assert_eq!(node, leaf());
    }
}
