use crate::node::LABEL_SEP;
use crate::options::DumpOptions;
use crate::style::Styler;
use dumptree_types::Value;

/// Rendering of an absent value; never the empty string, so absence stays
/// distinguishable from empty content.
pub const NULL_SENTINEL: &str = "<null>";

/// Terminal node: a label/value pair with no children.
///
/// The rendered value form is decided once at construction (quoting,
/// null sentinel), so repeated renders are stable.
#[derive(Debug, Clone)]
pub struct LeafNode {
    label: String,
    value: String,
}

impl LeafNode {
    pub fn new(label: impl Into<String>, value: &Value) -> Self {
        Self {
            label: label.into(),
            value: format_value(value),
        }
    }

    /// Leaf standing in for a value that could not be introspected.
    pub fn diagnostic(
        label: impl Into<String>,
        error_type: &str,
        message: &str,
    ) -> Self {
        Self {
            label: label.into(),
            value: format!("<{}: {}>", error_type, message),
        }
    }

    /// Leaf standing in for a branch cut off by cycle detection.
    pub fn cycle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: "<cycle detected>".to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rendered_value(&self) -> &str {
        &self.value
    }

    pub(crate) fn render_at(&self, options: &DumpOptions, depth: usize) -> String {
        if options.depth_exceeded(depth) {
            return String::new();
        }
        let styler = Styler::new(options.color);
        if self.label.is_empty() {
            styler.value(&self.value)
        } else {
            format!(
                "{}{}{}",
                styler.label(&self.label),
                LABEL_SEP,
                styler.value(&self.value)
            )
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NULL_SENTINEL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::UInt(u) => u.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Char(c) => c.to_string(),
        Value::Str(s) => format!("\"{}\"", s),
        // Non-scalar values never reach a leaf through classification;
        // fall back to the type name for direct construction.
        other => format!("<{}>", other.type_name().short()),
    }
}
