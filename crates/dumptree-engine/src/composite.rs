use crate::node::{pluralize, render_block, Node};
use crate::options::DumpOptions;
use crate::style::Styler;
use dumptree_types::TypeName;

/// Node for an object with named members.
///
/// Children are the object's instance members followed by its static
/// members, each labeled with the member name padded to the widest name
/// in the group so sibling `label = value` lines align.
#[derive(Debug, Clone)]
pub struct CompositeNode {
    label: String,
    type_name: TypeName,
    children: Vec<Node>,
}

impl CompositeNode {
    pub(crate) fn new(label: impl Into<String>, type_name: TypeName, children: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            type_name,
            children,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn header_plain(&self, options: &DumpOptions) -> String {
        let count = self.children.len();
        format!(
            "{} ({} {})",
            self.type_name.display(options.short_type_names),
            count,
            pluralize(count, "Property", "Properties")
        )
    }

    fn header_styled(&self, options: &DumpOptions) -> String {
        let styler = Styler::new(options.color);
        let count = self.children.len();
        format!(
            "{} ({} {})",
            styler.type_name(&self.type_name.display(options.short_type_names)),
            count,
            pluralize(count, "Property", "Properties")
        )
    }

    pub(crate) fn render_at(&self, options: &DumpOptions, depth: usize) -> String {
        if options.depth_exceeded(depth) {
            return String::new();
        }

        // Children fully silenced by the depth limit contribute nothing,
        // not even a blank line.
        let blocks: Vec<String> = self
            .children
            .iter()
            .map(|child| child.render_at(options, depth + 1))
            .filter(|rendered| !rendered.is_empty())
            .collect();

        render_block(
            &self.label,
            &self.header_plain(options),
            &self.header_styled(options),
            &blocks,
            options,
            depth,
        )
    }
}
