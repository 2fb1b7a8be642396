use crate::node::{block_padding, pluralize, render_block, Node, CHROME_EXTRA, LABEL_SEP};
use crate::options::DumpOptions;
use crate::style::Styler;
use dumptree_types::TypeName;

/// Header shown for a collection whose value was null.
pub const NULL_COLLECTION_NAME: &str = "<unknown null collection>";

/// How a collection populates and renders its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionMode {
    /// Unlabeled children, rendered with an inline `"{index}: "` prefix.
    Sequence,
    /// Children come in `Key{i}` / `Value{i}` labeled pairs per entry.
    Mapping,
}

/// Node for a sequence or key/value mapping.
#[derive(Debug, Clone)]
pub struct CollectionNode {
    label: String,
    /// `None` marks a null collection value.
    type_name: Option<TypeName>,
    mode: CollectionMode,
    children: Vec<Node>,
}

impl CollectionNode {
    pub(crate) fn sequence(
        label: impl Into<String>,
        type_name: TypeName,
        children: Vec<Node>,
    ) -> Self {
        Self {
            label: label.into(),
            type_name: Some(type_name),
            mode: CollectionMode::Sequence,
            children,
        }
    }

    pub(crate) fn mapping(
        label: impl Into<String>,
        type_name: TypeName,
        children: Vec<Node>,
    ) -> Self {
        Self {
            label: label.into(),
            type_name: Some(type_name),
            mode: CollectionMode::Mapping,
            children,
        }
    }

    /// Stand-in for a member whose declared type is a collection but whose
    /// value is null; dumps as one well-formed block instead of failing.
    pub fn null_collection(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            type_name: None,
            mode: CollectionMode::Sequence,
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mode(&self) -> CollectionMode {
        self.mode
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of logical items: elements for sequences, entries for
    /// mappings (each entry contributes a key child and a value child).
    pub fn item_count(&self) -> usize {
        match self.mode {
            CollectionMode::Sequence => self.children.len(),
            CollectionMode::Mapping => self.children.len() / 2,
        }
    }

    fn display_name(&self, options: &DumpOptions) -> String {
        match &self.type_name {
            Some(name) => name.display(options.short_type_names),
            None => NULL_COLLECTION_NAME.to_string(),
        }
    }

    fn header_plain(&self, options: &DumpOptions) -> String {
        let count = self.item_count();
        format!(
            "{} ({} {})",
            self.display_name(options),
            count,
            pluralize(count, "Item", "Items")
        )
    }

    fn header_styled(&self, options: &DumpOptions) -> String {
        let styler = Styler::new(options.color);
        let count = self.item_count();
        format!(
            "{} ({} {})",
            styler.type_name(&self.display_name(options)),
            count,
            pluralize(count, "Item", "Items")
        )
    }

    pub(crate) fn render_at(&self, options: &DumpOptions, depth: usize) -> String {
        if options.depth_exceeded(depth) {
            return String::new();
        }

        if self.children.is_empty() {
            return self.render_empty(options, depth);
        }

        let blocks = match self.mode {
            CollectionMode::Sequence => self.sequence_blocks(options, depth),
            CollectionMode::Mapping => self.mapping_blocks(options, depth),
        };

        render_block(
            &self.label,
            &self.header_plain(options),
            &self.header_styled(options),
            &blocks,
            options,
            depth,
        )
    }

    /// Empty (or null) collection: header plus an immediately-following
    /// closing rule, never a blank body.
    fn render_empty(&self, options: &DumpOptions, depth: usize) -> String {
        let styler = Styler::new(options.color);
        let header_plain = self.header_plain(options);
        let first = if self.label.is_empty() {
            self.header_styled(options)
        } else {
            format!(
                "{}{}{}",
                styler.label(&self.label),
                LABEL_SEP,
                self.header_styled(options)
            )
        };

        if !options.allows_children(depth) {
            return first;
        }
        let pad = block_padding(&self.label, depth);
        let rule = "-".repeat(header_plain.chars().count() + CHROME_EXTRA);
        format!("{}\n{}{}", first, pad, styler.chrome(&rule))
    }

    /// Sequence mode: each element block gets an inline index prefix,
    /// right-aligned to the width of the item count; continuation lines of
    /// multi-line elements are indented past the prefix.
    fn sequence_blocks(&self, options: &DumpOptions, depth: usize) -> Vec<String> {
        let styler = Styler::new(options.color);
        let index_width = self.children.len().to_string().chars().count();
        let continuation = " ".repeat(index_width + 2);

        let mut blocks = Vec::new();
        for (index, child) in self.children.iter().enumerate() {
            let rendered = child.render_at(options, depth + 1);
            if rendered.is_empty() {
                continue;
            }
            let mut block = String::new();
            for (line_no, line) in rendered.lines().enumerate() {
                if line_no == 0 {
                    let index_text = format!("{:>width$}", index, width = index_width);
                    block.push_str(&styler.label(&index_text));
                    block.push_str(": ");
                    block.push_str(line);
                } else {
                    block.push('\n');
                    block.push_str(&continuation);
                    block.push_str(line);
                }
            }
            blocks.push(block);
        }
        blocks
    }

    /// Mapping mode: children are already labeled `Key{i}` / `Value{i}`
    /// (padded at construction); just render and drop silenced ones.
    fn mapping_blocks(&self, options: &DumpOptions, depth: usize) -> Vec<String> {
        self.children
            .iter()
            .map(|child| child.render_at(options, depth + 1))
            .filter(|rendered| !rendered.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::LeafNode;
    use dumptree_types::Value;

    #[test]
    fn test_empty_sequence_renders_header_and_rule_only() {
        let node = CollectionNode::sequence("", TypeName::new("t::Empty"), vec![]);
        let out = node.render_at(&DumpOptions::new(), 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "t::Empty (0 Items)");
        assert_eq!(lines[1], "-".repeat(lines[0].len() + 1));
    }

    #[test]
    fn test_null_collection_header() {
        let node = CollectionNode::null_collection("");
        let out = node.render_at(&DumpOptions::new(), 0);
        assert!(out.starts_with("<unknown null collection> (0 Items)\n"));
    }

    #[test]
    fn test_single_entry_mapping_uses_singular_item() {
        let children = vec![
            Node::Leaf(LeafNode::new("Key0  ", &Value::Int(1))),
            Node::Leaf(LeafNode::new("Value0", &Value::Str("one".into()))),
        ];
        let node = CollectionNode::mapping("", TypeName::new("t::Lookup"), children);
        let out = node.render_at(&DumpOptions::new(), 0);
        assert!(out.starts_with("t::Lookup (1 Item)\n"));
        assert!(out.contains("Key0   = 1"));
        assert!(out.contains("Value0 = \"one\""));
    }

    #[test]
    fn test_sequence_index_prefix_right_aligned() {
        let children: Vec<Node> = (0..10)
            .map(|i| Node::Leaf(LeafNode::new("", &Value::Int(i))))
            .collect();
        let node = CollectionNode::sequence("", TypeName::new("t::Many"), children);
        let out = node.render_at(&DumpOptions::new(), 0);
        // 10 items: index column is two wide.
        assert!(out.contains("\n 0: 0\n"));
        assert!(out.contains("\n 9: 9\n"));
    }

    #[test]
    fn test_labeled_empty_collection() {
        let node = CollectionNode::sequence("Tags", TypeName::new("t::Tags"), vec![]);
        let out = node.render_at(&DumpOptions::new(), 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Tags = t::Tags (0 Items)");
        // Padding covers "Tags = " (7 chars); rule is header length + 1.
        assert_eq!(lines[1], format!("{}{}", " ".repeat(7), "-".repeat(18)));
    }

    #[test]
    fn test_depth_boundary_leaves_bare_header() {
        let children = vec![Node::Leaf(LeafNode::new("", &Value::Int(1)))];
        let node = CollectionNode::sequence("", TypeName::new("t::Seq"), children);
        let options = DumpOptions::new().with_max_depth(1);
        assert_eq!(node.render_at(&options, 1), "t::Seq (1 Item)");
    }
}
