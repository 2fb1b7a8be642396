use crate::collection::CollectionNode;
use crate::composite::CompositeNode;
use crate::leaf::LeafNode;
use crate::options::DumpOptions;
use crate::style::Styler;

/// Separator between a label and its value or header.
pub(crate) const LABEL_SEP: &str = " = ";

/// Extra dashes past the header length in a chrome rule.
pub(crate) const CHROME_EXTRA: usize = 1;

/// Indent per nesting level for unlabeled blocks.
pub(crate) const INDENT_PER_DEPTH: usize = 2;

/// One unit of the materialized dump tree.
///
/// The tree is built once by the classifier and is immutable afterwards;
/// rendering never mutates a node, so repeated renders with the same
/// options are byte-identical.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf(LeafNode),
    Composite(CompositeNode),
    Collection(CollectionNode),
}

impl Node {
    pub fn label(&self) -> &str {
        match self {
            Node::Leaf(n) => n.label(),
            Node::Composite(n) => n.label(),
            Node::Collection(n) => n.label(),
        }
    }

    /// Renders this node as the root of the output.
    pub fn render(&self, options: &DumpOptions) -> String {
        self.render_at(options, 0)
    }

    pub(crate) fn render_at(&self, options: &DumpOptions, depth: usize) -> String {
        match self {
            Node::Leaf(n) => n.render_at(options, depth),
            Node::Composite(n) => n.render_at(options, depth),
            Node::Collection(n) => n.render_at(options, depth),
        }
    }
}

pub(crate) fn pluralize(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Left padding applied to every line after the first of a block: under
/// the `"label = "` prefix when the block is labeled, proportional to the
/// nesting depth otherwise.
pub(crate) fn block_padding(label: &str, depth: usize) -> String {
    if label.is_empty() {
        " ".repeat(depth * INDENT_PER_DEPTH)
    } else {
        " ".repeat(label.chars().count() + LABEL_SEP.len())
    }
}

/// Assembles a header plus an optionally chromed child block.
///
/// `child_blocks` holds the already-rendered (possibly multi-line) output
/// of each child; empty renders must be filtered out by the caller. Every
/// line of every block is re-indented under the header in a single pass
/// over physical lines.
pub(crate) fn render_block(
    label: &str,
    header_plain: &str,
    header_styled: &str,
    child_blocks: &[String],
    options: &DumpOptions,
    depth: usize,
) -> String {
    let styler = Styler::new(options.color);
    let pad = block_padding(label, depth);

    let mut lines: Vec<String> = Vec::new();
    if label.is_empty() {
        lines.push(header_styled.to_string());
    } else {
        lines.push(format!(
            "{}{}{}",
            styler.label(label),
            LABEL_SEP,
            header_styled
        ));
    }

    if !child_blocks.is_empty() && options.allows_children(depth) {
        let rule = "-".repeat(header_plain.chars().count() + CHROME_EXTRA);
        lines.push(format!("{}{}", pad, styler.chrome(&rule)));
        for block in child_blocks {
            for line in block.lines() {
                lines.push(format!("{}{}", pad, line));
            }
        }
        lines.push(format!("{}{}", pad, styler.chrome(&rule)));
    }

    lines.join("\n")
}

/// Pads a set of member names to a common column width so the `=` signs
/// of sibling lines align. Decided once at construction time.
pub(crate) fn pad_labels(names: &[String]) -> Vec<String> {
    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    names
        .iter()
        .map(|n| format!("{:<width$}", n, width = width))
        .collect()
}
