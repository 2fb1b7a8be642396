// Dump engine - classification and depth-limited tree rendering
// This layer sits between the dynamic value model (types) and console output

pub mod classify;
pub mod collection;
pub mod composite;
pub mod leaf;
mod node;
pub mod options;
pub mod style;

pub use classify::classify;
pub use collection::{CollectionMode, CollectionNode, NULL_COLLECTION_NAME};
pub use composite::CompositeNode;
pub use leaf::{LeafNode, NULL_SENTINEL};
pub use node::Node;
pub use options::{DumpOptions, UNLIMITED_DEPTH};
pub use style::Styler;

use dumptree_types::Value;
use std::io;

// Façade API - Stable public interface for callers
// One render call yields one string; writing is left to the sink

/// Render a value with unlimited depth and full type names.
pub fn render_value(value: &Value) -> String {
    render_value_with(value, &DumpOptions::default())
}

/// Render a value with explicit presentation options.
pub fn render_value_with(value: &Value, options: &DumpOptions) -> String {
    classify(value, "").render(options)
}

/// Render a value under a display label (`"label = ..."` at the root).
pub fn render_labeled(value: &Value, label: &str, options: &DumpOptions) -> String {
    classify(value, label).render(options)
}

/// Renders values and hands each finished string to a write sink, one
/// line-terminated block per call.
pub struct Dumper<W: io::Write> {
    sink: W,
    options: DumpOptions,
}

impl<W: io::Write> Dumper<W> {
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, DumpOptions::default())
    }

    pub fn with_options(sink: W, options: DumpOptions) -> Self {
        Self { sink, options }
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    pub fn dump(&mut self, value: &Value) -> io::Result<()> {
        let rendered = render_value_with(value, &self.options);
        writeln!(self.sink, "{}", rendered)
    }
}
