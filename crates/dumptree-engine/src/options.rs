/// `max_depth` value meaning "render everything".
pub const UNLIMITED_DEPTH: usize = 0;

/// Presentation configuration threaded through a render pass.
///
/// Rendering is a pure function of (node, options); there is no ambient
/// global state to flip mid-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Deepest level to render; `UNLIMITED_DEPTH` (0) disables the limit.
    pub max_depth: usize,
    /// Show `Widget` instead of `demo::catalog::Widget` in headers.
    pub short_type_names: bool,
    /// Emit ANSI colors.
    pub color: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            max_depth: UNLIMITED_DEPTH,
            short_type_names: false,
            color: false,
        }
    }
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_short_type_names(mut self, short: bool) -> Self {
        self.short_type_names = short;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// True when nothing at `depth` should be rendered at all.
    pub(crate) fn depth_exceeded(&self, depth: usize) -> bool {
        self.max_depth != UNLIMITED_DEPTH && depth > self.max_depth
    }

    /// True when a node at `depth` may render its child block.
    pub(crate) fn allows_children(&self, depth: usize) -> bool {
        self.max_depth == UNLIMITED_DEPTH || depth < self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_never_truncates() {
        let opts = DumpOptions::new();
        assert!(!opts.depth_exceeded(0));
        assert!(!opts.depth_exceeded(100));
        assert!(opts.allows_children(100));
    }

    #[test]
    fn test_limited_depth_cuts_below_max() {
        let opts = DumpOptions::new().with_max_depth(1);
        assert!(!opts.depth_exceeded(1));
        assert!(opts.depth_exceeded(2));
        assert!(opts.allows_children(0));
        assert!(!opts.allows_children(1));
    }
}
