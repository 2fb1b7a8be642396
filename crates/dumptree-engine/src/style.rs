use owo_colors::OwoColorize;

/// Maps rendering categories to terminal colors, degrading to plain
/// passthrough when color is disabled.
///
/// Layout widths are always computed on plain text first; the styler is
/// applied to finished segments so ANSI escapes never affect alignment.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Property/key name style.
    pub fn label(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.cyan())
        } else {
            text.to_string()
        }
    }

    /// Property/element value style.
    pub fn value(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.green())
        } else {
            text.to_string()
        }
    }

    /// Type name in block headers.
    pub fn type_name(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.yellow())
        } else {
            text.to_string()
        }
    }

    /// Border rules framing a child block.
    pub fn chrome(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.bright_black())
        } else {
            text.to_string()
        }
    }
}
