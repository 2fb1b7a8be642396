use std::fmt;

/// Display name of a runtime type, carried by composite and collection
/// values so rendered headers can show where a value came from.
///
/// Stores the fully-qualified form; `short()` derives the compact form on
/// demand by stripping module paths, including inside generic arguments
/// (`Vec<Value>` rather than `alloc::vec::Vec<dumptree_types::value::Value>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    full: String,
}

impl TypeName {
    pub fn new(full: impl Into<String>) -> Self {
        Self { full: full.into() }
    }

    /// Type name of `T` as reported by the compiler.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    /// Short form with every `path::to::` prefix removed, also within
    /// generic argument lists.
    pub fn short(&self) -> String {
        let mut out = String::with_capacity(self.full.len());
        let mut segment = String::new();
        let mut chars = self.full.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                ':' if chars.peek() == Some(&':') => {
                    chars.next();
                    segment.clear();
                }
                '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                    out.push_str(&segment);
                    segment.clear();
                    out.push(c);
                }
                _ => segment.push(c),
            }
        }
        out.push_str(&segment);
        out
    }

    /// Picks the full or short form per the caller's verbosity choice.
    pub fn display(&self, short: bool) -> String {
        if short {
            self.short()
        } else {
            self.full.clone()
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
