use serde::{Deserialize, Serialize};

/// Spaces added per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Rendering settings, passed explicitly to [`crate::Printer::with_config`].
///
/// Deserializable so a host application can embed it in its own
/// configuration; missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Spaces per nesting level. Canonical output uses 2.
    pub indent: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}
