use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence of comment lines.
///
/// Each line is rendered on its own with a `// ` prefix. Lines are stored
/// without the marker and without trailing line breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(Vec<String>);

impl Comment {
    /// Creates an empty comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.0.push(line.into());
        self
    }

    /// Returns the lines as a slice.
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

/// Splits on line breaks; an empty string gives an empty comment.
impl From<&str> for Comment {
    fn from(s: &str) -> Self {
        Self(s.lines().map(str::to_string).collect())
    }
}

impl From<String> for Comment {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<String>> for Comment {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl<S: Into<String>> FromIterator<S> for Comment {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
