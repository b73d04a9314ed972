//! Positioned lint diagnostics.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A frontmatter problem found in one datasheet.
///
/// `line` is 1-based and best-effort: keys nested inside lists or mappings
/// are reported at the line of their top-level key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: PathBuf,
    pub line: usize,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Report ordering: path as displayed text, then line, then message.
    #[must_use]
    pub fn report_cmp(&self, other: &Self) -> Ordering {
        self.path
            .to_string_lossy()
            .cmp(&other.path.to_string_lossy())
            .then(self.line.cmp(&other.line))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.message)
    }
}
