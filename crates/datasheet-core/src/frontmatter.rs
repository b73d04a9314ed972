//! YAML frontmatter extraction.
//!
//! A datasheet starts with a `---` delimited YAML block:
//! ```markdown
//! ---
//! title: Karate Club
//! source: https://example.org/karate
//! network-type:
//!   - hypergraph
//! ---
//!
//! Zachary's karate club network ...
//! ```
//!
//! Extraction never fails hard. Structural problems become [`Issue`]s and
//! the frontmatter is reported as absent so later checks are skipped.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::issue::Issue;

/// Line that opens and closes the frontmatter block.
pub const DELIMITER: &str = "---";

/// Outcome of splitting one document.
#[derive(Debug, Clone)]
pub struct Extraction<'a> {
    /// Parsed frontmatter, `None` when the block is missing, unterminated,
    /// or not valid YAML.
    pub frontmatter: Option<Mapping>,
    /// 0-based index of the closing delimiter line, `0` when no block was found.
    pub end_line: usize,
    pub issues: Vec<Issue>,
    /// Text after the closing delimiter line, or the whole input when no
    /// block was found.
    pub body: &'a str,
}

/// Split `text` into frontmatter and body, parsing the frontmatter as YAML.
pub fn extract<'a>(text: &'a str, path: &Path) -> Extraction<'a> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.first().map(|line| line.trim()) != Some(DELIMITER) {
        return structural_failure(
            text,
            Issue::new(path, 1, "Missing frontmatter block at top of file."),
        );
    }

    let Some(end_line) = lines
        .iter()
        .skip(1)
        .position(|line| line.trim() == DELIMITER)
        .map(|offset| offset + 1)
    else {
        return structural_failure(text, Issue::new(path, 1, "Unterminated frontmatter block."));
    };

    let block = &lines[1..end_line];
    let body = body_after(text, end_line);

    if block.iter().all(|line| is_blank_or_comment(line)) {
        return Extraction {
            frontmatter: Some(Mapping::new()),
            end_line,
            issues: Vec::new(),
            body,
        };
    }

    match serde_yaml::from_str::<Value>(&block.join("\n")) {
        Ok(Value::Mapping(mapping)) => Extraction {
            frontmatter: Some(mapping),
            end_line,
            issues: Vec::new(),
            body,
        },
        // Scalars, sequences, and null documents lint as an empty mapping.
        Ok(_) => Extraction {
            frontmatter: Some(Mapping::new()),
            end_line,
            issues: Vec::new(),
            body,
        },
        Err(e) => {
            // serde_yaml lines are 1-based and relative to the block, which
            // starts on document line 2. End-of-input errors point one past
            // the block; keep them on its last line.
            let line = e
                .location()
                .map_or(2, |loc| (loc.line() + 1).min(end_line).max(2));
            Extraction {
                frontmatter: None,
                end_line,
                issues: vec![Issue::new(path, line, format!("Invalid YAML: {e}"))],
                body,
            }
        }
    }
}

fn structural_failure(text: &str, issue: Issue) -> Extraction<'_> {
    Extraction {
        frontmatter: None,
        end_line: 0,
        issues: vec![issue],
        body: text,
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Slice of `text` starting after the line at 0-based index `line`.
fn body_after(text: &str, line: usize) -> &str {
    let offset: usize = text
        .split_inclusive('\n')
        .take(line + 1)
        .map(str::len)
        .sum();
    &text[offset..]
}

/// Resolves the approximate source line of a top-level frontmatter key.
///
/// Only the lines inside the frontmatter block are searched. The first line
/// whose trimmed text starts with `<key>:` wins, so keys nested deeper in the
/// block can shadow a later top-level key of the same name.
#[derive(Debug, Clone)]
pub struct KeyLocator<'a> {
    lines: Vec<&'a str>,
    end_line: usize,
}

impl<'a> KeyLocator<'a> {
    #[must_use]
    pub fn new(text: &'a str, end_line: usize) -> Self {
        Self {
            lines: text.lines().collect(),
            end_line,
        }
    }

    /// 1-based line of `key`, or line 2 when it cannot be found.
    #[must_use]
    pub fn line_of(&self, key: &str) -> usize {
        let end = self.end_line.min(self.lines.len());
        let needle = format!("{key}:");
        self.lines
            .get(1..end)
            .unwrap_or_default()
            .iter()
            .position(|line| line.trim().starts_with(&needle))
            .map_or(2, |index| index + 2)
    }
}

/// Render a YAML value the way it reads in a diagnostic.
///
/// Strings are shown without quotes; collections fall back to flow-style
/// JSON where possible.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Tagged(tagged) => display_value(&tagged.value),
        other => serde_json::to_string(other).unwrap_or_else(|_| {
            serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_default()
        }),
    }
}
