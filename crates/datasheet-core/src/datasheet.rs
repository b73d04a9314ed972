//! Datasheet type — a frontmatter mapping plus its markdown body.
//!
//! Unlike the linter, this view is lenient: a page without a usable
//! frontmatter block is an empty mapping over the whole text. It is what
//! tooling uses to patch frontmatter (e.g. statistics) without touching the
//! prose below it.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{LintError, Result};
use crate::frontmatter::{extract, DELIMITER};

/// A datasheet page split into its frontmatter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasheet {
    pub frontmatter: Mapping,
    /// Everything after the closing delimiter, verbatim.
    pub body: String,
}

impl Datasheet {
    /// Split a page. Never fails; see the module docs.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let extraction = extract(text, Path::new(""));
        match extraction.frontmatter {
            Some(frontmatter) => Self {
                frontmatter,
                body: extraction.body.to_string(),
            },
            None => Self {
                frontmatter: Mapping::new(),
                body: text.to_string(),
            },
        }
    }

    /// Merge `update` into the frontmatter.
    ///
    /// Existing keys keep their position and take the new value; new keys
    /// are appended in `update` order.
    pub fn update_frontmatter(&mut self, update: Mapping) {
        for (key, value) in update {
            self.frontmatter.insert(key, value);
        }
    }

    /// Look up a top-level frontmatter value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.frontmatter.get(key)
    }

    /// Render back to a page with a YAML frontmatter block.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Serialization`] if the frontmatter cannot be
    /// serialized.
    pub fn to_markdown(&self) -> Result<String> {
        let yaml = if self.frontmatter.is_empty() {
            String::new()
        } else {
            serde_yaml::to_string(&self.frontmatter)
                .map_err(|e| LintError::Serialization(e.to_string()))?
        };

        let mut output = String::with_capacity(yaml.len() + self.body.len() + 8);
        output.push_str(DELIMITER);
        output.push('\n');
        output.push_str(&yaml);
        output.push_str(DELIMITER);
        output.push('\n');
        output.push_str(&self.body);
        Ok(output)
    }
}
