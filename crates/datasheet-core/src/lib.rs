//! # datasheet-core
//!
//! Frontmatter linting for dataset datasheets.
//!
//! A datasheet is an `.mdx` page whose YAML frontmatter describes one
//! network dataset. This crate checks that frontmatter against a fixed
//! schema:
//! - [`frontmatter`] — splitting the `---` delimited block from the body
//! - [`fields`] — required keys, canonical key order, `network-type` values
//! - [`attachments`] — attachment URLs and the `revision-N` chain
//! - [`report`] — sorting and rendering [`Issue`]s
//! - [`lint`] — per-file and batch entry points
//! - Error hierarchy ([`LintError`])

pub mod attachments;
pub mod datasheet;
pub mod error;
pub mod fields;
pub mod frontmatter;
pub mod issue;
pub mod lint;
pub mod report;
pub mod schema;

pub use datasheet::Datasheet;
pub use error::{LintError, Result};
pub use issue::Issue;
pub use lint::{discover_datasheets, lint_file, lint_files, lint_text};
pub use report::{render_issues, ReportFormat};
