//! Per-file and batch linting.
//!
//! Each datasheet is linted in isolation: extraction first, then the field
//! and attachment validators when a mapping was extracted. Files share no
//! state, so batches are linted in parallel and concatenated in input order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::attachments::validate_attachments;
use crate::error::{LintError, Result};
use crate::fields::validate_fields;
use crate::frontmatter::{extract, KeyLocator};
use crate::issue::Issue;

/// File extension of datasheet pages.
pub const DATASHEET_EXTENSION: &str = "mdx";

/// Lint one document's text. `path` is only used to label issues.
#[must_use]
pub fn lint_text(path: &Path, text: &str) -> Vec<Issue> {
    let extraction = extract(text, path);
    let mut issues = extraction.issues;

    let Some(frontmatter) = extraction.frontmatter else {
        return issues;
    };

    let locator = KeyLocator::new(text, extraction.end_line);
    issues.extend(validate_fields(&frontmatter, &locator, path));
    issues.extend(validate_attachments(&frontmatter, &locator, path));
    issues
}

/// Read and lint one datasheet.
///
/// # Errors
///
/// Returns [`LintError::Io`] if the file cannot be read as UTF-8 text.
pub fn lint_file(path: &Path) -> Result<Vec<Issue>> {
    let text = std::fs::read_to_string(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let issues = lint_text(path, &text);
    debug!(path = %path.display(), issues = issues.len(), "linted datasheet");
    Ok(issues)
}

/// Lint many datasheets, concatenating their issues in input order.
///
/// # Errors
///
/// Returns the [`LintError`] of the first unreadable file in input order.
pub fn lint_files<P>(paths: &[P]) -> Result<Vec<Issue>>
where
    P: AsRef<Path> + Sync,
{
    let results: Vec<Result<Vec<Issue>>> = paths
        .par_iter()
        .map(|path| lint_file(path.as_ref()))
        .collect();
    let per_file = results.into_iter().collect::<Result<Vec<_>>>()?;

    let issues: Vec<Issue> = per_file.into_iter().flatten().collect();
    info!(files = paths.len(), issues = issues.len(), "lint finished");
    Ok(issues)
}

/// Find every datasheet below `root`, sorted by path.
///
/// # Errors
///
/// Returns [`LintError::Pattern`] if the search pattern is rejected, or
/// [`LintError::Glob`] if a directory cannot be read.
pub fn discover_datasheets(root: &Path) -> Result<Vec<PathBuf>> {
    // Escape the root so directory names like `data[1]` match literally.
    let root = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{root}/**/*.{DATASHEET_EXTENSION}");
    debug!(%pattern, "discovering datasheets");

    let mut paths = glob::glob(&pattern)?
        .collect::<std::result::Result<Vec<_>, glob::GlobError>>()?;
    paths.retain(|path| path.is_file());
    paths.sort();
    Ok(paths)
}
