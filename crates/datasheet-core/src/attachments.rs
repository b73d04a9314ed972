//! Attachment checks.
//!
//! `attachments` maps entry names to `{ url, size, ... }` records. Every
//! entry needs a full https URL, and published revisions of the dataset are
//! keyed `revision-1`, `revision-2`, ... with no gaps.

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use url::Url;

use crate::frontmatter::{display_value, KeyLocator};
use crate::issue::Issue;
use crate::schema::{ATTACHMENTS_KEY, REVISION_PREFIX, URL_KEY};

/// Validate the `attachments` block, if the frontmatter has one.
///
/// All diagnostics are reported at the line of the `attachments` key.
pub fn validate_attachments(
    frontmatter: &Mapping,
    locator: &KeyLocator<'_>,
    path: &Path,
) -> Vec<Issue> {
    let Some(attachments) = frontmatter.get(ATTACHMENTS_KEY) else {
        return Vec::new();
    };
    let line = locator.line_of(ATTACHMENTS_KEY);
    let issue = |message: String| Issue::new(path, line, message);

    let Some(attachments) = attachments.as_mapping() else {
        return vec![issue(
            "attachments must be a mapping of attachment entries.".to_string(),
        )];
    };

    let mut issues: Vec<Issue> = attachments
        .iter()
        .filter_map(|(key, entry)| entry_problem(key, entry))
        .map(issue)
        .collect();
    issues.extend(revision_problems(attachments).into_iter().map(issue));
    issues
}

fn entry_problem(key: &Value, entry: &Value) -> Option<String> {
    let Some(entry) = entry.as_mapping() else {
        return Some("Each attachments entry must be a mapping.".to_string());
    };
    let Some(url) = entry.get(URL_KEY) else {
        return Some(format!("Each attachment must include an '{URL_KEY}' field."));
    };
    if url.as_str().is_some_and(is_full_https_url) {
        None
    } else {
        Some(format!(
            "{ATTACHMENTS_KEY}.{}.{URL_KEY} must be a full https URL.",
            display_value(key)
        ))
    }
}

/// An absolute URL with the `https` scheme and a non-empty host.
///
/// The authority must be spelled out as `https://<host>`. `Url::parse`
/// alone would repair forms like `https:example.com` or `https:///host`.
#[must_use]
pub fn is_full_https_url(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("https") || authority.is_empty() {
        return false;
    }
    Url::parse(value).is_ok_and(|url| {
        url.scheme() == "https" && url.host_str().is_some_and(|host| !host.is_empty())
    })
}

/// The `N` of a `revision-N` key.
///
/// Kept as normalized decimal digits so suffixes too large for a machine
/// integer still sort and print as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionNumber(String);

impl RevisionNumber {
    fn parse(suffix: &str) -> Option<Self> {
        let digits = suffix.strip_prefix('+').unwrap_or(suffix);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string()))
    }

    fn equals(&self, n: usize) -> bool {
        self.0 == n.to_string()
    }
}

impl Ord for RevisionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for RevisionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RevisionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number carried by a `revision-N` key, if the suffix is a plain integer.
#[must_use]
pub fn revision_number(key: &str) -> Option<RevisionNumber> {
    RevisionNumber::parse(key.strip_prefix(REVISION_PREFIX)?)
}

fn bracketed<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn revision_problems(attachments: &Mapping) -> Vec<String> {
    let revision_keys: Vec<&str> = attachments
        .keys()
        .filter_map(Value::as_str)
        .filter(|key| key.starts_with(REVISION_PREFIX))
        .collect();

    if revision_keys.is_empty() {
        return vec![
            "Attachments must include at least one revision entry (e.g., revision-1).".to_string(),
        ];
    }

    let mut problems = Vec::new();
    let mut numbers = Vec::with_capacity(revision_keys.len());
    for key in revision_keys {
        match revision_number(key) {
            Some(number) => numbers.push(number),
            None => problems.push(format!(
                "Invalid revision key format: '{key}'. \
                 Expected format: revision-N where N is a number."
            )),
        }
    }

    if numbers.is_empty() {
        return problems;
    }

    numbers.sort_unstable();
    if !numbers[0].equals(1) {
        problems.push("Revisions must start with revision-1.".to_string());
    }
    let consecutive = numbers
        .iter()
        .enumerate()
        .all(|(index, number)| number.equals(index + 1));
    if !consecutive {
        problems.push(format!(
            "Revisions must be consecutive. Found: {}, expected: {}.",
            bracketed(&numbers),
            bracketed(1..=numbers.len())
        ));
    }
    problems
}
