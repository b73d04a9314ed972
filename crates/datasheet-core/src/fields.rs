//! Top-level field checks: required keys, canonical key order, and the
//! `network-type` vocabulary.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::frontmatter::{display_value, KeyLocator};
use crate::issue::Issue;
use crate::schema::{
    field_rank, network_type_rank, NETWORK_TYPE_KEY, NETWORK_TYPE_ORDER, REQUIRED_FIELDS,
};

/// Run every field check against a parsed frontmatter mapping.
///
/// Checks are independent; a single datasheet can produce many issues.
pub fn validate_fields(
    frontmatter: &Mapping,
    locator: &KeyLocator<'_>,
    path: &Path,
) -> Vec<Issue> {
    let mut issues = missing_required(frontmatter, path);
    issues.extend(key_order(frontmatter, locator, path));
    if let Some(value) = frontmatter.get(NETWORK_TYPE_KEY) {
        issues.extend(network_types(value, locator, path));
    }
    issues
}

fn missing_required(frontmatter: &Mapping, path: &Path) -> Vec<Issue> {
    REQUIRED_FIELDS
        .iter()
        .filter(|key| !frontmatter.contains_key(**key))
        .map(|key| Issue::new(path, 1, format!("Missing required key '{key}'.")))
        .collect()
}

/// Greedy single-pass order check.
///
/// Only the last key that was in order is remembered, so a scrambled block is
/// flagged where each regression happens rather than realigned globally.
/// Keys outside the schema are skipped.
fn key_order(frontmatter: &Mapping, locator: &KeyLocator<'_>, path: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut last: Option<(usize, &str)> = None;

    for key in frontmatter.keys().filter_map(Value::as_str) {
        let Some(rank) = field_rank(key) else {
            continue;
        };
        match last {
            Some((last_rank, last_key)) if rank < last_rank => {
                issues.push(Issue::new(
                    path,
                    locator.line_of(key),
                    format!("Key '{key}' is out of order; expected before '{last_key}'."),
                ));
            }
            _ => last = Some((rank, key)),
        }
    }
    issues
}

fn network_types(value: &Value, locator: &KeyLocator<'_>, path: &Path) -> Vec<Issue> {
    let line = locator.line_of(NETWORK_TYPE_KEY);
    let issue = |message: String| Issue::new(path, line, message);

    let Some(values) = value.as_sequence() else {
        return vec![issue(format!("Key '{NETWORK_TYPE_KEY}' must be a list of values."))];
    };
    if values.is_empty() {
        return vec![issue(format!("Key '{NETWORK_TYPE_KEY}' must list at least one value."))];
    }

    let mut issues = Vec::new();
    let mut last: Option<(usize, &str)> = None;
    for value in values {
        let Some((rank, name)) = value
            .as_str()
            .and_then(|name| network_type_rank(name).map(|rank| (rank, name)))
        else {
            issues.push(issue(format!(
                "Invalid network-type '{}'. Allowed values: {}.",
                display_value(value),
                NETWORK_TYPE_ORDER.join(", ")
            )));
            continue;
        };
        match last {
            Some((last_rank, last_name)) if rank < last_rank => {
                issues.push(issue(format!(
                    "Network-type values must follow the predefined order; \
                     '{name}' should appear after '{last_name}'."
                )));
            }
            _ => last = Some((rank, name)),
        }
    }
    issues
}
