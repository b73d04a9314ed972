//! The datasheet frontmatter schema.
//!
//! These tables are fixed for the lifetime of the process. Keys that do not
//! appear in [`FIELD_ORDER`] are allowed anywhere and never required.

/// Keys every datasheet must declare.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "source", "network-type"];

/// Canonical order of known frontmatter keys.
pub const FIELD_ORDER: [&str; 13] = [
    "title",
    "disable",
    "source",
    "license",
    "citation",
    "network-type",
    "tags",
    "related",
    "attachments",
    "statistics",
    "label-count",
    "edge-label-count",
    "shape",
];

/// Allowed `network-type` values, in the order they must be listed.
pub const NETWORK_TYPE_ORDER: [&str; 4] = [
    "simplicial-complex",
    "cell-complex",
    "combinatorial-complex",
    "hypergraph",
];

pub const NETWORK_TYPE_KEY: &str = "network-type";
pub const ATTACHMENTS_KEY: &str = "attachments";
pub const URL_KEY: &str = "url";
pub const REVISION_PREFIX: &str = "revision-";

/// Position of `key` in [`FIELD_ORDER`], if it is a known key.
#[must_use]
pub fn field_rank(key: &str) -> Option<usize> {
    FIELD_ORDER.iter().position(|known| *known == key)
}

/// Position of `value` in [`NETWORK_TYPE_ORDER`], if it is an allowed value.
#[must_use]
pub fn network_type_rank(value: &str) -> Option<usize> {
    NETWORK_TYPE_ORDER.iter().position(|known| *known == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_are_all_ordered() {
        for key in REQUIRED_FIELDS {
            assert!(field_rank(key).is_some(), "{key} missing from FIELD_ORDER");
        }
    }

    #[test]
    fn unknown_keys_have_no_rank() {
        assert_eq!(field_rank("title"), Some(0));
        assert_eq!(field_rank("shape"), Some(12));
        assert_eq!(field_rank("Title"), None);
        assert_eq!(network_type_rank("hypergraph"), Some(3));
        assert_eq!(network_type_rank("graph"), None);
    }
}
