//! # Schema Checker
//!
//! Verifies that a mapping carries exactly an expected key set. Missing
//! keys are reported first, in the caller's order, then extra keys in the
//! mapping's own order. Nothing here aborts; callers keep checking the
//! fields that are present.

use rcv_core::IssueKind;
use serde_yaml::Mapping;

use crate::context::ValidationContext;
use crate::fields::describe;

/// Expected top-level manifest keys.
pub const MANIFEST_KEYS: &[&str] = &["dublin_core", "checking", "projects"];

/// Expected `dublin_core` keys.
pub const CORE_KEYS: &[&str] = &[
    "conformsto",
    "contributor",
    "creator",
    "description",
    "format",
    "identifier",
    "issued",
    "modified",
    "language",
    "publisher",
    "relation",
    "rights",
    "source",
    "subject",
    "title",
    "type",
    "version",
];

/// Expected `dublin_core.language` keys.
pub const LANGUAGE_KEYS: &[&str] = &["direction", "identifier", "title"];

/// Expected keys of each `dublin_core.source` entry.
pub const SOURCE_KEYS: &[&str] = &["language", "identifier", "version"];

/// Expected `checking` keys.
pub const CHECKING_KEYS: &[&str] = &["checking_entity", "checking_level"];

/// Expected keys of each `projects` entry.
pub const PROJECT_KEYS: &[&str] = &[
    "title",
    "versification",
    "identifier",
    "sort",
    "path",
    "categories",
];

/// Report every missing and every unexpected key of `map`.
pub fn check_keys(ctx: &mut ValidationContext, group: &str, map: &Mapping, expected: &[&str]) {
    for key in expected {
        if !map.contains_key(*key) {
            ctx.error(
                IssueKind::MissingField,
                format!("{group}:{key}"),
                format!("Missing field: {group}:{key}"),
            );
        }
    }
    for key in map.keys() {
        let name = key.as_str().map_or_else(|| describe(key), str::to_string);
        if !expected.contains(&name.as_str()) {
            ctx.error(
                IssueKind::ExtraField,
                format!("{group}:{name}"),
                format!("Extra field: {group}:{name}"),
            );
        }
    }
}
