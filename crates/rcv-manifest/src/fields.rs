//! # Field Validators
//!
//! Atomic checks for single values: string-with-minimum-length, the
//! issued/modified date pair, the version/source-version pairing and
//! relation strings. Each reports at most what it found and returns
//! enough for callers to skip checks that depend on a malformed value.

use chrono::NaiveDate;
use rcv_core::{IssueKind, ProjectType};
use serde_yaml::{Mapping, Value};

use crate::context::ValidationContext;

/// Language code of the original-language Greek corpus.
pub const ORIGINAL_GREEK_LANGUAGE: &str = "el-x-koine";

/// Project-code prefixes of the original-language texts (Greek New
/// Testament, Hebrew Bible). Relations may point at these with a version
/// query, e.g. `ugnt?v=0.2`.
pub const ORIGINAL_TEXT_PREFIXES: &[&str] = &["ugnt", "uhb"];

/// Render a YAML value for an issue message.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().replace('\n', " "))
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// Read an integer that may have been written as a string.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Null, the empty string and the empty list are all blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Check that `map[key]`, if present, is a string of at least
/// `min_len` characters. Returns `false` only when the value is present
/// and malformed.
pub fn check_string_field(
    ctx: &mut ValidationContext,
    group: &str,
    map: &Mapping,
    key: &str,
    min_len: usize,
) -> bool {
    let Some(value) = map.get(key) else {
        return true;
    };
    let field = format!("{group}:{key}");
    match value.as_str() {
        None => {
            ctx.error(
                IssueKind::WrongType,
                field,
                format!("Value must be a string: {key}: {}", describe(value)),
            );
            false
        }
        Some(s) if s.chars().count() < min_len => {
            ctx.error(
                IssueKind::InvalidValue,
                field,
                format!("Invalid value for {key}: {s}"),
            );
            false
        }
        Some(_) => true,
    }
}

/// Check the issued/modified pair: `modified` must be today and
/// `issued` must not be later than `modified`. A malformed date is
/// reported and the comparisons that need it are skipped.
pub fn check_dates(ctx: &mut ValidationContext, issued: &str, modified: &str) {
    let issued_date = parse_date(issued);
    if issued_date.is_none() {
        ctx.error(
            IssueKind::InvalidDate,
            "dublin_core:issued",
            format!("Invalid date format for issued (expected YYYY-MM-DD): {issued}"),
        );
    }
    let Some(modified_date) = parse_date(modified) else {
        ctx.error(
            IssueKind::InvalidDate,
            "dublin_core:modified",
            format!("Invalid date format for modified (expected YYYY-MM-DD): {modified}"),
        );
        return;
    };
    if modified_date != ctx.today() {
        ctx.error(
            IssueKind::InvalidDate,
            "dublin_core:modified",
            format!("Wrong date - modified: {modified}"),
        );
    }
    if let Some(issued_date) = issued_date {
        if issued_date > modified_date {
            ctx.error(
                IssueKind::InvalidDate,
                "dublin_core:issued",
                format!("Dates wrong - issued: {issued}, modified: {modified}"),
            );
        }
    }
}

/// Check the manifest version against the source version.
///
/// Below 100 the version must be `<source>.<minor>` with an integer minor
/// of at least 1. From 100 on the minor suffix is frozen: the version
/// must be exactly the source version.
pub fn check_version(ctx: &mut ValidationContext, version: &str, source_version: &str) {
    let Ok(source_number) = source_version.trim().parse::<u64>() else {
        ctx.error(
            IssueKind::InvalidVersion,
            "dublin_core:source[0]:version",
            format!("Source version is not a whole number: {source_version}"),
        );
        return;
    };
    let valid = if source_number < 100 {
        match version.rsplit_once('.') {
            Some((major, minor)) => {
                major == source_version && minor.parse::<u64>().is_ok_and(|m| m >= 1)
            }
            None => false,
        }
    } else {
        version == source_version
    };
    if !valid {
        ctx.error(
            IssueKind::InvalidVersion,
            "dublin_core:version",
            format!("Invalid version: {version}; Source version is {source_version}"),
        );
    }
}

/// Check one relation element of the form `LANGUAGE/PROJECT`.
///
/// Returns the `(language, project)` pair when the element has that shape,
/// whether or not its parts are acceptable.
pub fn check_relation<'v>(
    ctx: &mut ValidationContext,
    relation: &'v Value,
) -> Option<(&'v str, &'v str)> {
    const FIELD: &str = "dublin_core:relation";
    let Some(rel) = relation.as_str() else {
        ctx.error(
            IssueKind::WrongType,
            FIELD,
            format!("Relation element is not a string: {}", describe(relation)),
        );
        return None;
    };
    if rel.chars().count() < 5 {
        ctx.error(
            IssueKind::InvalidRelation,
            FIELD,
            format!("Invalid value for relation element: {rel}"),
        );
        return None;
    }
    let parts: Vec<&str> = rel.split('/').collect();
    let [language, project] = parts[..] else {
        ctx.error(
            IssueKind::InvalidRelation,
            FIELD,
            format!("Invalid format for relation element: {rel}"),
        );
        return None;
    };

    if language != ctx.language_id() && language != ORIGINAL_GREEK_LANGUAGE {
        ctx.error(
            IssueKind::InvalidRelation,
            FIELD,
            format!("Incorrect language code for relation element: {rel}"),
        );
    }
    let known = ProjectType::from_identifier(project).is_some()
        || ORIGINAL_TEXT_PREFIXES.iter().any(|p| project.starts_with(p));
    if !known {
        ctx.error(
            IssueKind::InvalidRelation,
            FIELD,
            format!("Invalid project code in relation element: {rel}"),
        );
    }
    // a tn-tsv container is still identified as `tn`
    let is_self = ctx.project_type().is_some_and(|pt| {
        pt.as_str() == project || (pt == ProjectType::TnTsv && project == ProjectType::Tn.as_str())
    });
    if is_self {
        ctx.error(
            IssueKind::InvalidRelation,
            FIELD,
            format!("Project code in relation element is same as current project: {rel}"),
        );
    }
    Some((language, project))
}
