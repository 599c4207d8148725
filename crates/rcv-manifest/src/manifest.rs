//! # Manifest Verification
//!
//! Walks a parsed manifest top to bottom: top-level keys, `dublin_core`,
//! `checking`, then `projects`. The project type is resolved from
//! `dublin_core.identifier` (and `format`, for the `tn` → `tn-tsv`
//! promotion) before any rule that depends on it runs.
//!
//! A section that is missing or has the wrong shape is reported once and
//! its dependent checks are skipped; the other sections are still checked.

use rcv_core::IssueKind;
use serde_yaml::{Mapping, Value};

use crate::context::ValidationContext;
use crate::fields::{
    check_dates, check_relation, check_string_field, check_version, describe,
    ORIGINAL_GREEK_LANGUAGE,
};
use crate::projects::verify_projects;
use crate::rules::{resolve_project_type, rules_for};
use crate::schema::{
    check_keys, CHECKING_KEYS, CORE_KEYS, LANGUAGE_KEYS, MANIFEST_KEYS, SOURCE_KEYS,
};

const CORE: &str = "dublin_core";

/// Verify a parsed manifest document.
pub fn verify_manifest(ctx: &mut ValidationContext, manifest: &Value) {
    let Some(root) = manifest.as_mapping() else {
        ctx.fatal(
            IssueKind::WrongType,
            "manifest",
            "Top level of the manifest must be a mapping",
        );
        return;
    };
    check_keys(ctx, "manifest", root, MANIFEST_KEYS);

    if let Some(core) = section(ctx, root, CORE) {
        verify_core(ctx, core);
    }
    if let Some(checking) = section(ctx, root, "checking") {
        verify_checking(ctx, checking);
    }
    if let Some(projects) = root.get("projects") {
        verify_projects(ctx, projects);
    }
}

/// A mapping-valued key; reports a wrong type, stays silent when absent.
fn section<'m>(
    ctx: &mut ValidationContext,
    parent: &'m Mapping,
    key: &str,
) -> Option<&'m Mapping> {
    let value = parent.get(key)?;
    let mapping = value.as_mapping();
    if mapping.is_none() {
        ctx.error(
            IssueKind::WrongType,
            key,
            format!("{key} must be a mapping, found: {}", describe(value)),
        );
    }
    mapping
}

/// A sequence-valued key; reports a wrong type, stays silent when absent.
fn sequence<'m>(
    ctx: &mut ValidationContext,
    parent: &'m Mapping,
    key: &str,
    field: &str,
) -> Option<&'m Vec<Value>> {
    let value = parent.get(key)?;
    let seq = value.as_sequence();
    if seq.is_none() && !value.is_null() {
        ctx.error(
            IssueKind::WrongType,
            field,
            format!("{field} must be a list, found: {}", describe(value)),
        );
    }
    seq
}

fn str_of<'m>(map: &'m Mapping, key: &str) -> Option<&'m str> {
    map.get(key).and_then(Value::as_str)
}

/// Verify `dublin_core`.
pub fn verify_core(ctx: &mut ValidationContext, core: &Mapping) {
    check_keys(ctx, CORE, core, CORE_KEYS);

    verify_identifier(ctx, core);
    if let Some(conformsto) = core.get("conformsto") {
        if conformsto.as_str() != Some("rc0.2") {
            ctx.error(
                IssueKind::InvalidValue,
                "dublin_core:conformsto",
                format!("Invalid value for conformsto: {}", describe(conformsto)),
            );
        }
    }
    verify_contributors(ctx, core);
    check_string_field(ctx, CORE, core, "creator", 3);
    verify_dates(ctx, core);
    verify_format(ctx, core);
    if let Some(language) = section(ctx, core, "language") {
        verify_language(ctx, language);
    }
    verify_publisher(ctx, core);
    verify_relations(ctx, core);
    if let Some(rights) = core.get("rights") {
        if rights.as_str() != Some("CC BY-SA 4.0") {
            ctx.error(
                IssueKind::InvalidValue,
                "dublin_core:rights",
                format!("Invalid value for rights: {}", describe(rights)),
            );
        }
    }
    let source_version = verify_source(ctx, core);
    verify_subject(ctx, core);
    verify_title(ctx, core);
    verify_type(ctx, core);

    if check_string_field(ctx, CORE, core, "version", 1) {
        if let (Some(version), Some(source_version)) = (str_of(core, "version"), source_version) {
            check_version(ctx, version, source_version);
        }
    }
}

/// Validate `identifier`, resolve the project type, and compare the
/// identifier with the directory name.
fn verify_identifier(ctx: &mut ValidationContext, core: &Mapping) {
    if !check_string_field(ctx, CORE, core, "identifier", 2) {
        return;
    }
    let Some(id) = str_of(core, "identifier") else {
        return;
    };
    match resolve_project_type(id, str_of(core, "format")) {
        Some(project_type) => {
            ctx.set_project_type(project_type);
        }
        None => ctx.error(
            IssueKind::InvalidValue,
            "dublin_core:identifier",
            format!("Invalid id: {id}"),
        ),
    }
    let suffix = ctx.dir_suffix().to_lowercase();
    if id.to_lowercase() != suffix {
        ctx.error(
            IssueKind::DirectoryMismatch,
            "dublin_core:identifier",
            format!(
                "Project identifier ({id}) does not match last part of directory name: {suffix}"
            ),
        );
    }
}

fn verify_contributors(ctx: &mut ValidationContext, core: &Mapping) {
    let Some(contributors) = sequence(ctx, core, "contributor", "dublin_core:contributor") else {
        if core.get("contributor").is_some_and(Value::is_null) {
            ctx.error(IssueKind::InvalidValue, "dublin_core:contributor", "Missing contributors!");
        }
        return;
    };
    if contributors.is_empty() {
        ctx.error(IssueKind::InvalidValue, "dublin_core:contributor", "Missing contributors!");
    }
    for name in contributors {
        if name.as_str().map_or(true, |s| s.chars().count() < 3) {
            ctx.error(
                IssueKind::InvalidValue,
                "dublin_core:contributor",
                format!("Invalid contributor name: {}", describe(name)),
            );
        }
    }
}

fn verify_dates(ctx: &mut ValidationContext, core: &Mapping) {
    let issued_ok = check_string_field(ctx, CORE, core, "issued", 1);
    let modified_ok = check_string_field(ctx, CORE, core, "modified", 1);
    if !(issued_ok && modified_ok) {
        return;
    }
    if let (Some(issued), Some(modified)) = (str_of(core, "issued"), str_of(core, "modified")) {
        check_dates(ctx, issued, modified);
    }
}

fn verify_format(ctx: &mut ValidationContext, core: &Mapping) {
    if !check_string_field(ctx, CORE, core, "format", 8) {
        return;
    }
    let Some(format) = str_of(core, "format") else {
        return;
    };
    match ctx.project_type() {
        Some(project_type) => {
            if !rules_for(project_type).formats.contains(&format) {
                ctx.error(
                    IssueKind::InvalidValue,
                    "dublin_core:format",
                    format!("Invalid format: {format}"),
                );
            }
        }
        None => ctx.notice(
            "dublin_core:format",
            "Unable to validate format because the project type is not recognized. Verify format manually.",
        ),
    }
}

fn verify_language(ctx: &mut ValidationContext, language: &Mapping) {
    check_keys(ctx, "language", language, LANGUAGE_KEYS);
    if let Some(direction) = language.get("direction") {
        if !matches!(direction.as_str(), Some("ltr" | "rtl")) {
            ctx.error(
                IssueKind::InvalidValue,
                "language:direction",
                format!("Incorrect language direction: {}", describe(direction)),
            );
        }
    }
    if let Some(identifier) = language.get("identifier") {
        if identifier.as_str() != Some(ctx.language_id()) {
            ctx.error(
                IssueKind::InvalidValue,
                "language:identifier",
                format!("Wrong language identifier: {}", describe(identifier)),
            );
        }
    }
    if check_string_field(ctx, "language", language, "title", 3) {
        if let Some(title) = str_of(language, "title") {
            if title.is_ascii() {
                ctx.notice(
                    "language:title",
                    format!("Remember to localize language title: {title}"),
                );
            }
        }
    }
}

/// Only English containers may name the original publisher.
fn verify_publisher(ctx: &mut ValidationContext, core: &Mapping) {
    if !check_string_field(ctx, CORE, core, "publisher", 1) {
        return;
    }
    let Some(publisher) = str_of(core, "publisher") else {
        return;
    };
    let language_id = core
        .get("language")
        .and_then(|l| l.get("identifier"))
        .and_then(Value::as_str);
    if publisher.to_lowercase().contains("unfolding") && language_id != Some("en") {
        ctx.error(
            IssueKind::InvalidValue,
            "dublin_core:publisher",
            format!("Invalid publisher: {publisher}"),
        );
    }
}

fn verify_relations(ctx: &mut ValidationContext, core: &Mapping) {
    const FIELD: &str = "dublin_core:relation";
    let empty = Vec::new();
    let relations = match core.get("relation") {
        None => return,
        Some(Value::Null) => &empty,
        Some(_) => match sequence(ctx, core, "relation", FIELD) {
            Some(seq) => seq,
            None => return,
        },
    };
    if relations.is_empty() {
        ctx.error(IssueKind::InvalidRelation, FIELD, "Missing relations in: relation");
    }
    let mut references_original = false;
    for relation in relations {
        if let Some((language, project)) = check_relation(ctx, relation) {
            if language == ORIGINAL_GREEK_LANGUAGE && project.contains("ugnt?v=") {
                references_original = true;
            }
        }
    }
    let required = ctx
        .project_type()
        .is_some_and(|pt| rules_for(pt).requires_original_language_relation);
    if required && !references_original {
        ctx.error(
            IssueKind::InvalidRelation,
            FIELD,
            "Must reference 'el-x-koine/ugnt?v=...' in relation",
        );
    }
}

/// Verify `source`; returns the first entry's version when it is a string.
fn verify_source<'m>(ctx: &mut ValidationContext, core: &'m Mapping) -> Option<&'m str> {
    const FIELD: &str = "dublin_core:source";
    core.get("source")?;
    let entries = sequence(ctx, core, "source", FIELD).map_or(&[][..], Vec::as_slice);
    if entries.is_empty() {
        ctx.error(
            IssueKind::InvalidValue,
            FIELD,
            "Invalid source: should be a list of exactly one mapping with three fields.",
        );
        return None;
    }
    if entries.len() > 1 {
        ctx.error(
            IssueKind::InvalidValue,
            FIELD,
            format!("Too many source entries: {} (expected exactly one)", entries.len()),
        );
    }
    let expected_id = ctx
        .project_type()
        .and_then(|pt| rules_for(pt).source_identifier);

    for (index, entry) in entries.iter().enumerate() {
        let group = format!("source[{index}]");
        let Some(entry) = entry.as_mapping() else {
            ctx.error(
                IssueKind::WrongType,
                group,
                format!("Source entry must be a mapping, found: {}", describe(entry)),
            );
            continue;
        };
        check_keys(ctx, &group, entry, SOURCE_KEYS);

        if let (Some(expected), Some(identifier)) = (expected_id, entry.get("identifier")) {
            if identifier.as_str() != Some(expected) {
                ctx.error(
                    IssueKind::InvalidValue,
                    format!("{group}:identifier"),
                    format!("Incorrect source:identifier: {}", describe(identifier)),
                );
            }
        }
        match entry.get("language").and_then(Value::as_str) {
            Some("en") => {}
            Some("English") => ctx.error(
                IssueKind::InvalidValue,
                format!("{group}:language"),
                "Use language code in source:language, not 'English'",
            ),
            Some(other) => ctx.warning(
                IssueKind::InvalidValue,
                format!("{group}:language"),
                format!("Possible bad source:language: {other}"),
            ),
            None => {
                if let Some(value) = entry.get("language") {
                    ctx.error(
                        IssueKind::WrongType,
                        format!("{group}:language"),
                        format!("Value must be a string: language: {}", describe(value)),
                    );
                }
            }
        }
        check_string_field(ctx, &group, entry, "version", 1);
    }

    entries
        .first()
        .and_then(|e| e.get("version"))
        .and_then(Value::as_str)
}

fn verify_subject(ctx: &mut ValidationContext, core: &Mapping) {
    let Some(subject) = core.get("subject") else {
        return;
    };
    match ctx.project_type() {
        Some(pt) => {
            let ok = subject
                .as_str()
                .is_some_and(|s| rules_for(pt).subjects.contains(&s));
            if !ok {
                ctx.error(
                    IssueKind::InvalidValue,
                    "dublin_core:subject",
                    format!("Invalid subject: {}", describe(subject)),
                );
            }
        }
        None => ctx.notice("dublin_core:subject", "Verify subject manually."),
    }
}

fn verify_title(ctx: &mut ValidationContext, core: &Mapping) {
    if !check_string_field(ctx, CORE, core, "title", 3) {
        return;
    }
    let (Some(title), Some(pt)) = (str_of(core, "title"), ctx.project_type()) else {
        return;
    };
    if rules_for(pt)
        .forbidden_title_words
        .iter()
        .any(|word| title.contains(word))
    {
        ctx.error(
            IssueKind::InvalidValue,
            "dublin_core:title",
            format!("Title contradicts project type: {title}"),
        );
    }
}

fn verify_type(ctx: &mut ValidationContext, core: &Mapping) {
    let Some(resource_type) = core.get("type") else {
        return;
    };
    match ctx.project_type() {
        Some(pt) => {
            if resource_type.as_str() != Some(rules_for(pt).resource_type) {
                ctx.error(
                    IssueKind::InvalidValue,
                    "dublin_core:type",
                    format!("Invalid type: {}", describe(resource_type)),
                );
            }
        }
        None => ctx.notice("dublin_core:type", "Verify type manually."),
    }
}

/// Verify `checking`.
pub fn verify_checking(ctx: &mut ValidationContext, checking: &Mapping) {
    check_keys(ctx, "checking", checking, CHECKING_KEYS);

    if let Some(entities) = checking.get("checking_entity") {
        let list = entities.as_sequence().map_or(&[][..], Vec::as_slice);
        if list.is_empty() {
            ctx.error(
                IssueKind::InvalidValue,
                "checking:checking_entity",
                "Missing checking_entity.",
            );
        }
        for entity in list {
            if entity.as_str().map_or(true, |s| s.chars().count() < 3) {
                ctx.error(
                    IssueKind::InvalidValue,
                    "checking:checking_entity",
                    format!("Invalid checking_entity: {}", describe(entity)),
                );
            }
        }
    }
    if let Some(level) = checking.get("checking_level") {
        match level.as_str() {
            None => ctx.error(
                IssueKind::WrongType,
                "checking:checking_level",
                format!("checking_level must be a string: {}", describe(level)),
            ),
            Some("3") => {}
            Some(other) => ctx.error(
                IssueKind::InvalidValue,
                "checking:checking_level",
                format!("Invalid value for checking_level: {other}"),
            ),
        }
    }
}
