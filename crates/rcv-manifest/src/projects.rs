//! # Project Entries
//!
//! Checks the `projects` list: the entry count allowed for the project
//! type, the key set and `path` of every entry, then the per-type
//! [`EntryRule`].

use std::path::{Component, Path};

use rcv_core::books::{self, Book};
use rcv_core::IssueKind;
use serde_yaml::{Mapping, Value};

use crate::context::ValidationContext;
use crate::fields::{as_integer, check_string_field, describe, is_blank};
use crate::rules::{
    rules_for, EntryRule, ProjectCount, ACADEMY_SECTIONS, TESTAMENT_CATEGORIES,
};
use crate::schema::{check_keys, PROJECT_KEYS};

/// Verify the `projects` value.
pub fn verify_projects(ctx: &mut ValidationContext, projects: &Value) {
    let entries = match projects {
        Value::Null => &[][..],
        Value::Sequence(seq) => seq.as_slice(),
        other => {
            ctx.error(
                IssueKind::WrongType,
                "projects",
                format!("projects must be a list, found: {}", describe(other)),
            );
            return;
        }
    };
    if entries.is_empty() {
        ctx.error(IssueKind::ProjectCount, "projects", "Empty projects list");
        return;
    }

    let rules = ctx.project_type().map(rules_for);
    match rules {
        Some(rules) if !rules.project_count.accepts(entries.len()) => {
            let message = match rules.project_count {
                ProjectCount::Exactly(n) => {
                    format!("There should be exactly {n} project(s) listed under projects.")
                }
                _ => format!("Number of projects listed: {}", entries.len()),
            };
            ctx.error(IssueKind::ProjectCount, "projects", message);
        }
        Some(_) => {}
        None => ctx.notice("projects", "Verify each project entry manually."),
    }

    for (index, entry) in entries.iter().enumerate() {
        let group = format!("projects[{index}]");
        let Some(entry) = entry.as_mapping() else {
            ctx.error(
                IssueKind::WrongType,
                group,
                format!("Project entry must be a mapping, found: {}", describe(entry)),
            );
            continue;
        };
        check_keys(ctx, &group, entry, PROJECT_KEYS);
        check_path(ctx, &group, entry);
        if let Some(rules) = rules {
            check_entry(ctx, &group, entry, rules.entry);
        }
    }
}

fn check_path(ctx: &mut ValidationContext, group: &str, entry: &Mapping) {
    if !check_string_field(ctx, group, entry, "path", 5) {
        return;
    }
    let Some(path) = entry.get("path").and_then(Value::as_str) else {
        return;
    };
    let relative = Path::new(path);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::CurDir | Component::Normal(_)));
    if escapes || !ctx.manifest_dir().join(relative).exists() {
        ctx.error(
            IssueKind::InvalidProject,
            format!("{group}:path"),
            format!("Invalid path: {path}"),
        );
    }
}

/// Every rule skips keys the entry lacks; `check_keys` reports those.
fn check_entry(ctx: &mut ValidationContext, group: &str, entry: &Mapping, rule: EntryRule) {
    match rule {
        EntryRule::Academy => check_academy(ctx, group, entry),
        EntryRule::BookHelps => {
            check_book_sort(ctx, group, entry);
            require_blank(ctx, group, entry, "categories");
        }
        EntryRule::TabularNotes => {
            let book = check_book_sort(ctx, group, entry);
            check_testament_category(ctx, group, entry, book);
        }
        EntryRule::Words => require_value(ctx, group, entry, "title", &["translationWords"]),
        EntryRule::Bible => {
            let book = check_book_sort(ctx, group, entry);
            require_value(ctx, group, entry, "versification", &["ufw"]);
            check_testament_category(ctx, group, entry, book);
        }
        EntryRule::Stories => {
            require_blank(ctx, group, entry, "categories");
            require_blank(ctx, group, entry, "versification");
            require_value(ctx, group, entry, "identifier", &["obs"]);
            require_value(ctx, group, entry, "title", &["Open Bible Stories"]);
        }
        EntryRule::StoryHelps { titles } => {
            require_blank(ctx, group, entry, "categories");
            require_value(ctx, group, entry, "identifier", &["obs"]);
            require_value(ctx, group, entry, "title", titles);
        }
    }
}

fn invalid(ctx: &mut ValidationContext, group: &str, key: &str, value: &Value) {
    ctx.error(
        IssueKind::InvalidProject,
        format!("{group}:{key}"),
        format!("Invalid project:{key}: {}", describe(value)),
    );
}

fn require_value(
    ctx: &mut ValidationContext,
    group: &str,
    entry: &Mapping,
    key: &str,
    allowed: &[&str],
) {
    let Some(value) = entry.get(key) else {
        return;
    };
    if !value.as_str().is_some_and(|v| allowed.contains(&v)) {
        invalid(ctx, group, key, value);
    }
}

fn require_blank(ctx: &mut ValidationContext, group: &str, entry: &Mapping, key: &str) {
    if let Some(value) = entry.get(key) {
        if !is_blank(value) {
            invalid(ctx, group, key, value);
        }
    }
}

/// `identifier` must be a canonical book and `sort` its canonical order.
///
/// Returns the book so later rules can use it; an unknown identifier is
/// reported here and nowhere else.
fn check_book_sort(
    ctx: &mut ValidationContext,
    group: &str,
    entry: &Mapping,
) -> Option<&'static Book> {
    let identifier = entry.get("identifier")?;
    let Some(book) = identifier.as_str().and_then(books::lookup) else {
        invalid(ctx, group, "identifier", identifier);
        return None;
    };
    if let Some(sort) = entry.get("sort") {
        if as_integer(sort) != Some(book.sort) {
            invalid(ctx, group, "sort", sort);
        }
    }
    Some(book)
}

/// Exactly one testament category, and the right one for a known book.
fn check_testament_category(
    ctx: &mut ValidationContext,
    group: &str,
    entry: &Mapping,
    book: Option<&Book>,
) {
    let Some(categories) = entry.get("categories") else {
        return;
    };
    let category = match categories.as_sequence().map(Vec::as_slice) {
        Some([only]) => only.as_str(),
        _ => None,
    };
    let ok = match (category, book) {
        (Some(c), Some(book)) => c == book.testament().category(),
        (Some(c), None) => TESTAMENT_CATEGORIES.contains(&c),
        (None, _) => false,
    };
    if !ok {
        invalid(ctx, group, "categories", categories);
    }
}

fn check_academy(ctx: &mut ValidationContext, group: &str, entry: &Mapping) {
    if let Some(categories) = entry.get("categories") {
        let ok = categories
            .as_sequence()
            .is_some_and(|seq| matches!(seq.as_slice(), [only] if only.as_str() == Some("ta")));
        if !ok {
            invalid(ctx, group, "categories", categories);
        }
    }

    let Some(identifier) = entry.get("identifier") else {
        return;
    };
    let section = ACADEMY_SECTIONS
        .iter()
        .find(|(id, _, _)| Some(*id) == identifier.as_str());
    let Some((_, title, sort)) = section else {
        invalid(ctx, group, "identifier", identifier);
        return;
    };
    if let Some(value) = entry.get("title") {
        if value.as_str() != Some(*title) {
            invalid(ctx, group, "title", value);
        }
    }
    if let Some(value) = entry.get("sort") {
        if as_integer(value) != Some(*sort) {
            invalid(ctx, group, "sort", value);
        }
    }
}
