//! End-to-end verification of fixture containers.
//!
//! Every fixture starts valid; each test breaks one thing and asserts the
//! report names exactly that.

mod common;

use common::Fixture;
use rcv_core::{IssueKind, Severity};

fn assert_clean(fixture: &Fixture) {
    let report = fixture.verify();
    let messages: Vec<_> = report.counted().map(|i| i.message.as_str()).collect();
    assert!(messages.is_empty(), "unexpected issues: {messages:#?}");
}

// =========================================================================
// Valid containers
// =========================================================================

#[test]
fn test_valid_containers_are_clean() {
    for fixture in [
        common::tn(),
        common::tn_tsv(),
        common::ulb(),
        common::obs(),
        common::ta(),
    ] {
        assert_clean(&fixture);
    }
}

#[test]
fn test_full_bible_is_clean() {
    assert_clean(&common::bible("udb", "Unlocked Dynamic Bible", 66));
}

#[test]
fn test_helps_are_clean() {
    for fixture in [
        common::tq(),
        common::tw(),
        common::obs_tn(),
        common::obs_tq(),
    ] {
        assert_clean(&fixture);
    }
}

#[test]
fn test_every_bible_is_clean() {
    for fixture in [
        common::bible("isv", "Indian Standard Version", 27),
        common::bible("iev", "Indian Easy Version", 39),
        common::bible_in("text/usfm3", "ust", "Unlocked Simplified Text", 27),
        common::bible_in("text/usfm3", "irv", "Indian Revised Version", 66),
    ] {
        assert_clean(&fixture);
    }
}

#[test]
fn test_iev_title_may_not_claim_revision() {
    let report = common::bible("iev", "Indian Revised Version", 27).verify();
    let fields: Vec<_> = report.counted().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, ["dublin_core:title"]);
}

#[test]
fn test_irv_requires_usfm3() {
    let report = common::bible("irv", "Indian Revised Version", 27).verify();
    let fields: Vec<_> = report.counted().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, ["dublin_core:format"]);
}

#[test]
fn test_obs_helps_do_not_need_media_file() {
    let report = common::obs_tn().verify();
    assert_eq!(report.count_kind(IssueKind::MissingFile), 0);
}

// =========================================================================
// Identifier and directory name
// =========================================================================

#[test]
fn test_identifier_must_match_directory_suffix() {
    let valid = common::tn();
    let moved = valid.dir.with_file_name("hi_tq");
    std::fs::rename(&valid.dir, &moved).unwrap();
    let report = rcv_manifest::verify_dir(&moved, &common::options()).unwrap();
    assert_eq!(report.count_kind(IssueKind::DirectoryMismatch), 1);
    assert!(report
        .iter()
        .any(|i| i.message
            == "Project identifier (tn) does not match last part of directory name: tq"));
    std::fs::rename(&moved, &valid.dir).unwrap();
}

#[test]
fn test_unknown_identifier_degrades_to_notices() {
    let mut fixture = common::tn();
    fixture.edit("  identifier: tn\n", "  identifier: xx\n");
    let report = fixture.verify();
    assert!(report.iter().any(|i| i.message == "Invalid id: xx"));
    assert_eq!(report.count_kind(IssueKind::DirectoryMismatch), 1);
    assert_eq!(report.count(), 2, "{report:#?}");
    let notices: Vec<_> = report.notices().map(|i| i.message.as_str()).collect();
    assert!(notices.contains(&"Verify subject manually."));
    assert!(notices.contains(&"Verify type manually."));
    assert!(notices.contains(&"Verify each project entry manually."));
}

#[test]
fn test_tsv_format_without_greek_relation() {
    let mut fixture = common::tn_tsv();
    fixture.edit("    - 'el-x-koine/ugnt?v=0.2'\n", "    - 'hi/tq'\n");
    let report = fixture.verify();
    assert_eq!(report.count(), 1);
    assert_eq!(
        report.counted().next().unwrap().message,
        "Must reference 'el-x-koine/ugnt?v=...' in relation"
    );
}

#[test]
fn test_tsv_notes_treat_tn_relation_as_self() {
    let mut fixture = common::tn_tsv();
    fixture.edit("    - 'hi/ulb'\n", "    - 'hi/tn'\n");
    let report = fixture.verify();
    assert_eq!(report.count(), 1);
    assert_eq!(
        report.counted().next().unwrap().message,
        "Project code in relation element is same as current project: hi/tn"
    );
}

#[test]
fn test_tsv_notes_source_is_tn() {
    let mut fixture = common::tn_tsv();
    fixture.edit("      identifier: tn\n", "      identifier: tn-tsv\n");
    let report = fixture.verify();
    assert_eq!(report.count(), 1);
    let issue = report.counted().next().unwrap();
    assert_eq!(issue.field, "source[0]:identifier");
    assert_eq!(issue.message, "Incorrect source:identifier: tn-tsv");
}

// =========================================================================
// Schema
// =========================================================================

#[test]
fn test_missing_key_is_one_issue() {
    let mut fixture = common::ulb();
    fixture.edit("  rights: CC BY-SA 4.0\n", "");
    let report = fixture.verify();
    assert_eq!(report.count(), 1);
    assert_eq!(
        report.counted().next().unwrap().message,
        "Missing field: dublin_core:rights"
    );
}

#[test]
fn test_extra_keys_are_reported_alongside_missing() {
    let mut fixture = common::obs();
    fixture.edit(
        "  publisher: Door43\n",
        "  comment: hello\n  notes: world\n",
    );
    let report = fixture.verify();
    assert_eq!(report.count_kind(IssueKind::MissingField), 1);
    assert_eq!(report.count_kind(IssueKind::ExtraField), 2);
    assert_eq!(report.count(), 3);
}

// =========================================================================
// Project counts
// =========================================================================

#[test]
fn test_obs_with_two_projects() {
    let mut fixture = common::obs();
    let entry = "  - {title: Open Bible Stories, versification: '', identifier: obs, sort: 0, path: ./content, categories: []}\n";
    fixture.edit(entry, &format!("{entry}{entry}"));
    let report = fixture.verify();
    assert_eq!(report.count_kind(IssueKind::ProjectCount), 1);
    assert_eq!(report.count(), 1);
}

#[test]
fn test_ta_with_three_sections() {
    let mut fixture = common::ta();
    fixture.edit(
        "  - {title: Checking Manual, versification: '', identifier: checking, sort: 3, path: ./checking, categories: [ta]}\n",
        "",
    );
    let report = fixture.verify();
    assert_eq!(report.count_kind(IssueKind::ProjectCount), 1);
    assert_eq!(report.count(), 1);
}

#[test]
fn test_bible_with_forty_books() {
    let report = common::bible("ulb", "Unlocked Literal Bible", 40).verify();
    assert_eq!(report.count(), 1);
    assert_eq!(
        report.counted().next().unwrap().message,
        "Number of projects listed: 40"
    );
}

#[test]
fn test_missing_entry_key_does_not_cascade() {
    let mut fixture = common::ulb();
    fixture.edit(
        "identifier: mat, sort: 41,",
        "identifier: mat,",
    );
    let report = fixture.verify();
    let found: Vec<_> = report.counted().map(|i| (i.kind, i.field.as_str())).collect();
    assert_eq!(found, [(IssueKind::MissingField, "projects[0]:sort")]);
}

#[test]
fn test_project_path_outside_container() {
    let mut fixture = common::ulb();
    std::fs::write(fixture.dir.with_file_name("67-REV.usfm"), "x\n").unwrap();
    fixture.edit("path: ./67-REV.usfm", "path: ../67-REV.usfm");
    let report = fixture.verify();
    let messages: Vec<_> = report.counted().map(|i| i.message.as_str()).collect();
    assert_eq!(messages, ["Invalid path: ../67-REV.usfm"]);
}

#[test]
fn test_missing_project_path() {
    let fixture = common::ulb();
    std::fs::remove_file(fixture.dir.join("67-REV.usfm")).unwrap();
    let report = fixture.verify();
    assert_eq!(report.count(), 1);
    assert_eq!(report.counted().next().unwrap().field, "projects[26]:path");
}

// =========================================================================
// Dates, versions, titles
// =========================================================================

#[test]
fn test_stale_modified_date() {
    let fixture = common::tn();
    let options = rcv_manifest::VerifyOptions {
        today: common::today().succ_opt().unwrap(),
        ..common::options()
    };
    let report = rcv_manifest::verify_dir(&fixture.dir, &options).unwrap();
    assert_eq!(report.count_kind(IssueKind::InvalidDate), 1);
    assert_eq!(report.count(), 1);
}

#[test]
fn test_malformed_date_is_not_fatal() {
    let mut fixture = common::tn();
    fixture.edit("issued: '2024-01-15'", "issued: 'January 15'");
    let report = fixture.verify();
    assert!(!report.has_fatal());
    assert_eq!(report.count_kind(IssueKind::InvalidDate), 1);
}

#[test]
fn test_version_must_pair_with_source() {
    let mut fixture = common::ta();
    fixture.edit("  version: '12.1'\n", "  version: '13.1'\n");
    let report = fixture.verify();
    assert_eq!(report.count_kind(IssueKind::InvalidVersion), 1);
}

#[test]
fn test_bible_title_contradiction() {
    let report = common::bible("ust", "Unlocked Literal Bible", 27).verify();
    // ust is usfm3 only, and its title may not claim to be literal
    let fields: Vec<_> = report.counted().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, ["dublin_core:format", "dublin_core:title"]);
}

// =========================================================================
// Load failures
// =========================================================================

#[test]
fn test_unparseable_manifest_is_fatal() {
    let mut fixture = common::tn();
    fixture.edit("checking:\n", "checking: [\n");
    let report = fixture.verify();
    assert!(report.has_fatal());
    assert_eq!(report.count(), 1);
    assert_eq!(report.iter().next().unwrap().kind, IssueKind::Unreadable);
}

#[test]
fn test_byte_order_mark() {
    let fixture = common::obs();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(fixture.manifest.as_bytes());
    std::fs::write(fixture.dir.join("manifest.yaml"), bytes).unwrap();
    let report = fixture.verify();
    assert_eq!(report.count(), 1);
    assert_eq!(
        report.counted().next().unwrap().message,
        "manifest.yaml file has a Byte Order Mark. Remove it."
    );
}

// =========================================================================
// Directory contents
// =========================================================================

#[test]
fn test_obs_requires_media_file() {
    let fixture = common::obs();
    std::fs::remove_file(fixture.dir.join("media.yaml")).unwrap();
    let report = fixture.verify();
    assert_eq!(report.count(), 1);
    assert_eq!(report.counted().next().unwrap().kind, IssueKind::MissingFile);
}

#[test]
fn test_stray_files_are_flagged() {
    let fixture = common::obs();
    fixture.touch("content/01 - Copy.md");
    fixture.touch("content/20240101.md");
    fixture.touch(".git/orig_head");
    let report = fixture.verify();
    let found: Vec<_> = report
        .counted()
        .map(|i| (i.kind, i.severity, i.field.as_str()))
        .collect();
    assert_eq!(
        found,
        [
            (
                IssueKind::ExtraneousFile,
                Severity::Warning,
                "content/01 - Copy.md"
            ),
            (
                IssueKind::MisnamedFile,
                Severity::Error,
                "content/20240101.md"
            ),
        ]
    );
}
