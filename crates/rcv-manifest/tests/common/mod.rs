//! Fixture containers for integration tests.
//!
//! Each builder lays out a complete, valid container in a temp directory
//! named `<lang>_<identifier>`. Tests then break one thing and check that
//! exactly that thing is reported.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rcv_core::{Book, IssueReport, Testament, BOOKS};
use rcv_manifest::{verify_dir, VerifyOptions};

pub const LANGUAGE: &str = "hi";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn options() -> VerifyOptions {
    VerifyOptions {
        today: today(),
        ..VerifyOptions::default()
    }
}

/// The `dublin_core` values that differ between project types.
#[derive(Debug, Clone)]
pub struct Profile {
    pub identifier: &'static str,
    pub format: &'static str,
    pub subject: &'static str,
    pub resource_type: &'static str,
    pub title: &'static str,
    pub source_identifier: &'static str,
    pub relations: Vec<&'static str>,
}

/// One `projects` entry plus the file it points at.
#[derive(Debug, Clone)]
pub struct Entry {
    pub yaml: String,
    pub path: String,
}

pub struct Fixture {
    _tmp: tempfile::TempDir,
    pub dir: PathBuf,
    pub manifest: String,
}

impl Fixture {
    /// Lay out a container: manifest plus every entry's path.
    pub fn build(dir_name: &str, profile: &Profile, entries: &[Entry]) -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(dir_name);
        fs::create_dir(&dir).unwrap();
        let fixture = Self {
            _tmp: tmp,
            dir,
            manifest: render_manifest(profile, entries),
        };
        for entry in entries {
            fixture.touch(entry.path.trim_start_matches("./"));
        }
        fixture.write_manifest();
        fixture
    }

    pub fn write_manifest(&self) {
        fs::write(self.dir.join("manifest.yaml"), &self.manifest).unwrap();
    }

    /// Rewrite the manifest with `from` replaced by `to`.
    pub fn edit(&mut self, from: &str, to: &str) {
        assert!(self.manifest.contains(from), "fixture has no {from:?}");
        self.manifest = self.manifest.replace(from, to);
        self.write_manifest();
    }

    pub fn touch(&self, rel: &str) {
        let path = self.dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x\n").unwrap();
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn verify(&self) -> IssueReport {
        verify_dir(&self.dir, &options()).unwrap()
    }
}

pub fn render_manifest(profile: &Profile, entries: &[Entry]) -> String {
    let relations: String = profile
        .relations
        .iter()
        .map(|r| format!("    - '{r}'\n"))
        .collect();
    let projects: String = entries.iter().map(|e| format!("  - {}\n", e.yaml)).collect();
    format!(
        "dublin_core:
  conformsto: rc0.2
  contributor:
    - Asha Verma
    - Daniel Okafor
  creator: Wycliffe Associates
  description: Fixture container
  format: {format}
  identifier: {identifier}
  issued: '2024-01-15'
  modified: '2024-06-01'
  language:
    direction: ltr
    identifier: {language}
    title: हिन्दी
  publisher: Door43
  relation:
{relations}  rights: CC BY-SA 4.0
  source:
    - language: en
      identifier: {source}
      version: '12'
  subject: {subject}
  title: {title}
  type: {resource_type}
  version: '12.1'
checking:
  checking_entity:
    - Wycliffe Associates
  checking_level: '3'
projects:
{projects}",
        language = LANGUAGE,
        format = profile.format,
        identifier = profile.identifier,
        source = profile.source_identifier,
        subject = profile.subject,
        title = profile.title,
        resource_type = profile.resource_type,
    )
}

pub fn new_testament() -> impl Iterator<Item = &'static Book> {
    BOOKS.iter().filter(|b| b.testament() == Testament::New)
}

fn book_entry(book: &Book, path: String, categories: &str) -> Entry {
    Entry {
        yaml: format!(
            "{{title: {id}, versification: ufw, identifier: {lower}, sort: {sort}, path: {path}, categories: {categories}}}",
            id = book.id,
            lower = book.id.to_lowercase(),
            sort = book.sort,
        ),
        path,
    }
}

pub fn tn() -> Fixture {
    let profile = Profile {
        identifier: "tn",
        format: "text/markdown",
        subject: "Translation Notes",
        resource_type: "help",
        title: "translationNotes",
        source_identifier: "tn",
        relations: vec!["hi/ulb", "hi/tq"],
    };
    let entries: Vec<_> = new_testament()
        .map(|b| book_entry(b, format!("./{}", b.id.to_lowercase()), "[]"))
        .collect();
    Fixture::build("hi_tn", &profile, &entries)
}

pub fn tn_tsv() -> Fixture {
    let profile = Profile {
        identifier: "tn",
        format: "text/tsv",
        subject: "TSV Translation Notes",
        resource_type: "help",
        title: "translationNotes",
        source_identifier: "tn",
        relations: vec!["hi/ulb", "el-x-koine/ugnt?v=0.2"],
    };
    let entries: Vec<_> = new_testament()
        .map(|b| {
            let path = format!("./hi_tn_{}-{}.tsv", b.sort, b.id);
            book_entry(b, path, "[bible-nt]")
        })
        .collect();
    Fixture::build("hi_tn", &profile, &entries)
}

pub fn bible(identifier: &'static str, title: &'static str, books: usize) -> Fixture {
    bible_in("text/usfm", identifier, title, books)
}

/// A Bible of the last `books` canonical books in the given USFM format.
pub fn bible_in(
    format: &'static str,
    identifier: &'static str,
    title: &'static str,
    books: usize,
) -> Fixture {
    let profile = Profile {
        identifier,
        format,
        subject: "Bible",
        resource_type: "bundle",
        title,
        source_identifier: identifier,
        relations: vec!["hi/tn"],
    };
    let entries: Vec<_> = BOOKS
        .iter()
        .skip(BOOKS.len().saturating_sub(books))
        .map(|b| {
            let path = format!("./{}-{}.usfm", b.sort, b.id);
            book_entry(b, path, &format!("[{}]", b.testament().category()))
        })
        .collect();
    Fixture::build(&format!("hi_{identifier}"), &profile, &entries)
}

pub fn ulb() -> Fixture {
    bible("ulb", "Unlocked Literal Bible", 27)
}

pub fn tq() -> Fixture {
    let profile = Profile {
        identifier: "tq",
        format: "text/markdown",
        subject: "Translation Questions",
        resource_type: "help",
        title: "translationQuestions",
        source_identifier: "tq",
        relations: vec!["hi/ulb", "hi/tn"],
    };
    let entries: Vec<_> = new_testament()
        .take(4)
        .map(|b| {
            let path = format!("./{}", b.id.to_lowercase());
            Entry {
                path: format!("{path}/01/01.md"),
                ..book_entry(b, path, "[]")
            }
        })
        .collect();
    Fixture::build("hi_tq", &profile, &entries)
}

pub fn tw() -> Fixture {
    let profile = Profile {
        identifier: "tw",
        format: "text/markdown",
        subject: "Translation Words",
        resource_type: "dict",
        title: "translationWords",
        source_identifier: "tw",
        relations: vec!["hi/ulb", "hi/tn"],
    };
    let entries = [Entry {
        yaml: "{title: translationWords, versification: '', identifier: bible, sort: 0, path: ./bible, categories: []}"
            .to_string(),
        path: "./bible/kt/god.md".to_string(),
    }];
    Fixture::build("hi_tw", &profile, &entries)
}

fn story_helps(
    identifier: &'static str,
    subject: &'static str,
    title: &'static str,
) -> Fixture {
    let profile = Profile {
        identifier,
        format: "text/markdown",
        subject,
        resource_type: "help",
        title,
        source_identifier: identifier,
        relations: vec!["hi/obs"],
    };
    let entries = [Entry {
        yaml: format!(
            "{{title: {title}, versification: '', identifier: obs, sort: 0, path: ./content, categories: []}}"
        ),
        path: "./content/01/01.md".to_string(),
    }];
    Fixture::build(&format!("hi_{identifier}"), &profile, &entries)
}

pub fn obs_tn() -> Fixture {
    story_helps("obs-tn", "OBS Translation Notes", "OBS translationNotes")
}

pub fn obs_tq() -> Fixture {
    story_helps(
        "obs-tq",
        "OBS Translation Questions",
        "Open Bible Stories Translation Questions",
    )
}

pub fn obs() -> Fixture {
    let profile = Profile {
        identifier: "obs",
        format: "text/markdown",
        subject: "Open Bible Stories",
        resource_type: "book",
        title: "Open Bible Stories",
        source_identifier: "obs",
        relations: vec!["hi/obs-tn"],
    };
    let entries = [Entry {
        yaml: "{title: Open Bible Stories, versification: '', identifier: obs, sort: 0, path: ./content, categories: []}"
            .to_string(),
        path: "./content/01.md".to_string(),
    }];
    let fixture = Fixture::build("hi_obs", &profile, &entries);
    fixture.touch("media.yaml");
    fixture
}

pub fn ta() -> Fixture {
    let profile = Profile {
        identifier: "ta",
        format: "text/markdown",
        subject: "Translation Academy",
        resource_type: "man",
        title: "translationAcademy",
        source_identifier: "ta",
        relations: vec!["hi/tw"],
    };
    let sections = [
        ("intro", "Introduction to translationAcademy", 0),
        ("process", "Process Manual", 1),
        ("translate", "Translation Manual", 2),
        ("checking", "Checking Manual", 3),
    ];
    let entries: Vec<_> = sections
        .iter()
        .map(|(id, title, sort)| Entry {
            yaml: format!(
                "{{title: {title}, versification: '', identifier: {id}, sort: {sort}, path: ./{id}, categories: [ta]}}"
            ),
            path: format!("./{id}/toc.yaml"),
        })
        .collect();
    Fixture::build("hi_ta", &profile, &entries)
}
