//! # Project-Type Rule Table
//!
//! Every piece of per-type knowledge lives in one [`RuleBundle`] per
//! [`ProjectType`]: accepted formats and subjects, the required `type`,
//! forbidden title words, the project-count constraint, the expected source
//! identifier and the rule applied to each project entry.
//!
//! [`rules_for`] is an exhaustive `match`, so a new project type cannot be
//! added without deciding its rules.

use rcv_core::ProjectType;

/// Tabular format that promotes a `tn` container to `tn-tsv`.
pub const TSV_FORMAT: &str = "text/tsv";

/// Book counts of a complete Old Testament, New Testament and Bible.
pub const CANON_PROJECT_COUNTS: &[usize] = &[27, 39, 66];

/// How many entries `projects` must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCount {
    /// Exactly this many.
    Exactly(usize),
    /// One of these counts.
    OneOf(&'static [usize]),
    /// Any non-empty list.
    AtLeastOne,
}

impl ProjectCount {
    /// Whether `n` entries satisfy the constraint.
    pub fn accepts(&self, n: usize) -> bool {
        match self {
            Self::Exactly(expected) => n == *expected,
            Self::OneOf(allowed) => allowed.contains(&n),
            Self::AtLeastOne => n >= 1,
        }
    }
}

/// The check applied to each entry of `projects`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRule {
    /// translationAcademy manuals, see [`ACADEMY_SECTIONS`].
    Academy,
    /// One entry per book with canonical sort and empty categories.
    BookHelps,
    /// One entry per book with canonical sort and a testament category.
    TabularNotes,
    /// The single translationWords entry.
    Words,
    /// One USFM book per entry.
    Bible,
    /// The single Open Bible Stories entry.
    Stories,
    /// The single OBS helps entry, with the titles it may carry.
    StoryHelps { titles: &'static [&'static str] },
}

/// Everything that depends on the project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleBundle {
    /// Accepted `dublin_core.format` values.
    pub formats: &'static [&'static str],
    /// Accepted `dublin_core.subject` values.
    pub subjects: &'static [&'static str],
    /// Required `dublin_core.type` value.
    pub resource_type: &'static str,
    /// Words that contradict the project type when found in the title.
    pub forbidden_title_words: &'static [&'static str],
    /// Constraint on the number of `projects` entries.
    pub project_count: ProjectCount,
    /// Required `source[0].identifier`, when there is one.
    pub source_identifier: Option<&'static str>,
    /// Whether `relation` must reference the versioned Greek New Testament.
    pub requires_original_language_relation: bool,
    /// Per-entry rule.
    pub entry: EntryRule,
}

/// translationAcademy sections: identifier, title, sort.
pub static ACADEMY_SECTIONS: [(&str, &str, i64); 4] = [
    ("intro", "Introduction to translationAcademy", 0),
    ("process", "Process Manual", 1),
    ("translate", "Translation Manual", 2),
    ("checking", "Checking Manual", 3),
];

/// Categories a book entry may carry.
pub const TESTAMENT_CATEGORIES: &[&str] = &["bible-ot", "bible-nt"];

const MARKDOWN: &[&str] = &["text/markdown"];
const USFM: &[&str] = &["text/usfm", "text/usfm3"];
const USFM3: &[&str] = &["text/usfm3"];
const BIBLE_SUBJECTS: &[&str] = &["Bible", "Aligned Bible"];
const LITERAL_WORDS: &[&str] = &["Literal", "Revised"];
const DYNAMIC_WORDS: &[&str] = &["Easy", "Dynamic"];

const fn bible(
    formats: &'static [&'static str],
    forbidden: &'static [&'static str],
    source: Option<&'static str>,
) -> RuleBundle {
    RuleBundle {
        formats,
        subjects: BIBLE_SUBJECTS,
        resource_type: "bundle",
        forbidden_title_words: forbidden,
        project_count: ProjectCount::OneOf(CANON_PROJECT_COUNTS),
        source_identifier: source,
        requires_original_language_relation: false,
        entry: EntryRule::Bible,
    }
}

static TN: RuleBundle = RuleBundle {
    formats: MARKDOWN,
    subjects: &["Translation Notes"],
    resource_type: "help",
    forbidden_title_words: &[],
    project_count: ProjectCount::OneOf(CANON_PROJECT_COUNTS),
    source_identifier: Some("tn"),
    requires_original_language_relation: false,
    entry: EntryRule::BookHelps,
};

static TN_TSV: RuleBundle = RuleBundle {
    formats: &[TSV_FORMAT],
    subjects: &["TSV Translation Notes"],
    resource_type: "help",
    forbidden_title_words: &[],
    project_count: ProjectCount::OneOf(CANON_PROJECT_COUNTS),
    source_identifier: Some("tn"),
    requires_original_language_relation: true,
    entry: EntryRule::TabularNotes,
};

static TQ: RuleBundle = RuleBundle {
    formats: MARKDOWN,
    subjects: &["Translation Questions"],
    resource_type: "help",
    forbidden_title_words: &[],
    project_count: ProjectCount::AtLeastOne,
    source_identifier: Some("tq"),
    requires_original_language_relation: false,
    entry: EntryRule::BookHelps,
};

static TW: RuleBundle = RuleBundle {
    formats: MARKDOWN,
    subjects: &["Translation Words"],
    resource_type: "dict",
    forbidden_title_words: &[],
    project_count: ProjectCount::Exactly(1),
    source_identifier: Some("tw"),
    requires_original_language_relation: false,
    entry: EntryRule::Words,
};

static TA: RuleBundle = RuleBundle {
    formats: MARKDOWN,
    subjects: &["Translation Academy"],
    resource_type: "man",
    forbidden_title_words: &[],
    project_count: ProjectCount::Exactly(4),
    source_identifier: None,
    requires_original_language_relation: false,
    entry: EntryRule::Academy,
};

static ULB: RuleBundle = bible(USFM, DYNAMIC_WORDS, Some("ulb"));
static UDB: RuleBundle = bible(USFM, LITERAL_WORDS, Some("udb"));
static UST: RuleBundle = bible(USFM3, LITERAL_WORDS, Some("ust"));
static IEV: RuleBundle = bible(USFM, LITERAL_WORDS, None);
static IRV: RuleBundle = bible(USFM3, DYNAMIC_WORDS, None);
static ISV: RuleBundle = bible(USFM, DYNAMIC_WORDS, None);

static OBS: RuleBundle = RuleBundle {
    formats: MARKDOWN,
    subjects: &["Open Bible Stories"],
    resource_type: "book",
    forbidden_title_words: &[],
    project_count: ProjectCount::Exactly(1),
    source_identifier: Some("obs"),
    requires_original_language_relation: false,
    entry: EntryRule::Stories,
};

static OBS_TN: RuleBundle = RuleBundle {
    formats: MARKDOWN,
    subjects: &["OBS Translation Notes"],
    resource_type: "help",
    forbidden_title_words: &[],
    project_count: ProjectCount::Exactly(1),
    source_identifier: Some("obs-tn"),
    requires_original_language_relation: false,
    entry: EntryRule::StoryHelps {
        titles: &["Open Bible Stories Translation Notes", "OBS translationNotes"],
    },
};

static OBS_TQ: RuleBundle = RuleBundle {
    formats: MARKDOWN,
    subjects: &["OBS Translation Questions"],
    resource_type: "help",
    forbidden_title_words: &[],
    project_count: ProjectCount::Exactly(1),
    source_identifier: Some("obs-tq"),
    requires_original_language_relation: false,
    entry: EntryRule::StoryHelps {
        titles: &["Open Bible Stories Translation Questions"],
    },
};

/// The rule bundle for a project type.
pub fn rules_for(project_type: ProjectType) -> &'static RuleBundle {
    match project_type {
        ProjectType::Tn => &TN,
        ProjectType::TnTsv => &TN_TSV,
        ProjectType::Tq => &TQ,
        ProjectType::Tw => &TW,
        ProjectType::Ta => &TA,
        ProjectType::Ulb => &ULB,
        ProjectType::Udb => &UDB,
        ProjectType::Ust => &UST,
        ProjectType::Iev => &IEV,
        ProjectType::Irv => &IRV,
        ProjectType::Isv => &ISV,
        ProjectType::Obs => &OBS,
        ProjectType::ObsTn => &OBS_TN,
        ProjectType::ObsTq => &OBS_TQ,
    }
}

/// Resolve the effective project type from the raw identifier and format.
///
/// Returns `None` for identifiers outside the enumeration. A `tn`
/// identifier with a tabular format becomes `tn-tsv`.
pub fn resolve_project_type(identifier: &str, format: Option<&str>) -> Option<ProjectType> {
    match ProjectType::from_identifier(identifier)? {
        ProjectType::Tn if format == Some(TSV_FORMAT) => Some(ProjectType::TnTsv),
        other => Some(other),
    }
}
