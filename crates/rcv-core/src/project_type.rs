//! # Project Types — Single Source of Truth
//!
//! Defines the [`ProjectType`] enum with all 14 recognized resource
//! container kinds. Every rule bundle in `rcv-manifest` is keyed by this
//! enum; adding a variant forces every `match` on it to be revisited.
//!
//! `tn-tsv` never appears as a raw `dublin_core.identifier`. It is the
//! effective type of a `tn` container whose format is `text/tsv`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RcvError;

/// The classification of a resource container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    /// translationNotes in markdown.
    #[serde(rename = "tn")]
    Tn,
    /// translationNotes in tab-separated values.
    #[serde(rename = "tn-tsv")]
    TnTsv,
    /// translationQuestions.
    #[serde(rename = "tq")]
    Tq,
    /// translationWords.
    #[serde(rename = "tw")]
    Tw,
    /// translationAcademy.
    #[serde(rename = "ta")]
    Ta,
    /// Unlocked Literal Bible.
    #[serde(rename = "ulb")]
    Ulb,
    /// Unlocked Dynamic Bible.
    #[serde(rename = "udb")]
    Udb,
    /// unfoldingWord Simplified Text.
    #[serde(rename = "ust")]
    Ust,
    /// Indian Easy Version.
    #[serde(rename = "iev")]
    Iev,
    /// Indian Revised Version.
    #[serde(rename = "irv")]
    Irv,
    /// Indian Standard Version.
    #[serde(rename = "isv")]
    Isv,
    /// Open Bible Stories.
    #[serde(rename = "obs")]
    Obs,
    /// Open Bible Stories translationNotes.
    #[serde(rename = "obs-tn")]
    ObsTn,
    /// Open Bible Stories translationQuestions.
    #[serde(rename = "obs-tq")]
    ObsTq,
}

impl ProjectType {
    /// Return all project types as a slice.
    pub fn all() -> &'static [ProjectType] {
        &[
            Self::Tn,
            Self::TnTsv,
            Self::Tq,
            Self::Tw,
            Self::Ta,
            Self::Ulb,
            Self::Udb,
            Self::Ust,
            Self::Iev,
            Self::Irv,
            Self::Isv,
            Self::Obs,
            Self::ObsTn,
            Self::ObsTq,
        ]
    }

    /// The total number of project types.
    pub const COUNT: usize = 14;

    /// The identifier string used in manifests and relations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tn => "tn",
            Self::TnTsv => "tn-tsv",
            Self::Tq => "tq",
            Self::Tw => "tw",
            Self::Ta => "ta",
            Self::Ulb => "ulb",
            Self::Udb => "udb",
            Self::Ust => "ust",
            Self::Iev => "iev",
            Self::Irv => "irv",
            Self::Isv => "isv",
            Self::Obs => "obs",
            Self::ObsTn => "obs-tn",
            Self::ObsTq => "obs-tq",
        }
    }

    /// Parse a raw `dublin_core.identifier` value.
    ///
    /// Unlike [`FromStr`], this rejects `tn-tsv`, which is only ever
    /// derived from `tn` plus a tabular format.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id.parse::<Self>() {
            Ok(Self::TnTsv) | Err(_) => None,
            Ok(pt) => Some(pt),
        }
    }

    /// Whether this is a scripture text (one project per book, USFM).
    pub fn is_bible(&self) -> bool {
        matches!(
            self,
            Self::Ulb | Self::Udb | Self::Ust | Self::Iev | Self::Irv | Self::Isv
        )
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = RcvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|pt| pt.as_str() == s)
            .ok_or_else(|| RcvError::UnknownProjectType(s.to_string()))
    }
}
