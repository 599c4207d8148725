//! # Canonical Book Order
//!
//! Static table of the 66 canonical books keyed by their USFM identifier.
//! The `sort` value is the order a project entry must carry in a manifest:
//! Old Testament books are numbered 1–39 and New Testament books 41–67,
//! matching the `NN-BOOK.usfm` file naming convention.

use serde::Serialize;

/// Which half of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    /// Genesis through Malachi.
    Old,
    /// Matthew through Revelation.
    New,
}

impl Testament {
    /// The `categories` value used for project entries of this testament.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Old => "bible-ot",
            Self::New => "bible-nt",
        }
    }
}

/// One canonical book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Upper-case USFM identifier, e.g. `GEN`.
    pub id: &'static str,
    /// Canonical order.
    pub sort: i64,
}

impl Book {
    /// The testament the book belongs to.
    pub fn testament(&self) -> Testament {
        if self.sort < 40 {
            Testament::Old
        } else {
            Testament::New
        }
    }
}

const fn book(id: &'static str, sort: i64) -> Book {
    Book { id, sort }
}

/// All canonical books in order.
pub static BOOKS: [Book; 66] = [
    book("GEN", 1),
    book("EXO", 2),
    book("LEV", 3),
    book("NUM", 4),
    book("DEU", 5),
    book("JOS", 6),
    book("JDG", 7),
    book("RUT", 8),
    book("1SA", 9),
    book("2SA", 10),
    book("1KI", 11),
    book("2KI", 12),
    book("1CH", 13),
    book("2CH", 14),
    book("EZR", 15),
    book("NEH", 16),
    book("EST", 17),
    book("JOB", 18),
    book("PSA", 19),
    book("PRO", 20),
    book("ECC", 21),
    book("SNG", 22),
    book("ISA", 23),
    book("JER", 24),
    book("LAM", 25),
    book("EZK", 26),
    book("DAN", 27),
    book("HOS", 28),
    book("JOL", 29),
    book("AMO", 30),
    book("OBA", 31),
    book("JON", 32),
    book("MIC", 33),
    book("NAM", 34),
    book("HAB", 35),
    book("ZEP", 36),
    book("HAG", 37),
    book("ZEC", 38),
    book("MAL", 39),
    book("MAT", 41),
    book("MRK", 42),
    book("LUK", 43),
    book("JHN", 44),
    book("ACT", 45),
    book("ROM", 46),
    book("1CO", 47),
    book("2CO", 48),
    book("GAL", 49),
    book("EPH", 50),
    book("PHP", 51),
    book("COL", 52),
    book("1TH", 53),
    book("2TH", 54),
    book("1TI", 55),
    book("2TI", 56),
    book("TIT", 57),
    book("PHM", 58),
    book("HEB", 59),
    book("JAS", 60),
    book("1PE", 61),
    book("2PE", 62),
    book("1JN", 63),
    book("2JN", 64),
    book("3JN", 65),
    book("JUD", 66),
    book("REV", 67),
];

/// Look up a book by identifier, case-insensitively.
pub fn lookup(id: &str) -> Option<&'static Book> {
    BOOKS.iter().find(|b| b.id.eq_ignore_ascii_case(id))
}
