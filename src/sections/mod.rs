//! Candidate acceptance sections
//!
//! Each section checks one aspect of a candidate against the policy.

mod minimum;
mod pattern;
mod presence;
mod repeats;

pub use minimum::minimum_count_section;
pub use pattern::pattern_section;
pub use presence::class_presence_section;
pub use repeats::repeat_run_section;

use std::fmt;

use crate::policy::CharClass;

/// Why a candidate was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// An enabled class does not appear at all.
    MissingClass(CharClass),
    /// A class appears fewer times than its minimum.
    BelowMinimum {
        class: CharClass,
        required: usize,
        found: usize,
    },
    /// A forbidden substring appears, forwards or reversed.
    ForbiddenPattern,
    /// A character repeats more than `max` times in a row.
    RepeatRun { max: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingClass(class) => write!(f, "Missing: {}", class),
            Rejection::BelowMinimum {
                class,
                required,
                found,
            } => write!(f, "Needs at least {} {}, found {}", required, class, found),
            Rejection::ForbiddenPattern => f.write_str("Contains a forbidden pattern"),
            Rejection::RepeatRun { max } => {
                write!(f, "Repeats a character more than {} times in a row", max)
            }
        }
    }
}

/// Result type for section functions.
/// - `Some(rejection)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Rejection>;
