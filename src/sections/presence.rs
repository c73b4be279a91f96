//! Class presence section - every enabled class must appear at least once.

use super::{Rejection, SectionResult};
use crate::policy::{CharClass, Policy};

/// Checks that each enabled class is represented in the candidate.
///
/// # Returns
/// - `Some(Rejection::MissingClass)` for the first absent class
/// - `None` if every enabled class is present
pub fn class_presence_section(candidate: &str, policy: &Policy) -> SectionResult {
    CharClass::ALL
        .into_iter()
        .filter(|class| policy.is_enabled(*class))
        .find(|class| !candidate.chars().any(|c| CharClass::of(c) == Some(*class)))
        .map(Rejection::MissingClass)
}
