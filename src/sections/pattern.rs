//! Pattern section - rejects keyboard runs and simple sequences.

use super::{Rejection, SectionResult};
use crate::policy::Policy;

/// Checks the candidate against the policy's forbidden patterns.
pub fn pattern_section(candidate: &str, policy: &Policy) -> SectionResult {
    if policy.patterns.matches(candidate) {
        return Some(Rejection::ForbiddenPattern);
    }
    None
}
