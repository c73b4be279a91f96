//! Repeat run section - limits consecutive identical characters.

use super::{Rejection, SectionResult};
use crate::policy::Policy;

/// Checks that no character repeats more than the policy allows.
///
/// Does nothing unless `avoid_repeats` is set.
pub fn repeat_run_section(candidate: &str, policy: &Policy) -> SectionResult {
    if !policy.avoid_repeats {
        return None;
    }
    let max = policy.max_consecutive_repeats;

    let mut prev = None;
    let mut run = 0;
    for c in candidate.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run > max {
            return Some(Rejection::RepeatRun { max });
        }
    }
    None
}
