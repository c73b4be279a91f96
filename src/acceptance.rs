//! Candidate acceptance - runs every section against a candidate.

use crate::policy::Policy;
use crate::sections::{
    Rejection, SectionResult, class_presence_section, minimum_count_section, pattern_section,
    repeat_run_section,
};

type Section = fn(&str, &Policy) -> SectionResult;

// Cheap structural checks first, pattern scan after.
const SECTIONS: [(&str, Section); 4] = [
    ("presence", class_presence_section),
    ("minimum", minimum_count_section),
    ("pattern", pattern_section),
    ("repeats", repeat_run_section),
];

/// Returns the first reason `candidate` violates `policy`, if any.
pub fn rejection(candidate: &str, policy: &Policy) -> Option<Rejection> {
    for (_name, section) in SECTIONS.iter() {
        if let Some(rejection) = section(candidate, policy) {
            #[cfg(feature = "tracing")]
            tracing::trace!(section = *_name, reason = %rejection, "candidate rejected");
            return Some(rejection);
        }
    }
    None
}

/// Returns `true` if `candidate` satisfies every rule in `policy`.
pub fn is_acceptable(candidate: &str, policy: &Policy) -> bool {
    rejection(candidate, policy).is_none()
}
