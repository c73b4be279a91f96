//! Minimum count section - enforces per-class minimums.

use super::{Rejection, SectionResult};
use crate::policy::{CharClass, Policy};

/// Checks that each class with a minimum appears often enough.
///
/// Minimums apply even to disabled classes, which makes such a policy
/// unsatisfiable.
pub fn minimum_count_section(candidate: &str, policy: &Policy) -> SectionResult {
    for (&class, &required) in &policy.min_per_class {
        if required == 0 {
            continue;
        }
        let found = candidate
            .chars()
            .filter(|c| CharClass::of(*c) == Some(class))
            .count();
        if found < required {
            return Some(Rejection::BelowMinimum {
                class,
                required,
                found,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_not_met() {
        let policy = Policy::new(8)
            .with_class(CharClass::Lower)
            .with_class(CharClass::Digit)
            .with_min(CharClass::Digit, 3);
        let result = minimum_count_section("abcdef12", &policy);
        assert_eq!(
            result,
            Some(Rejection::BelowMinimum {
                class: CharClass::Digit,
                required: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_minimum_exactly_met() {
        let policy = Policy::new(8).with_min(CharClass::Symbol, 2);
        assert_eq!(minimum_count_section("ab!cd?ef", &policy), None);
    }

    #[test]
    fn test_zero_minimum_ignored() {
        let policy = Policy::new(4).with_min(CharClass::Upper, 0);
        assert_eq!(minimum_count_section("abcd", &policy), None);
    }
}
