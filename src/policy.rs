//! Generation policy and character classes.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::GenerateError;
use crate::patterns::PatternSet;

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Printable ASCII punctuation.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easily confused with one another when read.
pub const AMBIGUOUS: &str = "O0l1I|";

/// A character class a policy can enable.
///
/// Ordering follows the pool concatenation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// Every class, in pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// The fixed alphabet of this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if c.is_ascii_punctuation() {
            Some(CharClass::Symbol)
        } else {
            None
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        };
        f.write_str(name)
    }
}

/// Declarative description of the passwords to generate.
///
/// The policy is owned by the caller and only read by the generator,
/// so it can be tweaked freely between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Number of characters in each generated password.
    pub length: usize,
    /// Enabled character classes.
    pub classes: BTreeSet<CharClass>,
    /// Drop [`AMBIGUOUS`] characters from the pool.
    pub avoid_ambiguous: bool,
    /// Minimum occurrences per class. Absent classes default to zero.
    pub min_per_class: BTreeMap<CharClass, usize>,
    /// Limit runs of the same character.
    pub avoid_repeats: bool,
    /// Longest allowed run when `avoid_repeats` is set.
    pub max_consecutive_repeats: usize,
    /// Forbidden low-entropy substrings.
    pub patterns: PatternSet,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharClass::ALL.into_iter().collect(),
            avoid_ambiguous: true,
            min_per_class: BTreeMap::new(),
            avoid_repeats: true,
            max_consecutive_repeats: 2,
            patterns: PatternSet::default(),
        }
    }
}

impl Policy {
    /// Creates a policy of the given length with no classes enabled.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: BTreeSet::new(),
            avoid_ambiguous: false,
            min_per_class: BTreeMap::new(),
            avoid_repeats: false,
            max_consecutive_repeats: 1,
            patterns: PatternSet::default(),
        }
    }

    pub fn with_class(mut self, class: CharClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn with_min(mut self, class: CharClass, min: usize) -> Self {
        self.min_per_class.insert(class, min);
        self
    }

    pub fn avoid_ambiguous(mut self, avoid: bool) -> Self {
        self.avoid_ambiguous = avoid;
        self
    }

    /// Limits runs of identical characters to `max`.
    pub fn max_repeats(mut self, max: usize) -> Self {
        self.avoid_repeats = true;
        self.max_consecutive_repeats = max;
        self
    }

    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        self.classes.contains(&class)
    }

    /// Minimum count required for `class`.
    pub fn min_for(&self, class: CharClass) -> usize {
        self.min_per_class.get(&class).copied().unwrap_or(0)
    }

    /// Rejects policies that are structurally meaningless.
    ///
    /// Minimum counts summing past the length are not caught here;
    /// such a policy simply never produces an acceptable candidate.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.length == 0 {
            return Err(GenerateError::InvalidPolicy(
                "length must be at least 1".to_string(),
            ));
        }
        if self.avoid_repeats && self.max_consecutive_repeats == 0 {
            return Err(GenerateError::InvalidPolicy(
                "max_consecutive_repeats must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_cover_printable_ascii() {
        let total: usize = CharClass::ALL.iter().map(|c| c.alphabet().len()).sum();
        assert_eq!(total, 94);
        for c in CharClass::ALL {
            assert!(c.alphabet().chars().all(|ch| CharClass::of(ch) == Some(c)));
        }
    }

    #[test]
    fn test_class_of_non_ascii() {
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('é'), None);
        assert_eq!(CharClass::of('|'), Some(CharClass::Symbol));
    }

    #[test]
    fn test_ambiguous_chars_belong_to_classes() {
        assert!(AMBIGUOUS.chars().all(|c| CharClass::of(c).is_some()));
    }

    #[test]
    fn test_min_for_defaults_to_zero() {
        let policy = Policy::new(8).with_min(CharClass::Digit, 3);
        assert_eq!(policy.min_for(CharClass::Digit), 3);
        assert_eq!(policy.min_for(CharClass::Upper), 0);
    }

    #[test]
    fn test_validate_zero_length() {
        let policy = Policy::new(0).with_class(CharClass::Lower);
        assert!(matches!(
            policy.validate(),
            Err(GenerateError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_validate_zero_repeats() {
        let policy = Policy::new(8).with_class(CharClass::Lower).max_repeats(0);
        assert!(matches!(
            policy.validate(),
            Err(GenerateError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_default_policy_is_valid() {
        assert!(Policy::default().validate().is_ok());
    }
}
