//! Entropy scoring and strength tiers.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::GenerateError;
use crate::policy::Policy;
use crate::pool::{Pool, build_pool};

/// Discrete strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Normalized score shown for this tier.
    pub fn percentage(self) -> u8 {
        match self {
            StrengthTier::VeryWeak => 20,
            StrengthTier::Weak => 40,
            StrengthTier::Fair => 60,
            StrengthTier::Strong => 80,
            StrengthTier::VeryStrong => 100,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::VeryWeak => "very weak",
            StrengthTier::Weak => "weak",
            StrengthTier::Fair => "fair",
            StrengthTier::Strong => "strong",
            StrengthTier::VeryStrong => "very strong",
        };
        f.write_str(label)
    }
}

/// Entropy estimate for a password.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthReport {
    pub entropy_bits: f64,
    pub tier: StrengthTier,
    pub normalized_score: u8,
}

/// Upper bounds (exclusive) of each tier below `VeryStrong`.
const THRESHOLDS: [(f64, StrengthTier); 4] = [
    (28.0, StrengthTier::VeryWeak),
    (36.0, StrengthTier::Weak),
    (60.0, StrengthTier::Fair),
    (128.0, StrengthTier::Strong),
];

/// `length * log2(pool_size)`, assuming independent uniform draws.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Entropy of `password` when drawn from `pool`.
///
/// Ignores the slight skew rejection sampling introduces toward
/// policy-compliant strings.
pub fn entropy(password: &SecretString, pool: &Pool) -> f64 {
    entropy_bits(password.expose_secret().chars().count(), pool.len())
}

/// Maps an entropy figure to a strength tier.
///
/// Negative and NaN inputs are treated as zero bits.
pub fn classify(entropy_bits: f64) -> StrengthReport {
    let bits = if entropy_bits.is_nan() {
        0.0
    } else {
        entropy_bits.max(0.0)
    };
    let tier = THRESHOLDS
        .iter()
        .find(|(bound, _)| bits < *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(StrengthTier::VeryStrong);

    StrengthReport {
        entropy_bits: bits,
        tier,
        normalized_score: tier.percentage(),
    }
}

/// Scores `password` against the pool `policy` would generate from.
pub fn score(password: &SecretString, policy: &Policy) -> Result<StrengthReport, GenerateError> {
    let pool = build_pool(policy)?;
    Ok(classify(entropy(password, &pool)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CharClass;
    use proptest::prelude::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_entropy_email_policy() {
        let policy = Policy::default();
        let pool = build_pool(&policy).unwrap();
        let bits = entropy(&secret("Gh7#kP2$mWz9!xR4@v"), &pool);
        assert!((bits - 18.0 * 88f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_single_char_pool() {
        assert_eq!(entropy_bits(20, 1), 0.0);
        assert_eq!(entropy_bits(20, 0), 0.0);
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify(0.0).tier, StrengthTier::VeryWeak);
        assert_eq!(classify(27.99).tier, StrengthTier::VeryWeak);
        assert_eq!(classify(28.0).tier, StrengthTier::Weak);
        assert_eq!(classify(35.99).tier, StrengthTier::Weak);
        assert_eq!(classify(36.0).tier, StrengthTier::Fair);
        assert_eq!(classify(60.0).tier, StrengthTier::Strong);
        assert_eq!(classify(127.99).tier, StrengthTier::Strong);
        assert_eq!(classify(128.0).tier, StrengthTier::VeryStrong);
        assert_eq!(classify(f64::INFINITY).tier, StrengthTier::VeryStrong);
    }

    #[test]
    fn test_classify_percentages() {
        assert_eq!(classify(10.0).normalized_score, 20);
        assert_eq!(classify(30.0).normalized_score, 40);
        assert_eq!(classify(50.0).normalized_score, 60);
        assert_eq!(classify(100.0).normalized_score, 80);
        assert_eq!(classify(200.0).normalized_score, 100);
    }

    #[test]
    fn test_classify_invalid_input() {
        assert_eq!(classify(f64::NAN).tier, StrengthTier::VeryWeak);
        assert_eq!(classify(-5.0).entropy_bits, 0.0);
    }

    #[test]
    fn test_score_digits_only() {
        let policy = Policy::new(6).with_class(CharClass::Digit);
        let report = score(&secret("482913"), &policy).unwrap();
        assert_eq!(report.tier, StrengthTier::VeryWeak);
        assert!((report.entropy_bits - 6.0 * 10f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_score_empty_pool() {
        let policy = Policy::new(6);
        assert_eq!(
            score(&secret("abcdef"), &policy),
            Err(GenerateError::EmptyPool)
        );
    }

    proptest! {
        #[test]
        fn prop_entropy_monotonic_in_length(len in 0usize..256, extra in 0usize..64, pool in 1usize..200) {
            prop_assert!(entropy_bits(len + extra, pool) >= entropy_bits(len, pool));
        }

        #[test]
        fn prop_entropy_monotonic_in_pool(len in 0usize..256, pool in 1usize..200, extra in 0usize..64) {
            prop_assert!(entropy_bits(len, pool + extra) >= entropy_bits(len, pool));
        }

        #[test]
        fn prop_classify_total_and_ordered(a in 0f64..1000.0, b in 0f64..1000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (lo, hi) = (classify(lo), classify(hi));
            prop_assert!(lo.tier <= hi.tier);
            prop_assert!(lo.normalized_score <= hi.normalized_score);
        }
    }
}
