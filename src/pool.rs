//! Character pool derived from a policy.

use crate::error::GenerateError;
use crate::policy::{AMBIGUOUS, CharClass, Policy};

/// The ordered set of characters a generator draws from.
///
/// Never empty once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<char>,
}

impl Pool {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub(crate) fn get(&self, index: usize) -> char {
        self.chars[index]
    }
}

/// Builds the effective pool for `policy`.
///
/// Alphabets are concatenated in the fixed order upper, lower, digits,
/// symbols so entropy figures are reproducible; ambiguous characters are
/// removed afterwards when requested.
pub fn build_pool(policy: &Policy) -> Result<Pool, GenerateError> {
    let chars: Vec<char> = CharClass::ALL
        .into_iter()
        .filter(|class| policy.is_enabled(*class))
        .flat_map(|class| class.alphabet().chars())
        .filter(|c| !(policy.avoid_ambiguous && AMBIGUOUS.contains(*c)))
        .collect();

    if chars.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Character pool is empty for policy");
        return Err(GenerateError::EmptyPool);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(pool_size = chars.len(), "character pool built");

    Ok(Pool { chars })
}
