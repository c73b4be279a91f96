//! Forbidden pattern lists
//!
//! Handles loading and matching the low-entropy substrings that
//! generated passwords must not contain.

use std::path::{Path, PathBuf};

use crate::error::PatternError;

/// Keyboard runs and simple ascending sequences rejected by default.
pub const DEFAULT_PATTERNS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "123456", "abcdef"];

/// Environment variable naming a custom pattern file.
pub const PATTERNS_PATH_VAR: &str = "PWD_PATTERNS_PATH";

/// A set of forbidden substrings, matched case-insensitively in both
/// directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    // Each entry holds the lowercase pattern and its reversal.
    patterns: Vec<(String, String)>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS.iter().copied())
    }
}

impl PatternSet {
    /// Builds a set from arbitrary patterns. Blank entries are ignored.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .map(|p| {
                let reversed = p.chars().rev().collect();
                (p, reversed)
            })
            .collect();
        Self { patterns }
    }

    /// A set that forbids nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if `candidate` contains any pattern forwards or
    /// reversed, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let lower = candidate.to_lowercase();
        self.patterns
            .iter()
            .any(|(fwd, rev)| lower.contains(fwd.as_str()) || lower.contains(rev.as_str()))
    }

    /// Loads one pattern per line from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PatternError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern list loading FAILED: FileNotFound {:?}", path);
            return Err(PatternError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let set = Self::new(content.lines());

        if set.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern list loading FAILED: Empty file {:?}", path);
            return Err(PatternError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Pattern list loaded: {} patterns from {:?}", set.len(), path);

        Ok(set)
    }

    /// Loads the set named by `PWD_PATTERNS_PATH`, or the built-in
    /// defaults when the variable is unset.
    pub fn from_env() -> Result<Self, PatternError> {
        match std::env::var_os(PATTERNS_PATH_VAR) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }
}
