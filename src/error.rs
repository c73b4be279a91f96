//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating or scoring a password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Character pool is empty, enable at least one character class")]
    EmptyPool,
    #[error("No acceptable password after {attempts} attempts")]
    PolicyUnsatisfiable { attempts: usize },
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

/// Errors raised while loading a forbidden pattern list.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Pattern file is empty")]
    EmptyFile,
}

/// Errors raised by the breach lookup.
///
/// None of these mean "not breached"; the check simply did not complete.
#[cfg(feature = "async")]
#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Breach service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Breach service returned status {0}")]
    Status(u16),
    #[error("Malformed breach service response at line {line}")]
    Malformed { line: usize },
    #[error("Breach check cancelled")]
    Cancelled,
}
