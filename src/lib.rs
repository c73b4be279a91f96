//! Policy-driven password generation
//!
//! This library generates passwords that satisfy a declarative policy,
//! scores their entropy, and checks them against the Pwned Passwords
//! breach corpus without revealing the password.
//!
//! # Features
//!
//! - `async` (default): Enables breach checks with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PATTERNS_PATH`: Custom forbidden pattern file read by
//!   [`PatternSet::from_env`] (default: built-in keyboard runs)
//! - `PWD_BREACH_ENDPOINT`: Range API base URL
//!   (default: `https://api.pwnedpasswords.com/range`)
//! - `PWD_BREACH_TIMEOUT_SECS`: Breach request timeout (default: 10)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{CharClass, Policy, generate, score};
//! use secrecy::ExposeSecret;
//!
//! let policy = Policy::new(18)
//!     .with_class(CharClass::Upper)
//!     .with_class(CharClass::Lower)
//!     .with_class(CharClass::Digit)
//!     .with_class(CharClass::Symbol)
//!     .avoid_ambiguous(true)
//!     .with_min(CharClass::Symbol, 1)
//!     .max_repeats(2);
//!
//! let password = generate(&policy).expect("Failed to generate password");
//! let report = score(&password, &policy).expect("Failed to score password");
//!
//! println!("Password: {}", password.expose_secret());
//! println!("Strength: {} ({:.1} bits)", report.tier, report.entropy_bits);
//!
//! #[cfg(feature = "async")]
//! # async fn check(password: secrecy::SecretString) {
//! let checker = pwd_forge::BreachChecker::new().expect("Failed to build client");
//! match checker.check(&password, None).await {
//!     Ok(result) if result.breached => println!("Seen {} times", result.occurrence_count),
//!     Ok(_) => println!("Not found in breach corpus"),
//!     Err(e) => println!("Breach check failed: {}", e),
//! }
//! # }
//! ```

// Internal modules
mod acceptance;
mod error;
mod generator;
mod patterns;
mod policy;
mod pool;
mod sections;
mod strength;

#[cfg(feature = "async")]
mod breach;

// Public API
pub use acceptance::{is_acceptable, rejection};
pub use error::{GenerateError, PatternError};
pub use generator::{MAX_ATTEMPTS, Sampling, generate, generate_with, sample};
pub use patterns::{DEFAULT_PATTERNS, PATTERNS_PATH_VAR, PatternSet};
pub use policy::{AMBIGUOUS, CharClass, DIGITS, LOWERCASE, Policy, SYMBOLS, UPPERCASE};
pub use pool::{Pool, build_pool};
pub use sections::Rejection;
pub use strength::{StrengthReport, StrengthTier, classify, entropy, entropy_bits, score};

#[cfg(feature = "async")]
pub use error::BreachError;

#[cfg(feature = "async")]
pub use breach::{
    BreachChecker, BreachConfig, BreachMonitor, BreachResult, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT,
    ENDPOINT_VAR, HashRange, HttpRangeSource, PREFIX_LEN, RangeSource, RequestToken, SUFFIX_LEN,
    TIMEOUT_VAR,
};

pub use secrecy::{ExposeSecret, SecretString};
