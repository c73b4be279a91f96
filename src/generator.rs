//! Password generator - rejection sampling against a policy.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};

use crate::acceptance::is_acceptable;
use crate::error::GenerateError;
use crate::policy::Policy;
use crate::pool::{Pool, build_pool};

/// Attempts made before a policy is declared unsatisfiable.
pub const MAX_ATTEMPTS: usize = 1000;

/// Outcome of a bounded sampling run.
#[derive(Debug)]
pub enum Sampling {
    Accepted(SecretString),
    Exhausted { attempts: usize },
}

/// Generates a password satisfying `policy` using the operating system
/// CSPRNG.
///
/// # Errors
/// - `EmptyPool` if the policy leaves no characters to draw from
/// - `PolicyUnsatisfiable` if no candidate passed within [`MAX_ATTEMPTS`]
/// - `InvalidPolicy` if the policy is structurally invalid
pub fn generate(policy: &Policy) -> Result<SecretString, GenerateError> {
    generate_with(policy, &mut OsRng)
}

/// Generates a password with a caller-supplied cryptographic RNG.
pub fn generate_with<R>(policy: &Policy, rng: &mut R) -> Result<SecretString, GenerateError>
where
    R: RngCore + CryptoRng,
{
    policy.validate()?;
    let pool = build_pool(policy)?;

    match sample(&pool, policy, rng, MAX_ATTEMPTS) {
        Sampling::Accepted(password) => Ok(password),
        Sampling::Exhausted { attempts } => {
            #[cfg(feature = "tracing")]
            tracing::warn!(attempts, "password policy could not be satisfied");
            Err(GenerateError::PolicyUnsatisfiable { attempts })
        }
    }
}

/// Draws candidates from `pool` until one is accepted or `budget`
/// attempts have been used.
pub fn sample<R>(pool: &Pool, policy: &Policy, rng: &mut R, budget: usize) -> Sampling
where
    R: RngCore + CryptoRng,
{
    for _attempt in 1..=budget {
        let candidate = draw(pool, policy.length, rng);
        if is_acceptable(candidate.expose_secret(), policy) {
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt = _attempt, "candidate accepted");
            return Sampling::Accepted(candidate);
        }
        // rejected candidates are zeroized on drop
    }
    Sampling::Exhausted { attempts: budget }
}

fn draw<R: RngCore>(pool: &Pool, length: usize, rng: &mut R) -> SecretString {
    let mut buf = String::with_capacity(length);
    for _ in 0..length {
        buf.push(pool.get(uniform_index(rng, pool.len())));
    }
    SecretString::new(buf.into_boxed_str())
}

/// Uniform index in `0..n` without modulo bias.
///
/// Raw values at or above the largest multiple of `n` are redrawn.
fn uniform_index<R: RngCore>(rng: &mut R, n: usize) -> usize {
    debug_assert!(n > 0 && n <= u32::MAX as usize);
    let n = n as u32;
    let zone = u32::MAX - (u32::MAX % n);
    loop {
        let value = rng.next_u32();
        if value < zone {
            return (value % n) as usize;
        }
    }
}
