//! SHA-1 range split used by the k-anonymity lookup.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Hex characters of the hash sent to the service.
pub const PREFIX_LEN: usize = 5;

/// Hex characters of the hash kept locally.
pub const SUFFIX_LEN: usize = 35;

/// Uppercase SHA-1 of a password split into the public prefix and the
/// private suffix.
#[derive(Clone, PartialEq, Eq)]
pub struct HashRange {
    prefix: String,
    suffix: String,
}

impl HashRange {
    pub fn of(password: &SecretString) -> Self {
        let digest = Sha1::digest(password.expose_secret().as_bytes());
        let mut hash = hex::encode_upper(digest);
        let suffix = hash.split_off(PREFIX_LEN);
        Self {
            prefix: hash,
            suffix,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl std::fmt::Debug for HashRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashRange")
            .field("prefix", &self.prefix)
            .field("suffix", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_range_known_password() {
        let pwd = SecretString::new("password".to_string().into());
        let range = HashRange::of(&pwd);
        assert_eq!(range.prefix(), "5BAA6");
        assert_eq!(range.suffix(), "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_hash_range_lengths() {
        let pwd = SecretString::new("".to_string().into());
        let range = HashRange::of(&pwd);
        assert_eq!(range.prefix().len(), PREFIX_LEN);
        assert_eq!(range.suffix().len(), SUFFIX_LEN);
        assert!(range.suffix().chars().all(|c| !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_debug_hides_suffix() {
        let pwd = SecretString::new("password".to_string().into());
        let debug = format!("{:?}", HashRange::of(&pwd));
        assert!(debug.contains("5BAA6"));
        assert!(!debug.contains("1E4C9B93"));
    }
}
