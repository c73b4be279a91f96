//! Range response parsing.

use super::hash::SUFFIX_LEN;
use crate::error::BreachError;

/// Scans a `SUFFIX:COUNT` body for `suffix`.
///
/// Every record is validated, so a malformed body is reported even when
/// the match occurs before the bad line. Suffix comparison ignores case.
pub(crate) fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>, BreachError> {
    let mut found = None;
    for (idx, raw) in body.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || BreachError::Malformed { line: idx + 1 };

        let (hash, count) = line.split_once(':').ok_or_else(malformed)?;
        let hash = hash.trim();
        if hash.len() != SUFFIX_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let count: u64 = count.trim().parse().map_err(|_| malformed())?;

        if found.is_none() && hash.eq_ignore_ascii_case(suffix) {
            found = Some(count);
        }
    }
    Ok(found)
}
