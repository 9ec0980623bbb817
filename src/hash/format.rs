//! Digest presentation helpers.

use subtle::ConstantTimeEq;

/// Lowercase hex, high nibble first. A Whirlpool digest yields 128 characters.
pub fn to_hex(digest: &[u8]) -> String {
    hex::encode(digest)
}

/// Compare two digests without short-circuiting on the first differing byte.
///
/// Digests of different lengths never match.
pub fn digests_equal(known: &[u8], candidate: &[u8]) -> bool {
    if known.len() != candidate.len() {
        return false;
    }
    known.ct_eq(candidate).into()
}
