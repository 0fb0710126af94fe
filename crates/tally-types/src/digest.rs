use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Hex-encoded output of the content hash function.
///
/// A real digest is always 64 lowercase hex characters (BLAKE3-256).
/// [`Digest::empty`] is the designated sentinel: the empty string, used for
/// the genesis header's `previous_hash`/`transaction_root`, the empty-batch
/// tree root, and odd-layer padding. A sentinel can never collide with a
/// real digest because it is never produced by the hash function.
///
/// Digests are kept in hex form so that pair hashing
/// (`hash(left ++ right)`) over re-parsed wire data reproduces the exact
/// byte stream the sealing node hashed. On the wire a digest is a plain
/// string; deserialization routes through [`Digest::from_hex`], so a
/// malformed peer digest is rejected at the boundary.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Digest(String);

impl Digest {
    /// Length in characters of a non-sentinel digest.
    pub const HEX_LEN: usize = 64;

    /// Digest raw bytes.
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(hex::encode(blake3::hash(data).as_bytes()))
    }

    /// The empty sentinel digest.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Returns `true` if this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The hex text of this digest (empty string for the sentinel).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 hex characters).
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(8)]
    }

    /// Returns `true` if the first `count` hex digits are all zero.
    ///
    /// This is the proof-of-work target check. The sentinel fails for any
    /// `count > 0`.
    pub fn has_leading_zeros(&self, count: usize) -> bool {
        self.0.len() >= count && self.0.bytes().take(count).all(|b| b == b'0')
    }

    /// Parse a digest from hex text. The empty string parses to the sentinel.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.is_empty() {
            return Ok(Self::empty());
        }
        if s.len() != Self::HEX_LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::HEX_LEN,
                actual: s.len(),
            });
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(TypeError::InvalidHex(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl TryFrom<String> for Digest {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Digest(empty)")
        } else {
            write!(f, "Digest({})", self.short())
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_bytes_is_deterministic() {
        let d1 = Digest::of_bytes(b"hello world");
        let d2 = Digest::of_bytes(b"hello world");
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_input_different_digest() {
        assert_ne!(Digest::of_bytes(b"a"), Digest::of_bytes(b"b"));
    }

    #[test]
    fn digest_is_64_lowercase_hex() {
        let d = Digest::of_bytes(b"data");
        assert_eq!(d.as_str().len(), Digest::HEX_LEN);
        assert!(d
            .as_str()
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn empty_sentinel_is_distinguishable() {
        let empty = Digest::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.as_str(), "");
        assert_ne!(empty, Digest::of_bytes(b""));
    }

    #[test]
    fn leading_zeros_check() {
        let d = Digest::from_hex(&format!("00ab{}", "0".repeat(60))).unwrap();
        assert!(d.has_leading_zeros(0));
        assert!(d.has_leading_zeros(2));
        assert!(!d.has_leading_zeros(3));
    }

    #[test]
    fn sentinel_fails_any_positive_target() {
        assert!(Digest::empty().has_leading_zeros(0));
        assert!(!Digest::empty().has_leading_zeros(1));
    }

    #[test]
    fn from_hex_round_trip() {
        let d = Digest::of_bytes(b"round trip");
        let parsed = Digest::from_hex(d.as_str()).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        let err = Digest::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 64,
                actual: 4
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let err = Digest::from_hex(&"zz".repeat(32)).unwrap_err();
        assert!(matches!(err, TypeError::InvalidHex(_)));
    }

    #[test]
    fn serde_round_trips_as_plain_hex() {
        let d = Digest::of_bytes(b"wire");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{}\"", d.as_str()));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }

    #[test]
    fn deserialization_validates_like_from_hex() {
        assert!(serde_json::from_str::<Digest>("\"abcd\"").is_err());
        let upper = format!("\"{}\"", "A".repeat(64));
        assert!(serde_json::from_str::<Digest>(&upper).is_err());
        let sentinel: Digest = serde_json::from_str("\"\"").unwrap();
        assert!(sentinel.is_empty());
    }
}
