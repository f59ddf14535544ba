//! Request signatures.
//!
//! Every request carries a `signature` parameter: the hex digest of the
//! unsigned request URL with the game's private key appended. The platform
//! recomputes the same digest to check that the request came from a holder of
//! the key. MD5 is the platform's historical choice and stays the default for
//! wire compatibility; it is not a security primitive here.

use md5::{Digest, Md5};
use sha1::Sha1;

/// Digest used to compute request signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    /// MD5, the digest every platform endpoint accepts.
    #[default]
    Md5,
    /// SHA-1.
    Sha1,
}

impl SignatureAlgorithm {
    /// Sign `input` with `private_key` using this algorithm.
    pub fn sign(self, input: &str, private_key: &str) -> String {
        match self {
            Self::Md5 => sign_with::<Md5>(input, private_key),
            Self::Sha1 => sign_with::<Sha1>(input, private_key),
        }
    }

    /// Length of the hex-encoded signature this algorithm produces.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
        }
    }
}

/// Compute the default (MD5) signature of `input` followed by `private_key`.
///
/// ```
/// use gamejolt_client::signature::sign;
///
/// let sig = sign("http://gamejolt.com/api/game/v1/scores/tables/?format=json&game_id=1", "key");
/// assert_eq!(sig.len(), 32);
/// assert_eq!(sig, sig.to_lowercase());
/// ```
pub fn sign(input: &str, private_key: &str) -> String {
    SignatureAlgorithm::Md5.sign(input, private_key)
}

/// Compute the signature of `input` followed by `private_key` with any digest.
pub fn sign_with<D: Digest>(input: &str, private_key: &str) -> String {
    let mut hasher = D::new();
    hasher.update(input.as_bytes());
    hasher.update(private_key.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn md5_known_vector() {
        // md5("abc")
        assert_eq!(sign("ab", "c"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(sign("", ""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn sha1_known_vector() {
        // sha1("abc")
        assert_eq!(
            SignatureAlgorithm::Sha1.sign("a", "bc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn key_is_a_raw_suffix() {
        assert_eq!(sign("query", "key"), sign("querykey", ""));
        assert_eq!(sign("query", "key"), sign("", "querykey"));
    }

    #[test]
    fn deterministic() {
        let a = sign("format=json&game_id=42", "secret");
        let b = sign("format=json&game_id=42", "secret");
        assert_eq!(a, b);
    }

    #[test]
    fn single_character_change_alters_signature() {
        let base = sign("format=json&game_id=42", "secret");
        assert_ne!(base, sign("format=json&game_id=43", "secret"));
        assert_ne!(base, sign("format=json&game_id=42", "secreT"));
    }

    #[test]
    fn output_is_lowercase_hex_of_expected_length() {
        for algorithm in [SignatureAlgorithm::Md5, SignatureAlgorithm::Sha1] {
            let sig = algorithm.sign("format=json&game_id=1", "k");
            assert_eq!(sig.len(), algorithm.hex_len());
            assert!(sig
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn default_algorithm_is_md5() {
        assert_eq!(SignatureAlgorithm::default(), SignatureAlgorithm::Md5);
        assert_eq!(sign("x", "y"), sign_with::<Md5>("x", "y"));
    }
}
