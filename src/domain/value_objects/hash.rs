//! Fingerprint Value Object
//!
//! A SHA-256 digest over the exact serialized bytes of a dataset.
//! Used by downstream consumers to detect drift between generations.

use std::fmt;

use sha2::{Digest, Sha256};

/// Dataset fingerprint
///
/// Always 64 lowercase hexadecimal characters, no prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of the hex form of a SHA-256 digest
    pub const HEX_LEN: usize = 64;

    /// Compute the fingerprint of raw bytes
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(bytes)))
    }

    /// Parse a recorded fingerprint (as found in a sidecar file)
    ///
    /// Surrounding whitespace is ignored; anything that is not exactly
    /// 64 lowercase hex characters is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let lower_hex = |b: u8| b.is_ascii_digit() || (b'a'..=b'f').contains(&b);
        if s.len() != Self::HEX_LEN || !s.bytes().all(lower_hex) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    /// Hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sidecar file content: the hex digest and a single trailing newline
    pub fn sidecar_content(&self) -> String {
        format!("{}\n", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
