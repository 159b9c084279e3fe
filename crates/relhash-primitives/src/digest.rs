//! SHA-256 digest function and the fixed-width digest value.

use crate::{Canonical, TypePrefix, unsupported};
use sha2::{Digest as _, Sha256};
use std::fmt;
use thiserror::Error as ThisError;

/// Width of every digest in bytes.
pub const DIGEST_LEN: usize = 32;

///
/// DigestParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DigestParseError {
    #[error("digest hex must be {expected} characters, got {len}", expected = DIGEST_LEN * 2)]
    Length { len: usize },

    #[error("invalid hex digit 0x{byte:02x} at position {position}")]
    InvalidDigit { position: usize, byte: u8 },
}

///
/// Digest
///
/// Fixed 32-byte SHA-256 output. Compared and consumed as bytes only:
/// `std::hash::Hash` and `Display` abort instead of producing an identity
/// hash or a display string. Use `as_hex` for an explicit rendering.
///
/// `Debug` exists only for assertion and test failure output.
///

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// All-zero value; the aggregate of an empty collection.
    pub const ZERO: Self = Self([0; DIGEST_LEN]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Render as uppercase hexadecimal.
    #[must_use]
    pub fn as_hex(&self) -> String {
        let mut out = String::with_capacity(DIGEST_LEN * 2);
        for byte in self.0 {
            use std::fmt::Write as _;
            let _ = write!(out, "{byte:02X}");
        }
        out
    }

    /// Parse 64 hexadecimal digits of either case.
    pub fn from_hex(hex: &str) -> Result<Self, DigestParseError> {
        let raw = hex.as_bytes();
        if raw.len() != DIGEST_LEN * 2 {
            return Err(DigestParseError::Length { len: raw.len() });
        }

        let mut out = [0u8; DIGEST_LEN];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            let high = hex_nibble(pair[0], i * 2)?;
            let low = hex_nibble(pair[1], i * 2 + 1)?;
            out[i] = (high << 4) | low;
        }

        Ok(Self(out))
    }
}

const fn hex_nibble(byte: u8, position: usize) -> Result<u8, DigestParseError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(DigestParseError::InvalidDigit { position, byte }),
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl IntoIterator for Digest {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, DIGEST_LEN>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Digest {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest").field(&self.as_hex()).finish()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsupported("Digest", "Display")
    }
}

impl std::hash::Hash for Digest {
    fn hash<H: std::hash::Hasher>(&self, _: &mut H) {
        unsupported("Digest", "std::hash::Hash")
    }
}

///
/// sha256
///
/// The single digest function used at every composition step.
///

#[must_use]
pub fn sha256(bytes: &[u8]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha256::digest(bytes));

    Digest(out)
}

///
/// DigestBuilder
///
/// Streams `prefix ++ field1 ++ field2 ++ ...` into one SHA-256 state.
/// Equivalent to concatenating every field and calling `sha256` once.
///

#[derive(Clone)]
pub struct DigestBuilder {
    hasher: Sha256,
    scratch: Vec<u8>,
}

impl DigestBuilder {
    /// Open a stream namespaced by one entity kind's type prefix.
    #[must_use]
    pub fn with_prefix(prefix: &TypePrefix) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(prefix);

        Self {
            hasher,
            scratch: Vec::new(),
        }
    }

    /// Append a primitive field in its canonical encoding.
    #[must_use]
    pub fn encoded<T: Canonical + ?Sized>(mut self, value: &T) -> Self {
        self.scratch.clear();
        value.encode_into(&mut self.scratch);
        self.hasher.update(&self.scratch);
        self
    }

    /// Append a nested digest or an aggregate.
    #[must_use]
    pub fn digest(mut self, digest: Digest) -> Self {
        self.hasher.update(digest.0);
        self
    }

    #[must_use]
    pub fn finish(self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&self.hasher.finalize());

        Digest(out)
    }
}

///
/// TESTS
///
