//! Hashing primitives shared by every entity hasher: canonical encoding of
//! primitive values, the SHA-256 digest function, and the order-independent
//! aggregator used for unordered child collections.

pub mod aggregate;
pub mod digest;
pub mod encode;

pub use aggregate::{Aggregate, aggregate};
pub use digest::{DIGEST_LEN, Digest, DigestBuilder, DigestParseError, sha256};
pub use encode::Canonical;

///
/// CONSTANTS
///

/// Width of an entity-kind type prefix.
pub const TYPE_PREFIX_LEN: usize = 16;

/// Fixed namespace bytes that open every composed digest stream of one
/// entity kind.
pub type TypePrefix = [u8; TYPE_PREFIX_LEN];

///
/// unsupported
///
/// Abort on an identity operation that digest values refuse to provide.
/// Digests are consumed as bytes only; a language-level hash or display
/// string would silently bypass the byte contract.
///

#[cold]
#[track_caller]
pub fn unsupported(kind: &str, operation: &str) -> ! {
    panic!("unsupported operation: {kind} does not support {operation}; consume the digest as bytes")
}
