//! One hasher per entity kind, sharing the `DeterminedHash` surface.
//!
//! Hashers borrow their entity and compute on demand; nothing is cached, so
//! every `digest` call walks the entity graph from scratch.

// Byte iteration plus the refused identity operations, shared by all hashers.
// `Hash` and `Display` abort rather than hand out a weaker identity than the
// digest itself.
macro_rules! impl_hash_surface {
    ($hash:ident, $node:ident) => {
        impl<T: $node> IntoIterator for &$hash<'_, T> {
            type Item = u8;
            type IntoIter = std::array::IntoIter<u8, { relhash_primitives::DIGEST_LEN }>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::hash::DeterminedHash::bytes(self)
            }
        }

        impl<T: $node> IntoIterator for $hash<'_, T> {
            type Item = u8;
            type IntoIter = std::array::IntoIter<u8, { relhash_primitives::DIGEST_LEN }>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::hash::DeterminedHash::bytes(&self)
            }
        }

        impl<T> std::hash::Hash for $hash<'_, T> {
            fn hash<H: std::hash::Hasher>(&self, _: &mut H) {
                relhash_primitives::unsupported(stringify!($hash), "std::hash::Hash")
            }
        }

        impl<T> std::fmt::Display for $hash<'_, T> {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                relhash_primitives::unsupported(stringify!($hash), "Display")
            }
        }
    };
}

pub(crate) use impl_hash_surface;

mod column;
mod column_type;
mod foreign_key;
mod index;
mod schema;
mod table;


pub use column::{COLUMN_PREFIX, ColumnHash};
pub use column_type::{COLUMN_TYPE_PREFIX, ColumnTypeHash};
pub use foreign_key::{FOREIGN_KEY_PREFIX, ForeignKeyHash};
pub use index::{INDEX_PREFIX, IndexHash};
pub use schema::{SCHEMA_PREFIX, SchemaHash};
pub use table::{TABLE_PREFIX, TableHash};

use relhash_primitives::{DIGEST_LEN, Digest};

///
/// DeterminedHash
///
/// A value that is exactly one 32-byte digest, consumed as bytes.
///

pub trait DeterminedHash {
    /// Compute the digest.
    fn digest(&self) -> Digest;

    /// Iterate the digest bytes in order.
    fn bytes(&self) -> std::array::IntoIter<u8, DIGEST_LEN> {
        self.digest().into_iter()
    }
}
