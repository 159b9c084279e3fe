//! Entity hashers for the relational schema model.
//!
//! Every entity kind owns a 16-byte type prefix and a fixed field order. A
//! digest is `SHA256(prefix ++ field bytes ...)`, where primitive fields are
//! canonically encoded, nested entities contribute their own digest, and
//! unordered collections contribute the XOR aggregate of their members'
//! digests. `SchemaHash` is the root.
#![warn(unreachable_pub)]

pub mod hash;

pub use hash::{
    COLUMN_PREFIX, COLUMN_TYPE_PREFIX, ColumnHash, ColumnTypeHash, DeterminedHash,
    FOREIGN_KEY_PREFIX, ForeignKeyHash, INDEX_PREFIX, IndexHash, SCHEMA_PREFIX, SchemaHash,
    TABLE_PREFIX, TableHash,
};
pub use relhash_primitives::Digest;

///
/// Prelude
///
/// Hashers and the digest value; no model types.
///

pub mod prelude {
    pub use crate::hash::{
        ColumnHash, ColumnTypeHash, DeterminedHash, ForeignKeyHash, IndexHash, SchemaHash,
        TableHash,
    };
    pub use relhash_primitives::Digest;
}
