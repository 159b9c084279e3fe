use crate::hash::DeterminedHash;
use relhash_primitives::{Digest, DigestBuilder, TypePrefix};
use relhash_schema::traits::ColumnTypeNode;

/// Namespace bytes for column type digests.
pub const COLUMN_TYPE_PREFIX: TypePrefix = [
    8, 157, 151, 1, 149, 98, 28, 119, 130, 158, 187, 34, 130, 255, 222, 135,
];

///
/// ColumnTypeHash
///
/// `SHA256(prefix ++ name)`. The name is the only identity of a type.
///

pub struct ColumnTypeHash<'a, T> {
    column_type: &'a T,
}

impl<'a, T: ColumnTypeNode> ColumnTypeHash<'a, T> {
    #[must_use]
    pub const fn new(column_type: &'a T) -> Self {
        Self { column_type }
    }
}

impl<T: ColumnTypeNode> DeterminedHash for ColumnTypeHash<'_, T> {
    fn digest(&self) -> Digest {
        DigestBuilder::with_prefix(&COLUMN_TYPE_PREFIX)
            .encoded(self.column_type.name())
            .finish()
    }
}

impl_hash_surface!(ColumnTypeHash, ColumnTypeNode);

///
/// TESTS
///
