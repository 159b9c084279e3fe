use crate::hash::{ColumnTypeHash, DeterminedHash};
use relhash_primitives::{Digest, DigestBuilder, TypePrefix};
use relhash_schema::traits::ColumnNode;

/// Namespace bytes for column digests.
pub const COLUMN_PREFIX: TypePrefix = [
    41, 163, 151, 1, 29, 173, 73, 119, 138, 216, 188, 7, 188, 71, 127, 69,
];

///
/// ColumnHash
///
/// `SHA256(prefix ++ name ++ digest(type))`.
///

pub struct ColumnHash<'a, C> {
    column: &'a C,
}

impl<'a, C: ColumnNode> ColumnHash<'a, C> {
    #[must_use]
    pub const fn new(column: &'a C) -> Self {
        Self { column }
    }
}

impl<C: ColumnNode> DeterminedHash for ColumnHash<'_, C> {
    fn digest(&self) -> Digest {
        DigestBuilder::with_prefix(&COLUMN_PREFIX)
            .encoded(self.column.name())
            .digest(ColumnTypeHash::new(self.column.column_type()).digest())
            .finish()
    }
}

impl_hash_surface!(ColumnHash, ColumnNode);

///
/// TESTS
///
