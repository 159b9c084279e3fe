use crate::hash::{ColumnHash, DeterminedHash};
use relhash_primitives::{Aggregate, Digest, DigestBuilder, TypePrefix};
use relhash_schema::traits::IndexNode;

/// Namespace bytes for index digests.
pub const INDEX_PREFIX: TypePrefix = [
    142, 165, 151, 1, 117, 182, 22, 125, 191, 1, 173, 241, 145, 57, 67, 244,
];

///
/// IndexHash
///
/// `SHA256(prefix ++ unique ++ aggregate(columns))`.
///

pub struct IndexHash<'a, I> {
    index: &'a I,
}

impl<'a, I: IndexNode> IndexHash<'a, I> {
    #[must_use]
    pub const fn new(index: &'a I) -> Self {
        Self { index }
    }
}

impl<I: IndexNode> DeterminedHash for IndexHash<'_, I> {
    fn digest(&self) -> Digest {
        let columns: Aggregate = self
            .index
            .columns()
            .map(|column| ColumnHash::new(column).digest())
            .collect();

        DigestBuilder::with_prefix(&INDEX_PREFIX)
            .encoded(&self.index.is_unique())
            .digest(columns.finish())
            .finish()
    }
}

impl_hash_surface!(IndexHash, IndexNode);

///
/// TESTS
///
