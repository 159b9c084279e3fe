use crate::hash::{ColumnHash, DeterminedHash, IndexHash};
use relhash_primitives::{Aggregate, Digest, DigestBuilder, TypePrefix};
use relhash_schema::traits::TableNode;

/// Namespace bytes for table digests.
pub const TABLE_PREFIX: TypePrefix = [
    184, 165, 151, 1, 198, 98, 50, 119, 182, 181, 80, 101, 192, 154, 105, 5,
];

///
/// TableHash
///
/// `SHA256(prefix ++ name ++ aggregate(columns) ++ aggregate(indexes))`.
///

pub struct TableHash<'a, T> {
    table: &'a T,
}

impl<'a, T: TableNode> TableHash<'a, T> {
    #[must_use]
    pub const fn new(table: &'a T) -> Self {
        Self { table }
    }
}

impl<T: TableNode> DeterminedHash for TableHash<'_, T> {
    fn digest(&self) -> Digest {
        let columns: Aggregate = self
            .table
            .columns()
            .map(|column| ColumnHash::new(column).digest())
            .collect();
        let indexes: Aggregate = self
            .table
            .indexes()
            .map(|index| IndexHash::new(index).digest())
            .collect();

        tracing::trace!(
            table = self.table.name(),
            columns = columns.len(),
            indexes = indexes.len(),
            "hashing table"
        );

        DigestBuilder::with_prefix(&TABLE_PREFIX)
            .encoded(self.table.name())
            .digest(columns.finish())
            .digest(indexes.finish())
            .finish()
    }
}

impl_hash_surface!(TableHash, TableNode);

///
/// TESTS
///
