use crate::hash::{DeterminedHash, ForeignKeyHash, TableHash};
use relhash_primitives::{Aggregate, Digest, DigestBuilder, TypePrefix};
use relhash_schema::traits::SchemaNode;

/// Namespace bytes for schema digests.
pub const SCHEMA_PREFIX: TypePrefix = [
    253, 165, 151, 1, 96, 51, 234, 121, 155, 41, 25, 146, 55, 243, 188, 110,
];

///
/// SchemaHash
///
/// Root hasher:
/// `SHA256(prefix ++ name ++ aggregate(tables) ++ aggregate(foreign keys))`.
///

pub struct SchemaHash<'a, S> {
    schema: &'a S,
}

impl<'a, S: SchemaNode> SchemaHash<'a, S> {
    #[must_use]
    pub const fn new(schema: &'a S) -> Self {
        Self { schema }
    }
}

impl<S: SchemaNode> DeterminedHash for SchemaHash<'_, S> {
    fn digest(&self) -> Digest {
        let _span = tracing::trace_span!("schema_digest", schema = self.schema.name()).entered();

        let tables: Aggregate = self
            .schema
            .tables()
            .map(|table| TableHash::new(table).digest())
            .collect();
        let foreign_keys: Aggregate = self
            .schema
            .foreign_keys()
            .map(|fk| ForeignKeyHash::new(fk).digest())
            .collect();

        let digest = DigestBuilder::with_prefix(&SCHEMA_PREFIX)
            .encoded(self.schema.name())
            .digest(tables.finish())
            .digest(foreign_keys.finish())
            .finish();

        tracing::debug!(
            tables = tables.len(),
            foreign_keys = foreign_keys.len(),
            digest = %digest.as_hex(),
            "schema digest computed"
        );

        digest
    }
}

impl_hash_surface!(SchemaHash, SchemaNode);

///
/// TESTS
///
