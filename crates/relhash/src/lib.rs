//! ## Crate layout
//! - `core`: the six entity hashers and their type prefixes.
//! - `primitives`: canonical encoding, SHA-256 and the XOR aggregator.
//! - `schema`: the relational object model, its accessor traits and checks.
//!
//! `fingerprint` is the root entry point; the hashers stay available for
//! digests of individual sub-trees.

pub use relhash_core as core;
pub use relhash_primitives as primitives;
pub use relhash_schema as schema;

pub use relhash_core::{
    ColumnHash, ColumnTypeHash, DeterminedHash, ForeignKeyHash, IndexHash, SchemaHash, TableHash,
};
pub use relhash_primitives::{Digest, DigestParseError};
pub use relhash_schema::SchemaError;

use relhash_schema::traits::SchemaNode;
use thiserror::Error as ThisError;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    DigestParse(#[from] DigestParseError),
}

///
/// fingerprint
///
/// Content fingerprint of a whole schema.
///

#[must_use]
pub fn fingerprint<S: SchemaNode>(schema: &S) -> Digest {
    SchemaHash::new(schema).digest()
}

///
/// matches_fingerprint
///
/// Compare a schema against a previously recorded hex fingerprint.
///

pub fn matches_fingerprint<S: SchemaNode>(schema: &S, expected_hex: &str) -> Result<bool, Error> {
    let expected = Digest::from_hex(expected_hex)?;

    Ok(fingerprint(schema) == expected)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{fingerprint, matches_fingerprint};
    pub use relhash_core::prelude::*;
    pub use relhash_schema::prelude::*;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use relhash_schema::node::{Column, ColumnKind, Index, Schema, Table};

    #[test]
    fn fingerprint_is_the_schema_hash() {
        let schema = Schema::new("s", [Table::new("t", [], [])], []);

        assert_eq!(fingerprint(&schema), SchemaHash::new(&schema).digest());
    }

    #[test]
    fn matches_recorded_fingerprint() {
        let schema = Schema::new("", [], []);
        let recorded = fingerprint(&schema).as_hex();

        assert!(matches!(matches_fingerprint(&schema, &recorded), Ok(true)));
        assert!(matches!(
            matches_fingerprint(&schema, &recorded.to_lowercase()),
            Ok(true)
        ));
        assert!(matches!(
            matches_fingerprint(&Schema::new("other", [], []), &recorded),
            Ok(false)
        ));
    }

    #[test]
    fn malformed_hex_surfaces_as_digest_parse_error() {
        let schema = Schema::new("", [], []);

        assert!(matches!(
            matches_fingerprint(&schema, "abc"),
            Err(Error::DigestParse(DigestParseError::Length { len: 3 }))
        ));
    }

    #[test]
    fn schema_errors_convert() {
        let column = Column::new("id", ColumnKind::Int);
        let err = Table::try_new("t", [], [Index::new(true, [column])])
            .map_err(Error::from)
            .unwrap_err();

        assert!(matches!(err, Error::Schema(SchemaError::IndexColumnNotInTable { .. })));
    }
}
