//! Relational schema object model consumed by the hashers.
//!
//! - `traits`: read-only accessor traits the hashers are generic over.
//! - `node`: the concrete, immutable model (schema, table, column, ...).
//! - `validate`: construction-time structural checks for the checked
//!   constructors.

#[macro_use]
mod macros;

pub mod error;
pub mod node;
pub mod traits;
pub mod validate;

pub use error::SchemaError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::SchemaError,
        node::*,
        traits::{
            ColumnNode, ColumnTypeNode, ForeignKeyNode, IndexNode, SchemaNode, TableNode,
        },
    };
}
