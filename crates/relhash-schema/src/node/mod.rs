//! Concrete schema model.
//!
//! Every node is an immutable value: fields are private and only exposed
//! through accessors. Collections keep caller order and duplicates, but
//! neither order nor position carries meaning for hashing.

mod column;
mod column_type;
mod foreign_key;
mod index;
mod schema;
mod table;

pub use column::Column;
pub use column_type::{ALL_COLUMN_KINDS, ColumnKind, ColumnType};
pub use foreign_key::ForeignKey;
pub use index::Index;
pub use schema::Schema;
pub use table::Table;
