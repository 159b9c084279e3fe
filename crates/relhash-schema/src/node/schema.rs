use crate::{
    error::SchemaError,
    node::{ForeignKey, Table},
    traits::SchemaNode,
    validate::validate_schema,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Schema
///
/// Root of the entity graph.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Schema {
    name: String,
    tables: Vec<Table>,

    #[cfg_attr(feature = "serde", serde(default))]
    foreign_keys: Vec<ForeignKey>,
}

impl Schema {
    /// Build a schema without structural checks.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tables: impl IntoIterator<Item = Table>,
        foreign_keys: impl IntoIterator<Item = ForeignKey>,
    ) -> Self {
        Self {
            name: name.into(),
            tables: tables.into_iter().collect(),
            foreign_keys: foreign_keys.into_iter().collect(),
        }
    }

    /// Build a schema, validating every table, every foreign key, and that
    /// foreign keys only connect tables of this schema.
    pub fn try_new(
        name: impl Into<String>,
        tables: impl IntoIterator<Item = Table>,
        foreign_keys: impl IntoIterator<Item = ForeignKey>,
    ) -> Result<Self, SchemaError> {
        let schema = Self::new(name, tables, foreign_keys);
        validate_schema(&schema)?;

        Ok(schema)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    #[must_use]
    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }
}

impl SchemaNode for Schema {
    type Table = Table;
    type ForeignKey = ForeignKey;

    fn name(&self) -> &str {
        &self.name
    }

    fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    fn foreign_keys(&self) -> impl Iterator<Item = &ForeignKey> {
        self.foreign_keys.iter()
    }
}
