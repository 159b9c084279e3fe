use crate::{
    error::SchemaError,
    node::{Column, Table},
    traits::ForeignKeyNode,
    validate::validate_foreign_key,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// ForeignKey
///
/// Endpoint tables are held by value. Column collections are unordered and
/// need not have equal length.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ForeignKey {
    referencing_table: Table,
    referencing_columns: Vec<Column>,
    referenced_table: Table,
    referenced_columns: Vec<Column>,
}

impl ForeignKey {
    /// Build a foreign key without structural checks.
    #[must_use]
    pub fn new(
        referencing_table: Table,
        referencing_columns: impl IntoIterator<Item = Column>,
        referenced_table: Table,
        referenced_columns: impl IntoIterator<Item = Column>,
    ) -> Self {
        Self {
            referencing_table,
            referencing_columns: referencing_columns.into_iter().collect(),
            referenced_table,
            referenced_columns: referenced_columns.into_iter().collect(),
        }
    }

    /// Build a foreign key, rejecting columns absent from their endpoint table.
    pub fn try_new(
        referencing_table: Table,
        referencing_columns: impl IntoIterator<Item = Column>,
        referenced_table: Table,
        referenced_columns: impl IntoIterator<Item = Column>,
    ) -> Result<Self, SchemaError> {
        let foreign_key = Self::new(
            referencing_table,
            referencing_columns,
            referenced_table,
            referenced_columns,
        );
        validate_foreign_key(&foreign_key)?;

        Ok(foreign_key)
    }

    #[must_use]
    pub const fn referencing_table(&self) -> &Table {
        &self.referencing_table
    }

    #[must_use]
    pub fn referencing_columns(&self) -> &[Column] {
        &self.referencing_columns
    }

    #[must_use]
    pub const fn referenced_table(&self) -> &Table {
        &self.referenced_table
    }

    #[must_use]
    pub fn referenced_columns(&self) -> &[Column] {
        &self.referenced_columns
    }
}

impl ForeignKeyNode for ForeignKey {
    type Table = Table;
    type Column = Column;

    fn referencing_table(&self) -> &Table {
        &self.referencing_table
    }

    fn referencing_columns(&self) -> impl Iterator<Item = &Column> {
        self.referencing_columns.iter()
    }

    fn referenced_table(&self) -> &Table {
        &self.referenced_table
    }

    fn referenced_columns(&self) -> impl Iterator<Item = &Column> {
        self.referenced_columns.iter()
    }
}
