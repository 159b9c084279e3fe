use crate::{
    error::SchemaError,
    node::{Column, Index},
    traits::TableNode,
    validate::validate_table,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Table
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Table {
    name: String,
    columns: Vec<Column>,

    #[cfg_attr(feature = "serde", serde(default))]
    indexes: Vec<Index>,
}

impl Table {
    /// Build a table without structural checks.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = Column>,
        indexes: impl IntoIterator<Item = Index>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().collect(),
            indexes: indexes.into_iter().collect(),
        }
    }

    /// Build a table, rejecting indexes over columns the table lacks.
    pub fn try_new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = Column>,
        indexes: impl IntoIterator<Item = Index>,
    ) -> Result<Self, SchemaError> {
        let table = Self::new(name, columns, indexes);
        validate_table(&table)?;

        Ok(table)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    #[must_use]
    pub fn has_column(&self, column: &Column) -> bool {
        self.columns.contains(column)
    }
}

impl TableNode for Table {
    type Column = Column;
    type Index = Index;

    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    fn indexes(&self) -> impl Iterator<Item = &Index> {
        self.indexes.iter()
    }
}
