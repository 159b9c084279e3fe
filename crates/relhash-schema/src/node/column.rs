use crate::{node::ColumnType, traits::ColumnNode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Column
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Column {
    name: String,

    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    column_type: ColumnType,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn column_type(&self) -> &ColumnType {
        &self.column_type
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.column_type)
    }
}

impl ColumnNode for Column {
    type Type = ColumnType;

    fn name(&self) -> &str {
        &self.name
    }

    fn column_type(&self) -> &ColumnType {
        &self.column_type
    }
}
