use crate::{node::Column, traits::IndexNode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Index
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Index {
    #[cfg_attr(feature = "serde", serde(default))]
    unique: bool,

    columns: Vec<Column>,
}

impl Index {
    #[must_use]
    pub fn new(unique: bool, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            unique,
            columns: columns.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.unique
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self
            .columns
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>()
            .join(", ");

        if self.unique {
            write!(f, "UNIQUE ({columns})")
        } else {
            write!(f, "({columns})")
        }
    }
}

impl IndexNode for Index {
    type Column = Column;

    fn is_unique(&self) -> bool {
        self.unique
    }

    fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }
}
