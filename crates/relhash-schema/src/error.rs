use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Structural violations rejected by the checked model constructors.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("index column '{column}' is not a column of table '{table}'")]
    IndexColumnNotInTable { table: String, column: String },

    #[error("{side} column '{column}' is not a column of table '{table}'")]
    ForeignKeyColumnNotInTable {
        side: ForeignKeySide,
        table: String,
        column: String,
    },

    #[error("foreign key {side} table '{table}' is not a table of schema '{schema}'")]
    ForeignKeyTableNotInSchema {
        side: ForeignKeySide,
        schema: String,
        table: String,
    },
}

///
/// ForeignKeySide
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ForeignKeySide {
    Referencing,
    Referenced,
}

impl Display for ForeignKeySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Referencing => "referencing",
            Self::Referenced => "referenced",
        })
    }
}
