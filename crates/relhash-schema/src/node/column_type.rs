use crate::traits::ColumnTypeNode;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

column_kind_registry_entries!(column_kind_enum_from_registry);

impl Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// ColumnType
///
/// A column type identified solely by its name. Built-in kinds use their
/// registry name; custom types carry any caller-chosen name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(transparent))]
pub struct ColumnType {
    name: String,
}

impl ColumnType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Built-in kind with this name, if any.
    #[must_use]
    pub fn kind(&self) -> Option<ColumnKind> {
        ColumnKind::from_name(&self.name)
    }
}

impl From<ColumnKind> for ColumnType {
    fn from(kind: ColumnKind) -> Self {
        Self::new(kind.name())
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl ColumnTypeNode for ColumnType {
    fn name(&self) -> &str {
        &self.name
    }
}

///
/// TESTS
///
