//! Read-only accessors the entity hashers consume.
//!
//! Any schema model can be fingerprinted by implementing these traits.
//! Collections are exposed as iterators; their order carries no meaning.

///
/// ColumnTypeNode
///

pub trait ColumnTypeNode {
    fn name(&self) -> &str;
}

///
/// ColumnNode
///

pub trait ColumnNode {
    type Type: ColumnTypeNode;

    fn name(&self) -> &str;

    fn column_type(&self) -> &Self::Type;
}

///
/// IndexNode
///

pub trait IndexNode {
    type Column: ColumnNode;

    fn is_unique(&self) -> bool;

    /// Indexed columns, in no meaningful order.
    fn columns(&self) -> impl Iterator<Item = &Self::Column>;
}

///
/// TableNode
///

pub trait TableNode {
    type Column: ColumnNode;
    type Index: IndexNode;

    fn name(&self) -> &str;

    fn columns(&self) -> impl Iterator<Item = &Self::Column>;

    fn indexes(&self) -> impl Iterator<Item = &Self::Index>;
}

///
/// ForeignKeyNode
///
/// A reference from columns of one table to columns of another. Column
/// collections are unordered; which referencing column pairs with which
/// referenced column is not part of the contract.
///

pub trait ForeignKeyNode {
    type Table: TableNode;
    type Column: ColumnNode;

    fn referencing_table(&self) -> &Self::Table;

    fn referencing_columns(&self) -> impl Iterator<Item = &Self::Column>;

    fn referenced_table(&self) -> &Self::Table;

    fn referenced_columns(&self) -> impl Iterator<Item = &Self::Column>;
}

///
/// SchemaNode
///

pub trait SchemaNode {
    type Table: TableNode;
    type ForeignKey: ForeignKeyNode;

    fn name(&self) -> &str;

    fn tables(&self) -> impl Iterator<Item = &Self::Table>;

    fn foreign_keys(&self) -> impl Iterator<Item = &Self::ForeignKey>;
}
