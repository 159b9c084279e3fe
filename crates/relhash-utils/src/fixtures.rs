//! Fixed reference graphs whose digests are pinned as regression vectors.

use relhash_schema::node::{Column, ColumnKind, ForeignKey, Index, Schema, Table};

/// Five columns shared by the index, table and foreign-key references.
/// Two columns deliberately share the name "asd".
#[must_use]
pub fn reference_columns() -> Vec<Column> {
    vec![
        Column::new("asd", ColumnKind::Date),
        Column::new("qwe", ColumnKind::Time),
        Column::new("asd", ColumnKind::UShort),
        Column::new("zxc", ColumnKind::Long),
        Column::new("tyu", ColumnKind::Int),
    ]
}

/// Unique indexes over `columns[0..2)` and `columns[2..4)`.
#[must_use]
pub fn reference_indexes(columns: &[Column]) -> Vec<Index> {
    vec![
        Index::new(true, columns[0..2].to_vec()),
        Index::new(true, columns[2..4].to_vec()),
    ]
}

/// Non-unique index over all five reference columns.
#[must_use]
pub fn reference_index() -> Index {
    Index::new(false, reference_columns())
}

/// Table "Sample name" with the five reference columns and both indexes.
#[must_use]
pub fn reference_table() -> Table {
    let columns = reference_columns();
    let indexes = reference_indexes(&columns);

    Table::new("Sample name", columns, indexes)
}

/// "Sample name" (columns 0..2) and "Sample name1" (columns 2..4), each with
/// the index over its own columns.
#[must_use]
pub fn reference_endpoint_tables() -> (Table, Table) {
    let columns = reference_columns();
    let indexes = reference_indexes(&columns);

    (
        Table::new("Sample name", columns[0..2].to_vec(), indexes[0..1].to_vec()),
        Table::new("Sample name1", columns[2..4].to_vec(), indexes[1..2].to_vec()),
    )
}

/// Foreign key from the first column of "Sample name" to the first column
/// of "Sample name1".
#[must_use]
pub fn reference_foreign_key() -> ForeignKey {
    let (referencing, referenced) = reference_endpoint_tables();
    let referencing_column = referencing.columns()[0].clone();
    let referenced_column = referenced.columns()[0].clone();

    ForeignKey::new(
        referencing,
        [referencing_column],
        referenced,
        [referenced_column],
    )
}

/// Same endpoints as `reference_foreign_key` with no columns on either side.
#[must_use]
pub fn reference_foreign_key_without_columns() -> ForeignKey {
    let (referencing, referenced) = reference_endpoint_tables();

    ForeignKey::new(referencing, [], referenced, [])
}

/// Tables of the reference schema, in declaration order.
#[must_use]
pub fn reference_schema_tables() -> Vec<Table> {
    let columns = vec![
        Column::new("tyghdntygrhhgrty", ColumnKind::Date),
        Column::new("srfgbzERWGerg", ColumnKind::Time),
        Column::new("fdjbWAREREWGRGhvn", ColumnKind::UShort),
        Column::new("fdjbhyufjkjyhukvn", ColumnKind::Long),
        Column::new("fdjb3q45t4rhvn", ColumnKind::Int),
    ];
    let indexes = vec![
        Index::new(true, columns[0..2].to_vec()),
        Index::new(true, columns[2..4].to_vec()),
        Index::new(true, columns[0..1].to_vec()),
        Index::new(true, columns[2..3].to_vec()),
    ];

    vec![
        Table::new("inerbgfhbnig", columns.clone(), indexes[0..2].to_vec()),
        Table::new("pu9jWQPHJUI9", columns.clone(), indexes[2..4].to_vec()),
        Table::new("DAFNdsflkgmvkjo", columns.clone(), indexes[3..4].to_vec()),
        Table::new("EWQOIJRPOIJUe", columns, indexes[1..2].to_vec()),
    ]
}

/// Foreign keys of the reference schema: table 0 → table 1 and
/// table 2 → table 3, each over the first column of both endpoints.
#[must_use]
pub fn reference_schema_foreign_keys(tables: &[Table]) -> Vec<ForeignKey> {
    let link = |from: &Table, to: &Table| {
        ForeignKey::new(
            from.clone(),
            [from.columns()[0].clone()],
            to.clone(),
            [to.columns()[0].clone()],
        )
    };

    vec![link(&tables[0], &tables[1]), link(&tables[2], &tables[3])]
}

/// Schema "fdjbhvn" with four tables and two foreign keys.
#[must_use]
pub fn reference_schema() -> Schema {
    let tables = reference_schema_tables();
    let foreign_keys = reference_schema_foreign_keys(&tables);

    Schema::new("fdjbhvn", tables, foreign_keys)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_graphs_are_structurally_valid() {
        let table = reference_table();
        assert!(
            Table::try_new(
                table.name(),
                table.columns().to_vec(),
                table.indexes().to_vec()
            )
            .is_ok()
        );

        let schema = reference_schema();
        assert!(
            Schema::try_new(
                schema.name(),
                schema.tables().to_vec(),
                schema.foreign_keys().to_vec()
            )
            .is_ok()
        );
    }
}
