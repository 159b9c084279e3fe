//! Structural checks behind the checked constructors.
//!
//! Checks run in a fixed order and report the first violation found.
//! Hashing never depends on them: unchecked graphs hash the same way.

use crate::{
    error::{ForeignKeySide, SchemaError},
    node::{Column, ForeignKey, Schema, Table},
};

/// Every index column must be one of the table's columns.
pub fn validate_table(table: &Table) -> Result<(), SchemaError> {
    for index in table.indexes() {
        if let Some(column) = index.columns().iter().find(|c| !table.has_column(c)) {
            tracing::debug!(
                table = table.name(),
                column = column.name(),
                "rejected index over foreign column"
            );

            return Err(SchemaError::IndexColumnNotInTable {
                table: table.name().to_string(),
                column: column.name().to_string(),
            });
        }
    }

    Ok(())
}

/// Every column of a foreign key must belong to the endpoint table on its
/// side. Arity and pairing are not checked.
pub fn validate_foreign_key(foreign_key: &ForeignKey) -> Result<(), SchemaError> {
    check_side(
        ForeignKeySide::Referencing,
        foreign_key.referencing_table(),
        foreign_key.referencing_columns(),
    )?;
    check_side(
        ForeignKeySide::Referenced,
        foreign_key.referenced_table(),
        foreign_key.referenced_columns(),
    )
}

/// Validate every table and foreign key, then require foreign key endpoint
/// tables to be tables of the schema.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    for table in schema.tables() {
        validate_table(table)?;
    }

    for foreign_key in schema.foreign_keys() {
        validate_foreign_key(foreign_key)?;

        for (side, table) in [
            (ForeignKeySide::Referencing, foreign_key.referencing_table()),
            (ForeignKeySide::Referenced, foreign_key.referenced_table()),
        ] {
            if !schema.tables().contains(table) {
                tracing::debug!(
                    schema = schema.name(),
                    table = table.name(),
                    %side,
                    "rejected foreign key to table outside schema"
                );

                return Err(SchemaError::ForeignKeyTableNotInSchema {
                    side,
                    schema: schema.name().to_string(),
                    table: table.name().to_string(),
                });
            }
        }
    }

    Ok(())
}

fn check_side(side: ForeignKeySide, table: &Table, columns: &[Column]) -> Result<(), SchemaError> {
    match columns.iter().find(|c| !table.has_column(c)) {
        Some(column) => {
            tracing::debug!(
                table = table.name(),
                column = column.name(),
                %side,
                "rejected foreign key column"
            );

            Err(SchemaError::ForeignKeyColumnNotInTable {
                side,
                table: table.name().to_string(),
                column: column.name().to_string(),
            })
        }
        None => Ok(()),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{error::ForeignKeySide, node::*, SchemaError};

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", ColumnKind::Long),
            Column::new("name", ColumnKind::String),
            Column::new("born", ColumnKind::Date),
        ]
    }

    fn users() -> Table {
        let cols = columns();
        Table::try_new("users", cols.clone(), [Index::new(true, cols[..1].to_vec())])
            .expect("valid table")
    }

    fn posts() -> Table {
        Table::new(
            "posts",
            [
                Column::new("id", ColumnKind::Long),
                Column::new("author", ColumnKind::Long),
            ],
            [],
        )
    }

    #[test]
    fn table_rejects_index_over_unknown_column() {
        let err = Table::try_new(
            "users",
            columns(),
            [Index::new(false, [Column::new("email", ColumnKind::String)])],
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::IndexColumnNotInTable {
                table: "users".into(),
                column: "email".into(),
            }
        );
    }

    #[test]
    fn table_membership_compares_column_type_too() {
        let err = Table::try_new(
            "users",
            columns(),
            [Index::new(false, [Column::new("id", ColumnKind::Int)])],
        );

        assert!(matches!(err, Err(SchemaError::IndexColumnNotInTable { .. })));
    }

    #[test]
    fn foreign_key_rejects_column_outside_its_side() {
        let users = users();
        let posts = posts();

        let err = ForeignKey::try_new(
            posts.clone(),
            [Column::new("author", ColumnKind::Long)],
            users.clone(),
            [Column::new("author", ColumnKind::Long)],
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::ForeignKeyColumnNotInTable {
                side: ForeignKeySide::Referenced,
                table: "users".into(),
                column: "author".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "referenced column 'author' is not a column of table 'users'"
        );
    }

    #[test]
    fn foreign_key_accepts_empty_and_uneven_column_sets() {
        assert!(ForeignKey::try_new(posts(), [], users(), []).is_ok());
        assert!(
            ForeignKey::try_new(
                posts(),
                posts().columns().to_vec(),
                users(),
                users().columns()[..1].to_vec(),
            )
            .is_ok()
        );
    }

    #[test]
    fn schema_rejects_foreign_key_to_outside_table() {
        let fk = ForeignKey::new(
            posts(),
            [Column::new("author", ColumnKind::Long)],
            users(),
            [Column::new("id", ColumnKind::Long)],
        );

        let err = Schema::try_new("blog", [posts()], [fk]).unwrap_err();

        assert_eq!(
            err,
            SchemaError::ForeignKeyTableNotInSchema {
                side: ForeignKeySide::Referenced,
                schema: "blog".into(),
                table: "users".into(),
            }
        );
    }

    #[test]
    fn schema_accepts_consistent_graph() {
        let fk = ForeignKey::try_new(
            posts(),
            [Column::new("author", ColumnKind::Long)],
            users(),
            [Column::new("id", ColumnKind::Long)],
        )
        .expect("valid foreign key");

        let schema = Schema::try_new("blog", [users(), posts()], [fk]).expect("valid schema");

        assert_eq!(schema.tables().len(), 2);
        assert_eq!(schema.foreign_keys().len(), 1);
    }

    #[test]
    fn schema_allows_empty_names_and_collections() {
        assert!(Schema::try_new("", [], []).is_ok());
        assert!(Table::try_new("", [], []).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn model_round_trips_through_json() {
        let fk = ForeignKey::new(
            posts(),
            [Column::new("author", ColumnKind::Long)],
            users(),
            [Column::new("id", ColumnKind::Long)],
        );
        let schema = Schema::new("blog", [users(), posts()], [fk]);

        let json = serde_json::to_string(&schema).expect("serialize");
        let back: Schema = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back, schema);
        assert!(json.contains(r#""type":"long""#));
    }
}
