//! Seeded random generators for schema fixtures.
//!
//! Generators are deterministic per seed so a failing test can be replayed
//! by seed alone.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{RngCore, SeedableRng},
};
use relhash_schema::node::{
    ALL_COLUMN_KINDS, Column, ColumnKind, ColumnType, ForeignKey, Index, Schema, Table,
};

const NAME_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Length of generated identifiers.
pub const NAME_LEN: usize = 10;

///
/// FixtureRng
///
/// ChaCha8-backed generator for primitive values and whole entity graphs.
/// Generated graphs always pass the checked constructors.
///

pub struct FixtureRng {
    rng: ChaCha8Rng,
}

impl FixtureRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform value in `0..bound`; `bound` must be non-zero.
    #[expect(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: usize) -> usize {
        (self.rng.next_u64() % bound as u64) as usize
    }

    /// Uniform value in `low..=high`.
    pub fn between(&mut self, low: usize, high: usize) -> usize {
        low + self.below(high - low + 1)
    }

    pub fn bool(&mut self) -> bool {
        self.rng.next_u32() & 1 == 1
    }

    /// Alphanumeric string of exactly `len` characters.
    pub fn string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(NAME_ALPHABET[self.below(NAME_ALPHABET.len())]))
            .collect()
    }

    pub fn name(&mut self) -> String {
        self.string(NAME_LEN)
    }

    pub fn column_kind(&mut self) -> ColumnKind {
        ALL_COLUMN_KINDS[self.below(ALL_COLUMN_KINDS.len())]
    }

    pub fn column_type(&mut self) -> ColumnType {
        self.column_kind().into()
    }

    pub fn column(&mut self) -> Column {
        let name = self.name();
        Column::new(name, self.column_type())
    }

    pub fn columns(&mut self, count: usize) -> Vec<Column> {
        (0..count).map(|_| self.column()).collect()
    }

    /// Non-empty random subset of `columns`; empty input yields an empty index.
    pub fn index_over(&mut self, columns: &[Column]) -> Index {
        let unique = self.bool();
        Index::new(unique, self.subset(columns, 1))
    }

    /// Table with 1..=6 columns and 0..=3 indexes over them.
    pub fn table(&mut self) -> Table {
        let name = self.name();
        let column_count = self.between(1, 6);
        let columns = self.columns(column_count);
        let index_count = self.between(0, 3);
        let indexes = (0..index_count)
            .map(|_| self.index_over(&columns))
            .collect::<Vec<_>>();

        Table::new(name, columns, indexes)
    }

    /// Foreign key between two fresh tables over random column subsets.
    pub fn foreign_key(&mut self) -> ForeignKey {
        let referencing = self.table();
        let referenced = self.table();

        self.foreign_key_between(&referencing, &referenced)
    }

    pub fn foreign_key_between(&mut self, referencing: &Table, referenced: &Table) -> ForeignKey {
        let referencing_columns = self.subset(referencing.columns(), 1);
        let referenced_columns = self.subset(referenced.columns(), 1);

        ForeignKey::new(
            referencing.clone(),
            referencing_columns,
            referenced.clone(),
            referenced_columns,
        )
    }

    /// Schema with 1..=5 tables and 0..=3 foreign keys among them.
    pub fn schema(&mut self) -> Schema {
        let name = self.name();
        let table_count = self.between(1, 5);
        let tables = (0..table_count).map(|_| self.table()).collect::<Vec<_>>();
        let fk_count = self.between(0, 3);
        let foreign_keys = (0..fk_count)
            .map(|_| {
                let referencing = &tables[self.below(tables.len())];
                let referenced = &tables[self.below(tables.len())];
                self.foreign_key_between(referencing, referenced)
            })
            .collect::<Vec<_>>();

        Schema::new(name, tables, foreign_keys)
    }

    /// Fisher–Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    // Random subset of at least `min` elements (capped by the input size),
    // in shuffled order.
    fn subset<T: Clone>(&mut self, items: &[T], min: usize) -> Vec<T> {
        if items.is_empty() {
            return Vec::new();
        }

        let mut picked = items.to_vec();
        self.shuffle(&mut picked);
        let len = self.between(min.min(items.len()), items.len());
        picked.truncate(len);

        picked
    }
}

///
/// TESTS
///
