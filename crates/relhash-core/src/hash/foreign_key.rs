use crate::hash::{ColumnHash, DeterminedHash, TableHash};
use relhash_primitives::{Aggregate, Digest, DigestBuilder, TypePrefix};
use relhash_schema::traits::ForeignKeyNode;

/// Namespace bytes for foreign key digests.
pub const FOREIGN_KEY_PREFIX: TypePrefix = [
    196, 165, 151, 1, 153, 27, 106, 112, 143, 29, 159, 81, 46, 52, 46, 148,
];

///
/// ForeignKeyHash
///
/// `SHA256(prefix ++ digest(referencing table) ++ aggregate(referencing columns)
///   ++ digest(referenced table) ++ aggregate(referenced columns))`.
///
/// Each column side is aggregated on its own, so which referencing column
/// pairs with which referenced column does not reach the digest.
///

pub struct ForeignKeyHash<'a, F> {
    foreign_key: &'a F,
}

impl<'a, F: ForeignKeyNode> ForeignKeyHash<'a, F> {
    #[must_use]
    pub const fn new(foreign_key: &'a F) -> Self {
        Self { foreign_key }
    }
}

impl<F: ForeignKeyNode> DeterminedHash for ForeignKeyHash<'_, F> {
    fn digest(&self) -> Digest {
        let fk = self.foreign_key;
        let referencing_columns: Aggregate = fk
            .referencing_columns()
            .map(|column| ColumnHash::new(column).digest())
            .collect();
        let referenced_columns: Aggregate = fk
            .referenced_columns()
            .map(|column| ColumnHash::new(column).digest())
            .collect();

        DigestBuilder::with_prefix(&FOREIGN_KEY_PREFIX)
            .digest(TableHash::new(fk.referencing_table()).digest())
            .digest(referencing_columns.finish())
            .digest(TableHash::new(fk.referenced_table()).digest())
            .digest(referenced_columns.finish())
            .finish()
    }
}

impl_hash_surface!(ForeignKeyHash, ForeignKeyNode);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use relhash_primitives::{aggregate, sha256};
    use relhash_schema::node::{ForeignKey, Table};
    use relhash_utils::{FixtureRng, fixtures};

    #[test]
    fn digest_follows_computing_steps() {
        let mut rng = FixtureRng::seeded(41);

        for _ in 0..16 {
            let fk = rng.foreign_key();

            let mut stream = FOREIGN_KEY_PREFIX.to_vec();
            stream.extend(TableHash::new(fk.referencing_table()));
            stream.extend(aggregate(
                fk.referencing_columns()
                    .iter()
                    .map(|c| ColumnHash::new(c).digest()),
            ));
            stream.extend(TableHash::new(fk.referenced_table()));
            stream.extend(aggregate(
                fk.referenced_columns()
                    .iter()
                    .map(|c| ColumnHash::new(c).digest()),
            ));

            assert_eq!(ForeignKeyHash::new(&fk).digest(), sha256(&stream));
        }
    }

    #[test]
    fn iterates_digest_bytes() {
        let fk = FixtureRng::seeded(42).foreign_key();
        let hash = ForeignKeyHash::new(&fk);

        assert!(hash.bytes().eq(hash.digest()));
    }

    #[test]
    fn pinned_digest() {
        assert_eq!(
            ForeignKeyHash::new(&fixtures::reference_foreign_key())
                .digest()
                .as_hex(),
            "4EF1F676A0B74089ABBA2ECD3DD6DB53C2A0738ECE15463CA20619C6E5116DE5"
        );
    }

    #[test]
    fn pinned_digest_without_columns() {
        assert_eq!(
            ForeignKeyHash::new(&fixtures::reference_foreign_key_without_columns())
                .digest()
                .as_hex(),
            "9742F4427F5EBCB1D6DB77A7BB82826866B1D1045EFA453351342F6CF7FA60FD"
        );
    }

    #[test]
    fn column_order_within_each_side_does_not_matter() {
        let (referencing, referenced) = fixtures::reference_endpoint_tables();
        let forward = ForeignKey::new(
            referencing.clone(),
            referencing.columns().to_vec(),
            referenced.clone(),
            referenced.columns().to_vec(),
        );
        let reversed = ForeignKey::new(
            referencing.clone(),
            referencing.columns().iter().rev().cloned(),
            referenced.clone(),
            referenced.columns().iter().rev().cloned(),
        );

        assert_eq!(
            ForeignKeyHash::new(&forward).digest(),
            ForeignKeyHash::new(&reversed).digest()
        );
    }

    #[test]
    fn swapping_direction_changes_digest() {
        let fk = fixtures::reference_foreign_key();
        let swapped = ForeignKey::new(
            fk.referenced_table().clone(),
            fk.referenced_columns().to_vec(),
            fk.referencing_table().clone(),
            fk.referencing_columns().to_vec(),
        );

        assert_ne!(
            ForeignKeyHash::new(&fk).digest(),
            ForeignKeyHash::new(&swapped).digest()
        );
    }

    #[test]
    fn replacing_a_column_on_either_side_changes_digest() {
        let mut rng = FixtureRng::seeded(43);

        for _ in 0..16 {
            let referencing = rng.table();
            let referenced = rng.table();
            let fk = rng.foreign_key_between(&referencing, &referenced);
            let digest = ForeignKeyHash::new(&fk).digest();
            let outsider = rng.column();

            let mut referencing_columns = fk.referencing_columns().to_vec();
            referencing_columns[0] = outsider.clone();
            let changed_referencing = ForeignKey::new(
                referencing.clone(),
                referencing_columns,
                referenced.clone(),
                fk.referenced_columns().to_vec(),
            );

            let mut referenced_columns = fk.referenced_columns().to_vec();
            referenced_columns[0] = outsider;
            let changed_referenced = ForeignKey::new(
                referencing.clone(),
                fk.referencing_columns().to_vec(),
                referenced.clone(),
                referenced_columns,
            );

            assert_ne!(ForeignKeyHash::new(&changed_referencing).digest(), digest);
            assert_ne!(ForeignKeyHash::new(&changed_referenced).digest(), digest);
        }
    }

    #[test]
    fn replacing_an_endpoint_table_changes_digest() {
        let fk = fixtures::reference_foreign_key();
        let (referencing, _) = fixtures::reference_endpoint_tables();
        let renamed = Table::new(
            "Sample name2",
            fk.referenced_table().columns().to_vec(),
            fk.referenced_table().indexes().to_vec(),
        );
        let retargeted = ForeignKey::new(
            referencing,
            fk.referencing_columns().to_vec(),
            renamed,
            fk.referenced_columns().to_vec(),
        );

        assert_ne!(
            ForeignKeyHash::new(&retargeted).digest(),
            ForeignKeyHash::new(&fk).digest()
        );
    }
}
