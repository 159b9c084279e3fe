//! Order-independent combination of child digests.
//!
//! Children of an unordered collection are folded with byte-wise XOR into an
//! all-zero accumulator. The fold is commutative and associative, so any
//! permutation of the input yields the same value. Repeats are XORed once per
//! occurrence (two equal children cancel). The result is an intermediate
//! value: parents always run it through SHA-256 again behind their prefix.

use crate::{DIGEST_LEN, Digest};

///
/// Aggregate
///
/// Incremental XOR accumulator over child digests.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Aggregate {
    acc: [u8; DIGEST_LEN],
    len: usize,
}

impl Aggregate {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            acc: [0; DIGEST_LEN],
            len: 0,
        }
    }

    pub fn push(&mut self, digest: Digest) {
        for (acc, byte) in self.acc.iter_mut().zip(digest.as_bytes()) {
            *acc ^= byte;
        }
        self.len += 1;
    }

    /// Number of digests folded so far, repeats included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn finish(self) -> Digest {
        Digest::from_bytes(self.acc)
    }
}

impl Extend<Digest> for Aggregate {
    fn extend<I: IntoIterator<Item = Digest>>(&mut self, iter: I) {
        for digest in iter {
            self.push(digest);
        }
    }
}

impl FromIterator<Digest> for Aggregate {
    fn from_iter<I: IntoIterator<Item = Digest>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        aggregate.extend(iter);
        aggregate
    }
}

///
/// aggregate
///
/// Fold a collection of child digests into one order-independent value.
///

#[must_use]
pub fn aggregate<I: IntoIterator<Item = Digest>>(digests: I) -> Digest {
    digests.into_iter().collect::<Aggregate>().finish()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256;

    fn digests() -> Vec<Digest> {
        ["a", "b", "c", "d"]
            .iter()
            .map(|s| sha256(s.as_bytes()))
            .collect()
    }

    #[test]
    fn empty_collection_aggregates_to_zero() {
        assert_eq!(aggregate(Vec::new()), Digest::ZERO);
        assert!(Aggregate::new().is_empty());
    }

    #[test]
    fn single_element_aggregates_to_itself() {
        let one = sha256(b"one");

        assert_eq!(aggregate([one]), one);
    }

    #[test]
    fn permutations_aggregate_identically() {
        let forward = digests();
        let mut reversed = forward.clone();
        reversed.reverse();
        let rotated = [&forward[2..], &forward[..2]].concat();

        let expected = aggregate(forward);
        assert_eq!(aggregate(reversed), expected);
        assert_eq!(aggregate(rotated), expected);
    }

    #[test]
    fn repeats_are_not_collapsed() {
        let members = digests();
        let (a, b) = (members[0], members[1]);

        assert_ne!(aggregate([a, b, b]), aggregate([a, b]));
        assert_eq!(aggregate([a, b, b]), aggregate([a]));
    }

    #[test]
    fn changing_one_member_changes_the_aggregate() {
        let mut members = digests();
        let before = aggregate(members.clone());
        members[1] = sha256(b"changed");

        assert_ne!(aggregate(members), before);
    }

    #[test]
    fn incremental_push_matches_collect() {
        let mut acc = Aggregate::new();
        for digest in digests() {
            acc.push(digest);
        }

        assert_eq!(acc.len(), 4);
        assert_eq!(acc.finish(), aggregate(digests()));
    }
}
