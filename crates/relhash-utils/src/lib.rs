//! Test-support utilities shared across the relhash crates.
//!
//! Nothing here is reachable from the hashing path; randomness only ever
//! feeds fixtures.

pub mod fixtures;
pub mod random;

pub use random::FixtureRng;
