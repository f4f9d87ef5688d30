//! Time-Seeded Name Generator
//!
//! 時刻をシードにした乱数でコンテナ名のサフィックスを作る

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::services::container_naming::NameGenerator;

/// Produces a non-negative 63-bit decimal suffix from a clock-seeded RNG
pub struct TimeSeededNameGenerator;

impl TimeSeededNameGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Suffix for a given seed
    pub fn suffix_for_seed(seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        let value: u64 = rng.random::<u64>() >> 1;
        value.to_string()
    }
}

impl Default for TimeSeededNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameGenerator for TimeSeededNameGenerator {
    fn suffix(&self) -> String {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self::suffix_for_seed(seed)
    }
}
