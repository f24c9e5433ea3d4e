//! Deterministic SplitMix64 source for reproducible runs.

use super::{IndexSource, splitmix_finalize};

#[derive(Debug, Clone)]
pub struct SeededRand {
    state: u64,
}

impl SeededRand {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl IndexSource for SeededRand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        splitmix_finalize(self.state)
    }
}
