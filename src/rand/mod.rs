//! Random index sources.
//!
//! Password generation only needs uniform indices into the alphabet, so every
//! source implements [`IndexSource`] and the generator never cares which one
//! it is talking to.

mod hw;
mod os;
mod seeded;

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};

pub use os::OsRand;
pub use seeded::SeededRand;

/// Produces uniformly distributed indices.
pub trait IndexSource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `[0, bound)`. Returns 0 when `bound` is 0 or 1.
    fn index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        // Draws at or above the last full multiple of `bound` are rejected
        let limit = (u64::MAX / bound) * bound;
        loop {
            let x = self.next_u64();
            if x < limit {
                return (x % bound) as usize;
            }
        }
    }
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

impl<S: IndexSource + ?Sized> IndexSource for Box<S> {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

// =============================================================================
// Default generator
// =============================================================================

const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
    0x8ebc_6af0_9c88_c6e3,
    0x5894_9a2d_ab32_1e65,
];

static STATE: AtomicU64 = AtomicU64::new(0);

/// General-purpose generator: cycle-counter entropy folded into a rotating
/// state, finished with the SplitMix64 output mix. Fast, not cryptographic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rand;

impl Rand {
    #[inline(always)]
    pub fn get() -> u64 {
        let state = STATE.load(Ordering::Relaxed);
        let ent = hw::entropy();

        let mixed = state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        let new_state = state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;
        STATE.store(new_state, Ordering::Relaxed);

        splitmix_finalize(new_state)
    }
}

impl IndexSource for Rand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        Rand::get()
    }
}

#[inline(always)]
pub(crate) fn splitmix_finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

pub fn zeroize_state() {
    STATE.store(0, Ordering::SeqCst);
}

// =============================================================================
// Source selection
// =============================================================================

/// Which index source a run draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    #[default]
    Hardware,
    Urandom,
    Seeded(u64),
}

impl SourceKind {
    pub fn open(self) -> io::Result<Box<dyn IndexSource>> {
        Ok(match self {
            SourceKind::Hardware => Box::new(Rand),
            SourceKind::Urandom => Box::new(OsRand::open()?),
            SourceKind::Seeded(seed) => Box::new(SeededRand::new(seed)),
        })
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Hardware => f.write_str(hw::source_name()),
            SourceKind::Urandom => f.write_str("/dev/urandom"),
            SourceKind::Seeded(seed) => write!(f, "seeded ({seed})"),
        }
    }
}
