//! MurmurHash2, 32-bit.

use crate::seed::Seed;
use crate::word::{le_u32, tail, tail_u32};

const M: u32 = 0x5bd1_e995;
const R: u32 = 24;

/// Hashes `buf` with MurmurHash2.
///
/// Usable in constant expressions.
pub const fn murmur2(buf: &[u8], seed: u32) -> u32 {
    let mut h = seed ^ buf.len() as u32;

    let (body, rest) = tail(buf);
    let mut i = 0;
    while i < body {
        let mut k = le_u32(buf, i);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
        i += 4;
    }

    if !rest.is_empty() {
        h ^= tail_u32(rest);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}

/// A seeded MurmurHash2 instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MurmurHash2 {
    seed: u32,
}

impl MurmurHash2 {
    pub fn new(seed: impl Seed) -> Self {
        Self {
            seed: seed.reduce(),
        }
    }

    pub const fn from_u32_seed(seed: u32) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u32 {
        self.seed
    }

    pub fn hash(&self, buf: impl AsRef<[u8]>) -> u32 {
        murmur2(buf.as_ref(), self.seed)
    }
}
