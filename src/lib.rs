//! MurmurHash2 and MurmurHash3 (x86, 32-bit).
//!
//! Fast, deterministic, non-cryptographic 32-bit digests, bit-compatible
//! with the reference implementations on every platform.
//!
//! ```
//! use murmur_hash::{hash, hash_v2, Variant};
//!
//! assert_eq!(hash("test", 0u32), 3127628307);
//! assert_eq!(hash_v2("test", 0), 403862830);
//! assert_eq!(Variant::V3.hash(b"test", 0u32), 3127628307);
//! ```
//!
//! The whole buffer is hashed in one call. [`murmur2`] and [`murmur3`] are
//! `const fn` and can produce digests at compile time.

mod seed;
mod v2;
mod v3;
mod variant;
mod word;

pub use seed::Seed;
pub use v2::{murmur2, MurmurHash2};
pub use v3::{murmur3, MurmurHash3};
pub use variant::{ErrorKind, ParseVariantError, Variant};

/// Hashes `buf` with the default variant, MurmurHash3.
#[inline]
pub fn hash(buf: impl AsRef<[u8]>, seed: impl Seed) -> u32 {
    murmur3(buf.as_ref(), seed.reduce())
}

/// Hashes `buf` with MurmurHash2.
#[inline]
pub fn hash_v2(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    murmur2(buf.as_ref(), seed)
}

/// Hashes `buf` with MurmurHash3.
#[inline]
pub fn hash_v3(buf: impl AsRef<[u8]>, seed: u32) -> u32 {
    murmur3(buf.as_ref(), seed)
}

#[test]
fn test() {
    let mut t: u64 = 0;

    for i in 0..100u32 {
        let seed = i.wrapping_mul(0x9e37_79b9);
        let v2 = MurmurHash2::new(seed);
        let v3 = MurmurHash3::new(seed);
        let mut size = 1;
        loop {
            let m = vec![i as u8; size];
            t += v2.hash(&m) as u64;
            t += v3.hash(&m) as u64;
            if size >= 4096 {
                break;
            }
            size *= 2;
        }

        let mut size = 1;
        loop {
            let m = vec![i as u8; size];
            t += hash(&m, seed) as u64;
            if size >= 4096 {
                break;
            }
            size *= 3;
        }
    }

    assert_eq!(t, 0x6dff45d86e7);
}
