//! MurmurHash3, x86 32-bit (r136).

use crate::seed::Seed;
use crate::word::{le_u32, tail, tail_u32};

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Hashes `buf` with MurmurHash3.
///
/// Usable in constant expressions.
pub const fn murmur3(buf: &[u8], seed: u32) -> u32 {
    let mut h1 = seed;

    let (body, rest) = tail(buf);
    let mut i = 0;
    while i < body {
        h1 ^= mix_k1(le_u32(buf, i));
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe654_6b64);
        i += 4;
    }

    if !rest.is_empty() {
        h1 ^= mix_k1(tail_u32(rest));
    }

    fmix32(h1 ^ buf.len() as u32)
}

#[inline(always)]
const fn mix_k1(mut k1: u32) -> u32 {
    k1 = k1.wrapping_mul(C1);
    k1 = k1.rotate_left(15);
    k1.wrapping_mul(C2)
}

#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// A seeded MurmurHash3 instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MurmurHash3 {
    seed: u32,
}

impl MurmurHash3 {
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
        murmur3(buf.as_ref(), self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_vectors() {
        static TEST_VECTORS: [(u32, u32, &[u8]); 13] = [
            (0, 0, b""),
            (0x514E28B7, 1, b""),
            (0x81F16F39, 0xffffffff, b""),
            (0x76293B50, 0, &[0xff, 0xff, 0xff, 0xff]),
            (0xF55B516B, 0, &[0x21, 0x43, 0x65, 0x87]),
            (0x2362F9DE, 0x5082EDEE, &[0x21, 0x43, 0x65, 0x87]),
            (0x7E4A8634, 0, &[0x21, 0x43, 0x65]),
            (0xA0F7B07A, 0, &[0x21, 0x43]),
            (0x72661CF4, 0, &[0x21]),
            (0x2362F9DE, 0, &[0, 0, 0, 0]),
            (0x85F0B427, 0, &[0, 0, 0]),
            (0x30F4C306, 0, &[0, 0]),
            (0x514E28B7, 0, &[0]),
        ];

        for &(expected, seed, input) in TEST_VECTORS.iter() {
            assert_eq!(expected, murmur3(input, seed), "{:?} / {:#x}", input, seed);
        }
    }

    #[test]
    fn text() {
        assert_eq!(murmur3(b"test", 0), 3127628307);
        assert_eq!(murmur3(b"Hello, world!", 0), 3224780355);
        assert_eq!(murmur3(b"Hello, world!", 0x9747_b28c), 612912314);
        assert_eq!(
            murmur3(b"The quick brown fox jumps over the lazy dog", 0),
            0x2e4f_f723
        );
    }

    #[test]
    fn every_tail_length() {
        let vectors: [(&[u8], u32, u32); 8] = [
            (b"", 0, 3954623016),
            (b"a", 1009084850, 2141232806),
            (b"ab", 2613040991, 1955026322),
            (b"abc", 3017643002, 3360318173),
            (b"abcd", 1139631978, 4031219239),
            (b"abcde", 3902511862, 3910514738),
            (b"abcdefg", 2285673222, 3211915184),
            (b"abcdefgh", 1239272644, 3473041124),
        ];
        for (input, zero_seed, other_seed) in vectors {
            assert_eq!(murmur3(input, 0), zero_seed, "{:?}", input);
            assert_eq!(murmur3(input, 0x9747_b28c), other_seed, "{:?}", input);
        }
    }

    #[test]
    fn long_input_wraps() {
        let buf: Vec<u8> = (0..1000u32).map(|i| (i * 31 + 7) as u8).collect();
        assert_eq!(murmur3(&buf, 0), 394639832);
        assert_eq!(murmur3(&buf, 0xdead_beef), 309785528);

        let ones = [0xffu8; 513];
        assert_eq!(murmur3(&ones, u32::MAX), 458591258);
    }

    #[test]
    fn const_evaluation() {
        const H: u32 = murmur3(b"test", 0);
        assert_eq!(H, 3127628307);
    }

    #[test]
    fn hasher_matches_free_function() {
        let hasher = MurmurHash3::new(0x9747_b28cu32);
        assert_eq!(hasher.hash("Hello, world!"), 612912314);
        assert_eq!(MurmurHash3::default().hash(String::from("test")), 3127628307);
        assert_eq!(MurmurHash3::new(-1i32).hash(b"test"), 1708948417);
        assert_eq!(
            MurmurHash3::new((1u64 << 32) + 5).hash("test"),
            murmur3(b"test", 5)
        );
        assert_eq!(MurmurHash3::from_u32_seed(7), MurmurHash3::new(7u8));
    }
}
