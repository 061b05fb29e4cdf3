//! Little-endian word loads shared by both variants.
//!
//! Mixing itself is done with the native `u32` operations
//! (`wrapping_mul`, `wrapping_add`, `rotate_left`, `>>`), which already
//! have the modulo 2^32 semantics the reference algorithms assume.

/// Reads the little-endian word starting at `offset`.
///
/// The caller guarantees `offset + 4 <= buf.len()`.
#[inline(always)]
pub(crate) const fn le_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Folds the 0 to 3 bytes left over after the word loop.
///
/// Bytes are folded from the last one down to the first, each at its
/// little-endian position.
#[inline(always)]
pub(crate) const fn tail_u32(tail: &[u8]) -> u32 {
    let mut k = 0u32;
    match tail.len() {
        3 => {
            k ^= (tail[2] as u32) << 16;
            k ^= (tail[1] as u32) << 8;
            k ^= tail[0] as u32;
        }
        2 => {
            k ^= (tail[1] as u32) << 8;
            k ^= tail[0] as u32;
        }
        1 => {
            k ^= tail[0] as u32;
        }
        _ => {}
    }
    k
}

/// Splits `buf` into the word-aligned body length and the trailing bytes.
#[inline(always)]
pub(crate) const fn tail(buf: &[u8]) -> (usize, &[u8]) {
    let body = buf.len() & !3;
    let (_, tail) = buf.split_at(body);
    (body, tail)
}
