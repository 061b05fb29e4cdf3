//! Seed reduction.
//!
//! Both algorithms take a 32-bit seed word. Wider or signed integers are
//! accepted and reduced modulo 2^32, keeping the low 32 bits of their
//! two's complement representation.

/// An integer usable as a hash seed.
pub trait Seed: Copy {
    /// Returns the seed as the 32-bit word the algorithms consume.
    fn reduce(self) -> u32;
}

macro_rules! impl_seed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Seed for $t {
                #[inline(always)]
                fn reduce(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_seed!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
