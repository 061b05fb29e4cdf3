use core::fmt;
use core::str::FromStr;

use crate::seed::Seed;
use crate::v2::murmur2;
use crate::v3::murmur3;

/// Selects one of the two hash revisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// MurmurHash2.
    V2,
    /// MurmurHash3 x86_32, the default.
    #[default]
    V3,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::V2, Variant::V3];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::V2 => "v2",
            Variant::V3 => "v3",
        }
    }

    pub fn hash(self, buf: impl AsRef<[u8]>, seed: impl Seed) -> u32 {
        let buf = buf.as_ref();
        let seed = seed.reduce();
        match self {
            Variant::V2 => murmur2(buf, seed),
            Variant::V3 => murmur3(buf, seed),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const V2: [&str; 3] = ["v2", "2", "murmur2"];
        const V3: [&str; 3] = ["v3", "3", "murmur3"];

        if V2.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            Ok(Variant::V2)
        } else if V3.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            Ok(Variant::V3)
        } else {
            Err(ParseVariantError {
                name: s.into(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
}

/// Returned when a string does not name a known [`Variant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    name: String,
}

impl ParseVariantError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }

    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown murmur hash variant {:?}, expected v2 or v3", self.name)
    }
}

impl std::error::Error for ParseVariantError {}
