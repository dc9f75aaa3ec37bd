use serde::{Deserialize, Serialize};

/// 32-bit content checksum of a clip, used for duplicate detection.
///
/// Standard CRC-32: the accumulator starts at all-ones, every payload is folded
/// through the running accumulator in canonical order, and the final value is
/// complemented. Folding several payloads is therefore the CRC of their
/// concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(u32);

impl Checksum {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn of<'a>(payloads: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        for payload in payloads {
            hasher.update(payload);
        }
        Self(hasher.finalize())
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Stored in a signed 64-bit column so every u32 fits.
    pub fn to_storage(&self) -> i64 {
        i64::from(self.0)
    }

    pub fn from_storage(value: i64) -> Self {
        Self(value as u32)
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
