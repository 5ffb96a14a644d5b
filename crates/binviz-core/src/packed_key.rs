//! Packing of byte triples into 24-bit keys
//!
//! A binary stream is read as a flat run of 3-byte groups. Each group becomes
//! one [`PackedKey`], little-endian: the first byte of the group is the least
//! significant. The keys serve both as the deduplication key and as the
//! source of the spherical coordinates of a point.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

/// Number of bytes packed into one key.
pub const BYTES_PER_KEY: usize = 3;

/// Largest value a key can hold.
pub const MAX_KEY: u32 = 0x00FF_FFFF;

/// A 24-bit key formed from three consecutive bytes `(b0, b1, b2)` as
/// `b2 << 16 | b1 << 8 | b0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PackedKey(u32);

impl PackedKey {
    /// Packs a byte triple. Bytes are unsigned, so values 0x80..=0xFF land in
    /// their own 8 bits without touching the bits above them.
    ///
    /// # Examples
    /// ```
    /// use binviz_core::packed_key::PackedKey;
    /// assert_eq!(PackedKey::from_bytes([1, 2, 3]).value(), 0x030201);
    /// assert_eq!(PackedKey::from_bytes([0xFF, 0x80, 0x00]).value(), 0x0080FF);
    /// ```
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(LittleEndian::read_u24(&bytes))
    }

    /// Builds a key from a raw value. Bits above the low 24 are discarded.
    pub fn from_value(value: u32) -> Self {
        Self(value & MAX_KEY)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The byte triple this key was packed from, in stream order.
    pub fn to_bytes(self) -> [u8; 3] {
        let mut bytes = [0u8; 3];
        LittleEndian::write_u24(&mut bytes, self.0);
        bytes
    }

    /// Byte components as `(high, mid, low)`, i.e. `(b2, b1, b0)`.
    pub fn components(self) -> (u8, u8, u8) {
        let [b0, b1, b2] = self.to_bytes();
        (b2, b1, b0)
    }

    /// Components scaled into `[0, 1]`, ordered like [`PackedKey::components`].
    pub fn normalized(self) -> [f32; 3] {
        let (hi, mid, lo) = self.components();
        [hi as f32 / 255.0, mid as f32 / 255.0, lo as f32 / 255.0]
    }
}

impl From<[u8; 3]> for PackedKey {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for PackedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#08x}", self.0)
    }
}

/// Splits `bytes` into consecutive triples and packs each into a key.
///
/// Exactly `bytes.len() / 3` keys are returned, in stream order. A trailing
/// remainder of one or two bytes is dropped without error.
pub fn extract_keys(bytes: &[u8]) -> Vec<PackedKey> {
    bytes
        .chunks_exact(BYTES_PER_KEY)
        .map(|chunk| PackedKey(LittleEndian::read_u24(chunk)))
        .collect()
}

/// Number of bytes at the end of a stream of `len` bytes that do not form a
/// complete key.
pub fn trailing_bytes(len: usize) -> usize {
    len % BYTES_PER_KEY
}
