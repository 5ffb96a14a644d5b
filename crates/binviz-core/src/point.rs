use crate::packed_key::PackedKey;

/// One unique key of the input, placed in 3-D space.
///
/// Points are unique by key, not by position: every key with a zero low byte
/// has radius 0 and sits on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: [f32; 3],
    /// Number of times the key occurred anywhere in the stream.
    pub count: u64,
    /// Position of this point within the sorted, deduplicated output. This is
    /// not the offset of the key's first occurrence in the file.
    pub first_index: usize,
    pub key: PackedKey,
}

impl Point {
    pub fn new(key: PackedKey, position: [f32; 3], first_index: usize) -> Self {
        Self {
            position,
            count: 1,
            first_index,
            key,
        }
    }

    pub fn x(&self) -> f32 {
        self.position[0]
    }

    pub fn y(&self) -> f32 {
        self.position[1]
    }

    pub fn z(&self) -> f32 {
        self.position[2]
    }

    /// Squared distance from the origin.
    pub fn norm_squared(&self) -> f32 {
        self.position.iter().map(|c| c * c).sum()
    }
}
