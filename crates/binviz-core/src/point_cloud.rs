use crate::packed_key::BYTES_PER_KEY;
use crate::point::Point;

/// Summary of one decode run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStats {
    pub bytes_read: usize,
    pub num_keys: usize,
    /// Bytes at the end of the input that did not complete a key.
    pub trailing_bytes: usize,
    pub unique_points: usize,
    /// Largest occurrence count of any point, 0 for an empty cloud.
    pub max_count: u64,
}

/// The decoded point cloud, in ascending key order.
#[derive(Debug, Default, Clone)]
pub struct DecodedCloud {
    points: Vec<Point>,
    stats: DecodeStats,
}

impl DecodedCloud {
    pub fn new(points: Vec<Point>, bytes_read: usize) -> Self {
        let num_keys: usize = points.iter().map(|p| p.count as usize).sum();
        let max_count = points.iter().map(|p| p.count).max().unwrap_or(0);
        let stats = DecodeStats {
            bytes_read,
            num_keys,
            trailing_bytes: bytes_read.saturating_sub(num_keys * BYTES_PER_KEY),
            unique_points: points.len(),
            max_count,
        };
        Self { points, stats }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// True when the input held fewer than three bytes: nothing to visualize.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.points.iter().map(|p| p.position).collect()
    }
}

impl<'a> IntoIterator for &'a DecodedCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
