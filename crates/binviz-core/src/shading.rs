//! Per-point color signal
//!
//! Two inputs drive the color: the occurrence count (saturating at ten) and
//! the point's relative position in the sorted output. Channels are clamped
//! to `[0, 1]` the way a fixed-function color input is.

use crate::point::Point;

/// Count at which the count signal saturates.
pub const COUNT_SCALE: f32 = 10.0;

/// Color of `point` in a cloud of `num_points` points, as `[r, g, b]`.
pub fn shade(point: &Point, num_points: usize) -> [f32; 3] {
    let color = if num_points == 0 {
        0.0
    } else {
        point.first_index as f32 / num_points as f32
    };
    let count = point.count as f32 / COUNT_SCALE;
    [
        color.clamp(0.0, 1.0),
        (1.0 - count).clamp(0.0, 1.0),
        (1.0 - count * color).clamp(0.0, 1.0),
    ]
}

/// [`shade`] quantized to 8-bit channels.
pub fn shade_rgb8(point: &Point, num_points: usize) -> [u8; 3] {
    shade(point, num_points).map(|c| (c * 255.0).round() as u8)
}
