//! Deduplication of packed keys and their placement on the unit ball
//!
//! Keys are sorted so that equal values sit next to each other, then a single
//! linear pass collapses each run into one [`Point`] carrying the run length.
//! Sorting also gives the output its ascending-key order, and needs no
//! memory beyond the key buffer itself.

use std::f32::consts::TAU;

use crate::decoder_options::{DecoderOptions, SortMethod};
use crate::packed_key::PackedKey;
use crate::point::Point;

/// Maps a key onto a point inside the unit ball.
///
/// The high and middle bytes become the polar and azimuthal angles (each
/// scaled to `[0, 2π]`), the low byte becomes the radius in `[0, 1]`. See
/// <http://en.wikipedia.org/wiki/Spherical_coordinate_system>.
///
/// The mapping is not injective: all 65 536 keys with a zero low byte map to
/// the origin.
///
/// # Examples
/// ```
/// use binviz_core::packed_key::PackedKey;
/// use binviz_core::point_mapper::spherical_position;
/// // Zero radius always lands on the origin.
/// assert_eq!(spherical_position(PackedKey::from_value(0)), [0.0, 0.0, 0.0]);
/// ```
pub fn spherical_position(key: PackedKey) -> [f32; 3] {
    let [nx, ny, nz] = key.normalized();
    let theta = nx * TAU;
    let phi = ny * TAU;
    let radius = nz;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    [
        radius * sin_theta * cos_phi,
        radius * sin_theta * sin_phi,
        radius * cos_theta,
    ]
}

/// Sorts `keys`, collapses repeats and maps every distinct key to a point.
///
/// The returned points are unique by key (not by position, see
/// [`spherical_position`]) and in ascending key order. Each `count` is the
/// number of occurrences of its key, and `first_index` is the point's position
/// in the returned vector. The counts always sum to the number of input keys.
pub fn map_points(keys: Vec<PackedKey>) -> Vec<Point> {
    map_points_with(keys, &DecoderOptions::default())
}

/// [`map_points`] with an explicit sort strategy.
pub fn map_points_with(mut keys: Vec<PackedKey>, options: &DecoderOptions) -> Vec<Point> {
    sort_keys(&mut keys, options);
    collapse_sorted(&keys)
}

fn sort_keys(keys: &mut [PackedKey], options: &DecoderOptions) {
    let wants_parallel = options.get_sort_method() == SortMethod::Parallel
        && keys.len() >= options.get_parallel_sort_threshold();

    if wants_parallel && parallel_sort(keys) {
        return;
    }
    keys.sort_unstable();
}

#[cfg(feature = "parallel")]
fn parallel_sort(keys: &mut [PackedKey]) -> bool {
    use rayon::prelude::*;

    log::debug!("sorting {} keys in parallel", keys.len());
    keys.par_sort_unstable();
    true
}

#[cfg(not(feature = "parallel"))]
fn parallel_sort(_keys: &mut [PackedKey]) -> bool {
    log::warn!("parallel sort requested but the `parallel` feature is disabled");
    false
}

/// Single pass over sorted keys. Runs of equal keys become one point.
fn collapse_sorted(keys: &[PackedKey]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    let mut duplicates = 0usize;

    for &key in keys {
        if let Some(last) = points.last_mut() {
            if last.key == key {
                last.count += 1;
                duplicates += 1;
                continue;
            }
        }
        let index = points.len();
        points.push(Point::new(key, spherical_position(key), index));
    }

    log::debug!(
        "collapsed {} keys into {} points ({} duplicates)",
        keys.len(),
        points.len(),
        duplicates
    );
    points
}
