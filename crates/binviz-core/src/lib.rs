//! binviz core library
//!
//! Turns an arbitrary byte stream into a cloud of unique 3-D points.
//! Consecutive byte triples become 24-bit keys; identical keys are merged
//! with an occurrence count and every distinct key is placed inside the unit
//! ball by a spherical-to-Cartesian mapping.
//!
//! ```no_run
//! let cloud = binviz_core::decode("firmware.bin")?;
//! for point in &cloud {
//!     println!("{:?} x{}", point.position, point.count);
//! }
//! # Ok::<(), binviz_core::BinvizError>(())
//! ```

pub mod decoder;
pub mod decoder_options;
pub mod packed_key;
pub mod point;
pub mod point_cloud;
pub mod point_mapper;
pub mod shading;
pub mod status;
pub mod view_state;

pub use decoder::{decode, decode_bytes, decode_bytes_with_options, decode_with_options};
pub use decoder_options::{DecoderOptions, SortMethod};
pub use packed_key::{extract_keys, PackedKey};
pub use point::Point;
pub use point_cloud::{DecodeStats, DecodedCloud};
pub use point_mapper::{map_points, map_points_with, spherical_position};
pub use shading::{shade, shade_rgb8};
pub use status::{BinvizError, Status, StatusResult};
pub use view_state::ViewState;
