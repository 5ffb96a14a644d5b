//! Common traits for point-cloud readers and writers.
//!
//! Import the trait to access its methods:
//!
//! ```ignore
//! use binviz_io::{PlyWriter, Writer};
//!
//! let mut writer = PlyWriter::new();
//! writer.add_cloud(&cloud);
//! writer.write("out.ply")?;
//! ```
//!
//! This enables generic export:
//!
//! ```ignore
//! fn save<W: Writer>(cloud: &DecodedCloud, path: &Path) -> io::Result<()> {
//!     let mut w = W::new();
//!     w.add_cloud(cloud);
//!     w.write(path)
//! }
//! ```

use std::io;
use std::path::Path;

use binviz_core::point_cloud::DecodedCloud;
use binviz_core::shading::shade_rgb8;

/// One exported vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    pub position: [f32; 3],
    pub color: [u8; 3],
    pub count: u64,
}

/// Common interface for point-cloud writers.
pub trait Writer: Sized {
    /// Create a new writer instance.
    fn new() -> Self;

    /// Add vertices to be written.
    fn add_points(&mut self, points: &[ColoredPoint]);

    /// Add every point of a decoded cloud, colored by its shading signal.
    fn add_cloud(&mut self, cloud: &DecodedCloud) {
        let n = cloud.num_points();
        let points: Vec<ColoredPoint> = cloud
            .iter()
            .map(|p| ColoredPoint {
                position: p.position,
                color: shade_rgb8(p, n),
                count: p.count,
            })
            .collect();
        self.add_points(&points);
    }

    /// Write all added points to a file.
    fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()>;

    /// Number of vertices added so far.
    fn vertex_count(&self) -> usize;
}

/// Common interface for point-cloud readers.
pub trait PointCloudReader: Sized {
    /// Open a file for reading.
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self>;

    /// Read point positions only.
    fn read_points(&mut self) -> io::Result<Vec<[f32; 3]>>;
}
