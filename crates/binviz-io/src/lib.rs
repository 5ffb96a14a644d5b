//! binviz I/O library for exporting decoded point clouds.
//!
//! # Supported Formats
//!
//! | Format | Read      | Write                 |
//! |--------|-----------|-----------------------|
//! | PLY    | positions | positions, color, count |
//! | OBJ    | -         | positions, color      |
//!
//! All writers implement [`Writer`]; the format can also be picked from a
//! file extension with [`write_cloud`].

use std::io;
use std::path::Path;

use binviz_core::point_cloud::DecodedCloud;

pub mod obj_writer;
pub mod ply_reader;
pub mod ply_writer;
pub mod traits;

pub use obj_writer::ObjWriter;
pub use ply_reader::{read_ply_positions, PlyReader};
pub use ply_writer::PlyWriter;
pub use traits::{ColoredPoint, PointCloudReader, Writer};

/// Export formats known to [`write_cloud`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Ply,
    Obj,
}

impl ExportFormat {
    /// Picks a format from the extension of `path`, case-insensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ply" => Some(ExportFormat::Ply),
            "obj" => Some(ExportFormat::Obj),
            _ => None,
        }
    }
}

fn save<W: Writer>(cloud: &DecodedCloud, path: &Path) -> io::Result<()> {
    let mut writer = W::new();
    writer.add_cloud(cloud);
    writer.write(path)
}

/// Writes `cloud` to `path` in the given format.
pub fn write_cloud<P: AsRef<Path>>(
    cloud: &DecodedCloud,
    path: P,
    format: ExportFormat,
) -> io::Result<()> {
    let path = path.as_ref();
    match format {
        ExportFormat::Ply => save::<PlyWriter>(cloud, path),
        ExportFormat::Obj => save::<ObjWriter>(cloud, path),
    }
}
