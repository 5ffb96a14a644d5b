//! OBJ writer for point clouds.
//!
//! OBJ has no point primitive worth using here, so only vertices are written,
//! with the widely supported `v x y z r g b` color extension.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::traits::{ColoredPoint, Writer};

#[derive(Debug, Default)]
pub struct ObjWriter {
    points: Vec<ColoredPoint>,
}

impl ObjWriter {
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "# binviz point cloud")?;
        writeln!(out, "# {} points", self.points.len())?;
        for p in &self.points {
            writeln!(
                out,
                "v {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
                p.position[0],
                p.position[1],
                p.position[2],
                p.color[0] as f32 / 255.0,
                p.color[1] as f32 / 255.0,
                p.color[2] as f32 / 255.0,
            )?;
        }
        out.flush()
    }
}

impl Writer for ObjWriter {
    fn new() -> Self {
        Self::default()
    }

    fn add_points(&mut self, points: &[ColoredPoint]) {
        self.points.extend_from_slice(points);
    }

    fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let file = fs::File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        log::info!("wrote {} vertices to {}", self.points.len(), path.display());
        Ok(())
    }

    fn vertex_count(&self) -> usize {
        self.points.len()
    }
}
