//! ASCII PLY writer for colored point clouds.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::traits::{ColoredPoint, Writer};

/// Collects points and writes them as an ASCII PLY 1.0 file with
/// `x y z red green blue count` per vertex.
#[derive(Debug, Default)]
pub struct PlyWriter {
    points: Vec<ColoredPoint>,
}

impl PlyWriter {
    /// Write the PLY document to any sink.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "ply")?;
        writeln!(out, "format ascii 1.0")?;
        writeln!(out, "comment generated by binviz")?;
        writeln!(out, "element vertex {}", self.points.len())?;
        writeln!(out, "property float x")?;
        writeln!(out, "property float y")?;
        writeln!(out, "property float z")?;
        writeln!(out, "property uchar red")?;
        writeln!(out, "property uchar green")?;
        writeln!(out, "property uchar blue")?;
        // PLY has no 64-bit integer type.
        writeln!(out, "property double count")?;
        writeln!(out, "end_header")?;

        for p in &self.points {
            writeln!(
                out,
                "{:.6} {:.6} {:.6} {} {} {} {}",
                p.position[0],
                p.position[1],
                p.position[2],
                p.color[0],
                p.color[1],
                p.color[2],
                p.count
            )?;
        }
        out.flush()
    }
}

impl Writer for PlyWriter {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_declares_vertex_count_and_properties() {
        let mut writer = PlyWriter::new();
        writer.add_points(&[
            ColoredPoint {
                position: [0.0, 0.5, -0.5],
                color: [1, 2, 3],
                count: 4,
            },
            ColoredPoint {
                position: [1.0, 0.0, 0.0],
                color: [255, 0, 0],
                count: 5_000_000_000,
            },
        ]);

        let mut out = Vec::new();
        writer.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ply");
        assert!(lines.contains(&"element vertex 2"));
        assert!(lines.contains(&"property double count"));
        let body: Vec<&str> = lines
            .iter()
            .skip_while(|l| **l != "end_header")
            .skip(1)
            .copied()
            .collect();
        assert_eq!(
            body,
            vec![
                "0.000000 0.500000 -0.500000 1 2 3 4",
                "1.000000 0.000000 0.000000 255 0 0 5000000000",
            ]
        );
    }
}
