//! ASCII PLY reader for vertex positions.
//!
//! Used to load exported clouds back, e.g. to diff two exports.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::traits::PointCloudReader;

#[derive(Debug)]
pub struct PlyReader {
    path: PathBuf,
}

impl PlyReader {
    /// Read all positions from the PLY file.
    pub fn read_positions(&mut self) -> io::Result<Vec<[f32; 3]>> {
        read_ply_positions(&self.path)
    }
}

impl PointCloudReader for PlyReader {
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ));
        }
        Ok(Self { path })
    }

    fn read_points(&mut self) -> io::Result<Vec<[f32; 3]>> {
        self.read_positions()
    }
}

fn invalid(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}

/// Parse vertex positions from an ASCII PLY file.
pub fn read_ply_positions<P: AsRef<Path>>(path: P) -> io::Result<Vec<[f32; 3]>> {
    let file = fs::File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let mut in_header = true;
    let mut in_vertex_element = false;
    let mut vertex_count = 0usize;
    let mut axis_idx: [Option<usize>; 3] = [None; 3];
    let mut prop_idx = 0;

    for line in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed == "end_header" {
            in_header = false;
            break;
        }

        let mut words = trimmed.split_whitespace();
        match words.next() {
            Some("format") if words.next() != Some("ascii") => {
                return Err(invalid("Only ASCII PLY is supported"));
            }
            Some("element") => {
                in_vertex_element = words.next() == Some("vertex");
                if in_vertex_element {
                    vertex_count = words
                        .next()
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| invalid("Invalid vertex count"))?;
                }
            }
            Some("property") if in_vertex_element => {
                let name = words.last();
                let axis = match name {
                    Some("x") => Some(0),
                    Some("y") => Some(1),
                    Some("z") => Some(2),
                    _ => None,
                };
                if let Some(axis) = axis {
                    axis_idx[axis] = Some(prop_idx);
                }
                prop_idx += 1;
            }
            _ => {}
        }
    }

    if in_header {
        return Err(invalid("No end_header found"));
    }

    let x_idx = axis_idx[0].ok_or_else(|| invalid("No x property"))?;
    let y_idx = axis_idx[1].ok_or_else(|| invalid("No y property"))?;
    let z_idx = axis_idx[2].ok_or_else(|| invalid("No z property"))?;
    let min_fields = x_idx.max(y_idx).max(z_idx);

    let mut positions = Vec::with_capacity(vertex_count);
    for line in lines {
        if positions.len() >= vertex_count {
            break;
        }
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() <= min_fields {
            return Err(invalid("Truncated vertex line"));
        }

        let x: f32 = parts[x_idx].parse().map_err(|_| invalid("Bad x value"))?;
        let y: f32 = parts[y_idx].parse().map_err(|_| invalid("Bad y value"))?;
        let z: f32 = parts[z_idx].parse().map_err(|_| invalid("Bad z value"))?;
        positions.push([x, y, z]);
    }

    if positions.len() < vertex_count {
        return Err(invalid("Fewer vertices than declared"));
    }
    Ok(positions)
}
