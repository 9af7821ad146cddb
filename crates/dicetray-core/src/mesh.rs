//! Mesh preview
//!
//! Evaluates a [`Solid`] tree with csgrs so the generated models can be
//! inspected without OpenSCAD. The rounded tray blank is rebuilt from a
//! rounded rectangle sketch, everything else maps one to one onto csgrs
//! primitives and booleans.

use crate::error::{CoreError, CoreResult};
use crate::solid::{Bounds, Solid};
use csgrs::mesh::Mesh;
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use nalgebra::Point3;
use tracing::debug;

/// Segments used for each rounded corner of the tray blank.
const CORNER_SEGMENTS: usize = 8;

/// Converts solids into csgrs meshes.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    segments: usize,
}

impl MeshBuilder {
    /// `segments` is the number of facets around each cylinder.
    pub fn new(segments: usize) -> CoreResult<Self> {
        if segments < 3 {
            return Err(CoreError::InvalidGeometry(format!(
                "cylinders need at least 3 segments, got {}",
                segments
            )));
        }
        Ok(Self { segments })
    }

    pub fn build(&self, solid: &Solid) -> CoreResult<Mesh<()>> {
        let mesh = match solid {
            Solid::Cube { size } => {
                check_positive("cube", size)?;
                Mesh::cuboid(size[0], size[1], size[2], None)
            }
            Solid::Cylinder { diameter, height } => {
                check_positive("cylinder", &[*diameter, *height])?;
                Mesh::cylinder(diameter / 2.0, *height, self.segments, None)
            }
            Solid::RoundedCube { size, radius, .. } => {
                check_positive("roundedCube", size)?;
                let r = radius.clamp(0.0, size[0].min(size[1]) / 2.0);
                if r > 0.0 {
                    Sketch::rounded_rectangle(size[0], size[1], r, CORNER_SEGMENTS, None)
                        .extrude(size[2])
                } else {
                    Mesh::cuboid(size[0], size[1], size[2], None)
                }
            }
            Solid::Translate { offset, child } => {
                self.build(child)?.translate(offset[0], offset[1], offset[2])
            }
            Solid::Rotate { degrees, child } => {
                self.build(child)?.rotate(degrees[0], degrees[1], degrees[2])
            }
            Solid::Union(children) => {
                let mut parts = children.iter().map(|c| self.build(c));
                match parts.next() {
                    Some(first) => {
                        let mut acc = first?;
                        for part in parts {
                            acc = acc.union(&part?);
                        }
                        acc
                    }
                    None => Mesh::new(),
                }
            }
            Solid::Difference { base, cuts } => {
                let mut acc = self.build(base)?;
                for cut in cuts {
                    acc = acc.difference(&self.build(cut)?);
                }
                acc
            }
            Solid::Highlight(child) => self.build(child)?,
        };
        Ok(mesh)
    }

    pub fn to_stl_ascii(&self, solid: &Solid, name: &str) -> CoreResult<String> {
        let mesh = self.build(solid)?;
        debug!(name, polygons = mesh.polygons.len(), "Meshed solid");
        Ok(mesh.to_stl_ascii(name))
    }
}

/// Bounding box of an evaluated mesh.
pub fn mesh_bounds(mesh: &Mesh<()>) -> Bounds {
    let bb = mesh.bounding_box();
    Bounds::new(
        Point3::new(bb.mins.x, bb.mins.y, bb.mins.z),
        Point3::new(bb.maxs.x, bb.maxs.y, bb.maxs.z),
    )
}

fn check_positive(primitive: &str, dims: &[f64]) -> CoreResult<()> {
    if dims.iter().all(|d| d.is_finite() && *d > 0.0) {
        Ok(())
    } else {
        Err(CoreError::InvalidGeometry(format!(
            "{} dimensions must be positive, got {:?}",
            primitive, dims
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_too_few_segments() {
        assert!(MeshBuilder::new(2).is_err());
        assert!(MeshBuilder::new(3).is_ok());
    }

    #[test]
    fn test_rejects_degenerate_cube() {
        let mesher = MeshBuilder::new(16).unwrap();
        let err = mesher.build(&Solid::cube([1.0, 0.0, 1.0])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeometry(_)));
    }

    #[test]
    fn test_translated_cube_bounds() {
        let mesher = MeshBuilder::new(16).unwrap();
        let mesh = mesher
            .build(&Solid::cube([2.0, 3.0, 4.0]).translate([1.0, -3.0, 0.5]))
            .unwrap();
        let b = mesh_bounds(&mesh);
        assert!((b.min.x - 1.0).abs() < 1e-6);
        assert!((b.min.y + 3.0).abs() < 1e-6);
        assert!((b.max.z - 4.5).abs() < 1e-6);
    }
}
