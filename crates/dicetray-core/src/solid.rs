//! # Solid Model
//!
//! A small constructive solid geometry tree mirroring the OpenSCAD primitives
//! the tray generator needs. Solids are plain values: every operation
//! consumes its inputs and returns a new tree, nothing is evaluated until the
//! tree is written out (see [`crate::scad`]) or meshed (see [`crate::mesh`]).
//!
//! Placement helpers follow the usual OpenSCAD utility conventions:
//! `right`/`forward`/`up` move along +X/+Y/+Z and `back` moves along -Y.

use nalgebra::{Point3, Rotation3, Vector3};
use std::ops::{Add, Sub};

/// OpenSCAD library providing the `roundedCube` module.
pub const ROUNDED_CUBE_LIBRARY: &str = "rounded/roundCornersCube.scad";

/// A node of the CSG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    /// Axis aligned box with one corner at the origin.
    Cube { size: [f64; 3] },
    /// Vertical cylinder standing on the XY plane, centred on the Z axis.
    Cylinder { diameter: f64, height: f64 },
    /// Box with rounded vertical edges, provided by [`ROUNDED_CUBE_LIBRARY`].
    RoundedCube {
        size: [f64; 3],
        radius: f64,
        sides_only: bool,
    },
    Translate { offset: [f64; 3], child: Box<Solid> },
    /// Rotation in degrees about X, then Y, then Z.
    Rotate { degrees: [f64; 3], child: Box<Solid> },
    Union(Vec<Solid>),
    /// `base` with every solid in `cuts` removed.
    Difference { base: Box<Solid>, cuts: Vec<Solid> },
    /// OpenSCAD `#` modifier: drawn highlighted in previews, otherwise treated like its child.
    Highlight(Box<Solid>),
}

impl Solid {
    pub fn cube(size: [f64; 3]) -> Self {
        Solid::Cube { size }
    }

    pub fn cylinder(diameter: f64, height: f64) -> Self {
        Solid::Cylinder { diameter, height }
    }

    pub fn rounded_cube(size: [f64; 3], radius: f64, sides_only: bool) -> Self {
        Solid::RoundedCube {
            size,
            radius,
            sides_only,
        }
    }

    pub fn union<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Solid>,
    {
        Solid::Union(children.into_iter().collect())
    }

    pub fn translate(self, offset: [f64; 3]) -> Self {
        Solid::Translate {
            offset,
            child: Box::new(self),
        }
    }

    pub fn right(self, x: f64) -> Self {
        self.translate([x, 0.0, 0.0])
    }

    pub fn forward(self, y: f64) -> Self {
        self.translate([0.0, y, 0.0])
    }

    pub fn back(self, y: f64) -> Self {
        self.translate([0.0, -y, 0.0])
    }

    pub fn up(self, z: f64) -> Self {
        self.translate([0.0, 0.0, z])
    }

    pub fn rotate(self, degrees: [f64; 3]) -> Self {
        Solid::Rotate {
            degrees,
            child: Box::new(self),
        }
    }

    pub fn highlight(self) -> Self {
        Solid::Highlight(Box::new(self))
    }

    /// Subtract `cut` from this solid.
    ///
    /// Repeated subtractions extend a single difference node rather than
    /// nesting, so a tray with eight cuts renders as one `difference()`.
    pub fn difference(self, cut: Solid) -> Self {
        match self {
            Solid::Difference { base, mut cuts } => {
                cuts.push(cut);
                Solid::Difference { base, cuts }
            }
            other => Solid::Difference {
                base: Box::new(other),
                cuts: vec![cut],
            },
        }
    }

    /// Combine with another solid, flattening nested unions.
    pub fn union_with(self, other: Solid) -> Self {
        match self {
            Solid::Union(mut children) => {
                children.push(other);
                Solid::Union(children)
            }
            first => Solid::Union(vec![first, other]),
        }
    }

    /// OpenSCAD libraries this tree needs to `use`.
    pub fn libraries(&self) -> Vec<&'static str> {
        let mut libs = Vec::new();
        self.collect_libraries(&mut libs);
        libs.sort_unstable();
        libs.dedup();
        libs
    }

    fn collect_libraries(&self, libs: &mut Vec<&'static str>) {
        match self {
            Solid::RoundedCube { .. } => libs.push(ROUNDED_CUBE_LIBRARY),
            Solid::Cube { .. } | Solid::Cylinder { .. } => {}
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Highlight(child) => {
                child.collect_libraries(libs)
            }
            Solid::Union(children) => children.iter().for_each(|c| c.collect_libraries(libs)),
            Solid::Difference { base, cuts } => {
                base.collect_libraries(libs);
                cuts.iter().for_each(|c| c.collect_libraries(libs));
            }
        }
    }

    /// Number of primitive leaves in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Solid::Cube { .. } | Solid::Cylinder { .. } | Solid::RoundedCube { .. } => 1,
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Highlight(child) => {
                child.primitive_count()
            }
            Solid::Union(children) => children.iter().map(Solid::primitive_count).sum(),
            Solid::Difference { base, cuts } => {
                base.primitive_count() + cuts.iter().map(Solid::primitive_count).sum::<usize>()
            }
        }
    }

    /// Axis aligned bounds of the material this solid can occupy.
    ///
    /// Differences report the bounds of their base, so the result is an
    /// upper bound for subtracted geometry. Returns `None` for an empty union.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Solid::Cube { size } | Solid::RoundedCube { size, .. } => Some(Bounds::new(
                Point3::origin(),
                Point3::new(size[0], size[1], size[2]),
            )),
            Solid::Cylinder { diameter, height } => {
                let r = diameter / 2.0;
                Some(Bounds::new(
                    Point3::new(-r, -r, 0.0),
                    Point3::new(r, r, *height),
                ))
            }
            Solid::Translate { offset, child } => child
                .bounds()
                .map(|b| b.translated(Vector3::new(offset[0], offset[1], offset[2]))),
            Solid::Rotate { degrees, child } => child.bounds().map(|b| b.rotated(*degrees)),
            Solid::Highlight(child) => child.bounds(),
            Solid::Union(children) => children
                .iter()
                .filter_map(Solid::bounds)
                .reduce(|a, b| a.merge(&b)),
            Solid::Difference { base, .. } => base.bounds(),
        }
    }
}

impl Add for Solid {
    type Output = Solid;

    fn add(self, rhs: Solid) -> Solid {
        self.union_with(rhs)
    }
}

impl Sub for Solid {
    type Output = Solid;

    fn sub(self, rhs: Solid) -> Solid {
        self.difference(rhs)
    }
}

/// Axis aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn translated(&self, offset: Vector3<f64>) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    pub fn merge(&self, other: &Bounds) -> Self {
        Self::new(
            Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    /// Bounds of this box after an OpenSCAD style `rotate([x, y, z])`.
    pub fn rotated(&self, degrees: [f64; 3]) -> Self {
        let rotation = Rotation3::from_euler_angles(
            degrees[0].to_radians(),
            degrees[1].to_radians(),
            degrees[2].to_radians(),
        );

        let corners = self.corners().map(|c| rotation * c);
        corners[1..]
            .iter()
            .fold(Bounds::new(corners[0], corners[0]), |acc, p| {
                acc.merge(&Bounds::new(*p, *p))
            })
    }

    fn corners(&self) -> [Point3<f64>; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_back_moves_towards_negative_y() {
        let cube = Solid::cube([2.0, 3.0, 4.0]).back(5.0);
        let b = cube.bounds().unwrap();
        assert!(approx(b.min.y, -5.0));
        assert!(approx(b.max.y, -2.0));
    }

    #[test]
    fn test_difference_flattens() {
        let tray = Solid::cube([10.0, 10.0, 10.0])
            - Solid::cylinder(2.0, 11.0)
            - Solid::cube([1.0, 1.0, 1.0]);
        match tray {
            Solid::Difference { cuts, .. } => assert_eq!(cuts.len(), 2),
            other => panic!("expected difference, got {other:?}"),
        }
    }

    #[test]
    fn test_union_bounds_merge() {
        let u = Solid::cube([1.0, 1.0, 1.0]) + Solid::cube([1.0, 1.0, 1.0]).right(4.0);
        let b = u.bounds().unwrap();
        assert!(approx(b.size().x, 5.0));
        assert_eq!(u.primitive_count(), 2);
    }

    #[test]
    fn test_empty_union_has_no_bounds() {
        assert!(Solid::union(Vec::new()).bounds().is_none());
    }

    #[test]
    fn test_rotated_bounds_quarter_turn() {
        let b = Solid::cube([4.0, 2.0, 1.0]).rotate([0.0, 0.0, 90.0]).bounds().unwrap();
        assert!(approx(b.min.x, -2.0));
        assert!(approx(b.max.x, 0.0));
        assert!(approx(b.max.y, 4.0));
    }

    #[test]
    fn test_libraries_deduplicated() {
        let tray = Solid::rounded_cube([10.0, 10.0, 5.0], 1.0, true)
            + Solid::rounded_cube([5.0, 5.0, 5.0], 1.0, true);
        assert_eq!(tray.libraries(), vec![ROUNDED_CUBE_LIBRARY]);
        assert!(Solid::cube([1.0, 1.0, 1.0]).libraries().is_empty());
    }
}
