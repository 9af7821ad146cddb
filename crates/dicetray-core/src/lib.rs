//! # Dicetray Core
//!
//! Geometry plumbing shared by the dicetray crates:
//!
//! - **Solid**: a constructive solid geometry tree of OpenSCAD primitives
//! - **Scad**: rendering solids to OpenSCAD source and writing `.scad` files
//! - **Mesh**: csgrs evaluation of solids for STL previews

pub mod error;
pub mod mesh;
pub mod scad;
pub mod solid;

pub use error::{CoreError, CoreResult};
pub use mesh::{mesh_bounds, MeshBuilder};
pub use scad::{ScadExporter, ScadWriter, DEFAULT_RESOLUTION};
pub use solid::{Bounds, Solid, ROUNDED_CUBE_LIBRARY};
