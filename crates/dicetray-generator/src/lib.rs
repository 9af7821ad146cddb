//! # Dicetray Generator
//!
//! Builds dice tray geometry from ASCII polyomino patterns.
//!
//! ## Components
//!
//! - **Pattern**: parses `.`/`X` grid rows into offset/width/right-offset runs
//! - **Patterns**: the built-in compartment groups
//! - **Shape Builder**: pocket solid, cover insert and hold position per pattern
//! - **Tray Layout**: spaces a group of shapes in a tray blank and cuts finger holes
//! - **Foot Cuts**: radial slot cuts for round feet

pub mod error;
pub mod foot_cuts;
pub mod params;
pub mod pattern;
pub mod patterns;
pub mod shape;
pub mod tray;

pub use error::{GeneratorError, GeneratorResult, PatternError, PatternResult};
pub use foot_cuts::{cut_angles, cut_step_degrees, gencuts};
pub use params::{DesignParameters, FootCutParameters};
pub use pattern::{Pattern, PatternRow};
pub use patterns::{parse_group, GROUP_SIZE, PATTERN_GROUPS};
pub use shape::{genshape, CoverNotch, HoldPosition, Shape, ShapeBuilder, ShapeInfo};
pub use tray::{gentray, Placement, Tray, TrayLayout};
