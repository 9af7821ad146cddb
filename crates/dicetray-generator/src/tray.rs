//! Tray Layout Engine
//!
//! Places every shape of a pattern group side by side in a rounded tray
//! blank. Shapes are spread with equal gaps before, between and after them,
//! centred front to back, and each pocket gets a finger access hole.
//!
//! The layout is a fold over the shapes: the state carries the horizontal
//! cursor and the tray solid with every cut made so far.

use crate::error::{GeneratorError, GeneratorResult};
use crate::params::DesignParameters;
use crate::pattern::Pattern;
use crate::patterns::parse_group;
use crate::shape::{HoldPosition, Shape, ShapeBuilder, ShapeInfo};
use dicetray_core::Solid;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How a pocket's finger hole is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FingerHoleRule {
    /// Centred on the tray's right edge, half way back.
    TrayRightEdge,
    /// Touching the left edge of the shape's slot.
    SlotLeftEdge,
    /// In the first cell for left-held shapes, mid-shape for centred ones.
    ByHoldPosition,
}

fn finger_hole_rule(shape: &str) -> FingerHoleRule {
    match shape {
        "Straight" => FingerHoleRule::TrayRightEdge,
        "Zig" => FingerHoleRule::SlotLeftEdge,
        _ => FingerHoleRule::ByHoldPosition,
    }
}

/// Where one shape ended up in the tray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    /// Left edge of the pocket.
    pub x: f64,
    /// Front edge of the pocket.
    pub y: f64,
    /// Centre of the finger hole in the XY plane.
    pub finger: [f64; 2],
}

/// A finished tray and the covers for its pockets.
#[derive(Debug, Clone, PartialEq)]
pub struct Tray {
    pub solid: Solid,
    pub inserts: Vec<ShapeInfo>,
    pub placements: Vec<Placement>,
    /// Gap between neighbouring pockets and at both ends.
    pub spacing: f64,
    /// Margin in front of and behind the deepest shape.
    pub bottom_spacing: f64,
    pub total_width: f64,
}

#[derive(Debug)]
struct LayoutState {
    cursor: f64,
    solid: Solid,
    placements: Vec<Placement>,
}

/// Lays out pattern groups into trays.
#[derive(Debug, Clone)]
pub struct TrayLayout {
    shapes: ShapeBuilder,
}

impl TrayLayout {
    pub fn new(params: DesignParameters) -> GeneratorResult<Self> {
        Ok(Self {
            shapes: ShapeBuilder::new(params)?,
        })
    }

    pub fn params(&self) -> &DesignParameters {
        self.shapes.params()
    }

    fn blank(&self) -> Solid {
        let p = self.params();
        Solid::rounded_cube(
            [p.tray_width, p.tray_depth, p.tray_height()],
            p.tray_corner_radius,
            true,
        )
    }

    /// Gap left around each of `slots` shapes of combined `total_width`.
    pub fn spacing_for(&self, total_width: f64, slots: usize) -> GeneratorResult<f64> {
        let p = self.params();
        let spacing = (p.tray_width - total_width) / (slots as f64 + 1.0);
        if spacing < p.min_spacing {
            return Err(GeneratorError::InfeasibleSpacing {
                spacing,
                minimum: p.min_spacing,
            });
        }
        Ok(spacing)
    }

    pub fn build(&self, patterns: &[Pattern]) -> GeneratorResult<Tray> {
        if patterns.is_empty() {
            return Err(GeneratorError::EmptyGroup);
        }

        let shapes = patterns
            .iter()
            .map(|p| self.shapes.build(p))
            .collect::<GeneratorResult<Vec<_>>>()?;

        let total_width: f64 = shapes.iter().map(|s| s.info.width).sum();
        let max_height = shapes
            .iter()
            .map(|s| s.info.height)
            .fold(0.0_f64, f64::max);

        let spacing = self.spacing_for(total_width, shapes.len())?;
        let bottom_spacing = (self.params().tray_depth - max_height) / 2.0;

        let start = LayoutState {
            cursor: spacing,
            solid: self.blank(),
            placements: Vec::with_capacity(shapes.len()),
        };
        let state = shapes.iter().fold(start, |state, shape| {
            self.place(state, shape, spacing, bottom_spacing, total_width)
        });

        info!(
            shapes = shapes.len(),
            spacing,
            bottom_spacing,
            total_width,
            "Laid out tray"
        );

        Ok(Tray {
            solid: state.solid,
            inserts: shapes.into_iter().map(|s| s.info).collect(),
            placements: state.placements,
            spacing,
            bottom_spacing,
            total_width,
        })
    }

    fn place(
        &self,
        state: LayoutState,
        shape: &Shape,
        spacing: f64,
        bottom_spacing: f64,
        total_width: f64,
    ) -> LayoutState {
        let p = self.params();
        let LayoutState {
            cursor,
            solid,
            mut placements,
        } = state;

        let pocket = shape
            .solid
            .clone()
            .right(cursor)
            .up(p.wall)
            .forward(bottom_spacing);

        let finger = match finger_hole_rule(&shape.info.name) {
            FingerHoleRule::TrayRightEdge => [p.tray_width, p.tray_depth / 2.0],
            FingerHoleRule::SlotLeftEdge => [cursor + p.finger_diameter / 2.0, 0.0],
            FingerHoleRule::ByHoldPosition => match shape.info.hold {
                HoldPosition::Left => [cursor + p.square / 2.0, 0.0],
                HoldPosition::Center => [cursor + shape.info.width / 2.0, 0.0],
            },
        };
        let hole = Solid::cylinder(p.finger_diameter, p.tray_height() + 1.0)
            .right(finger[0])
            .forward(finger[1]);

        debug!(
            shape = %shape.info.name,
            spacing,
            cursor,
            finger_x = finger[0],
            total_width,
            "Placed shape"
        );

        placements.push(Placement {
            name: shape.info.name.clone(),
            x: cursor,
            y: bottom_spacing,
            finger,
        });

        LayoutState {
            cursor: cursor + spacing + shape.info.width,
            solid: solid - pocket - hole,
            placements,
        }
    }
}

/// Parse a group of pattern texts and lay them out in one tray.
pub fn gentray(texts: &[&str], params: &DesignParameters) -> GeneratorResult<Tray> {
    let patterns = parse_group(texts)?;
    TrayLayout::new(params.clone())?.build(&patterns)
}
