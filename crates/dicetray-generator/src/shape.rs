//! Shape Builder
//!
//! Turns a parsed [`Pattern`] into the solid that carves its pocket and the
//! flat cover insert that closes it.
//!
//! Rows are stacked from the back of the tray towards the front: row `i`
//! occupies the band `[-i·SQ, -(i-1)·SQ]` before the whole shape is moved
//! forward by its height, so the local origin is the front-left corner of
//! the bounding box. Pocket prisms are one millimetre taller than a dice
//! stack so they cut cleanly through the top of the tray.

use crate::error::{GeneratorError, GeneratorResult, PatternError};
use crate::params::DesignParameters;
use crate::pattern::{Pattern, PatternRow};
use dicetray_core::Solid;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a shape's solid mass sits horizontally, judged from its front row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldPosition {
    /// The front row hugs the left edge of the bounding box.
    Left,
    /// The front row is centred in the bounding box.
    Center,
}

impl HoldPosition {
    /// The front (last) row decides the handedness of the whole shape.
    ///
    /// Shapes whose front row leans right are not supported.
    pub fn from_front_row(shape: &str, row: &PatternRow) -> GeneratorResult<Self> {
        use std::cmp::Ordering;

        match row.offset.cmp(&row.right_offset) {
            Ordering::Equal => Ok(HoldPosition::Center),
            Ordering::Less => Ok(HoldPosition::Left),
            Ordering::Greater => Err(GeneratorError::UnsupportedHoldPosition {
                shape: shape.to_string(),
                offset: row.offset,
                right_offset: row.right_offset,
            }),
        }
    }
}

/// Per-row depth corrections, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct RowAdjustment {
    extra_back: f64,
    extra_depth: f64,
}

/// The "C" shape's first and third rows are both deepened by `c_extra`
/// towards the middle row. The first row is also moved by the same amount so
/// that its outer edge stays on the bounding box.
fn row_adjustment(shape: &str, row: usize, c_extra: f64) -> RowAdjustment {
    match (shape, row) {
        ("C", 1) => RowAdjustment {
            extra_back: c_extra,
            extra_depth: c_extra,
        },
        ("C", 3) => RowAdjustment {
            extra_back: 0.0,
            extra_depth: c_extra,
        },
        _ => RowAdjustment::default(),
    }
}

/// Empty cells of one row that are cut out of the cover plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverNotch {
    /// 1-based row number, back row first.
    pub row: usize,
    /// First cell of the notch.
    pub start: u32,
    /// Number of cells.
    pub cells: u32,
}

/// Metadata describing a built shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInfo {
    pub name: String,
    /// Widest extent in millimetres.
    pub width: f64,
    /// Row count times cell size, in millimetres.
    pub height: f64,
    pub hold: HoldPosition,
    /// Cover insert, in the same local frame as the shape.
    pub cover: Solid,
    pub notches: Vec<CoverNotch>,
    pub rows: usize,
    pub filled_cells: u32,
}

/// A pocket solid together with its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub solid: Solid,
    pub info: ShapeInfo,
}

/// Builds shapes with a fixed set of design parameters.
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    params: DesignParameters,
}

impl ShapeBuilder {
    pub fn new(params: DesignParameters) -> GeneratorResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DesignParameters {
        &self.params
    }

    pub fn build(&self, pattern: &Pattern) -> GeneratorResult<Shape> {
        let sq = self.params.square;
        let edge = self.params.cover_edge;
        let name = pattern.name.as_str();

        let front = pattern
            .last_row()
            .ok_or_else(|| PatternError::MissingRows {
                name: name.to_string(),
            })?;
        let hold = HoldPosition::from_front_row(name, front)?;

        let mut prisms = Vec::with_capacity(pattern.rows.len());
        let mut blankers = Vec::new();
        let mut notches = Vec::new();

        for (index, row) in pattern.rows.iter().enumerate() {
            let row_number = index + 1;
            let adj = row_adjustment(name, row_number, self.params.c_extra_spacing);
            let back = row_number as f64 * sq + adj.extra_back;
            let depth = sq + adj.extra_depth;

            debug!(
                shape = name,
                row = row_number,
                offset = row.offset,
                width = row.width,
                right_offset = row.right_offset,
                back,
                depth,
                "Shape row"
            );

            prisms.push(
                Solid::cube([
                    row.width as f64 * sq,
                    depth,
                    self.params.stack_height + 1.0,
                ])
                .right(row.offset as f64 * sq)
                .back(back),
            );

            if row.offset > 0 {
                notches.push(CoverNotch {
                    row: row_number,
                    start: 0,
                    cells: row.offset,
                });
                blankers.push(self.cover_blanker(row_number, 0, row.offset));
            }
            if row.right_offset > 0 {
                notches.push(CoverNotch {
                    row: row_number,
                    start: row.extent(),
                    cells: row.right_offset,
                });
                blankers.push(self.cover_blanker(row_number, row.extent(), row.right_offset));
            }
        }

        let rows = pattern.rows.len();
        let height = rows as f64 * sq;
        let max_extent = pattern.max_extent();
        let width = max_extent as f64 * sq;

        let plate = Solid::cube([width - edge, height - edge, self.params.cover_height])
            .translate([edge / 2.0, edge / 2.0, 0.0])
            .back(height);
        let cover = if blankers.is_empty() {
            plate
        } else {
            plate - Solid::union(blankers)
        };

        let solid = Solid::union(prisms).forward(height);

        debug!(
            shape = name,
            width,
            height,
            hold = ?hold,
            notches = notches.len(),
            "Built shape"
        );

        Ok(Shape {
            solid,
            info: ShapeInfo {
                name: pattern.name.clone(),
                width,
                height,
                hold,
                cover: cover.forward(height),
                notches,
                rows,
                filled_cells: pattern.filled_cells(),
            },
        })
    }

    /// Oversized block removing `cells` empty cells starting at `start` from
    /// the cover plate in row `row`.
    fn cover_blanker(&self, row: usize, start: u32, cells: u32) -> Solid {
        let sq = self.params.square;
        let edge = self.params.cover_edge;
        Solid::cube([
            cells as f64 * sq + edge,
            sq + edge,
            self.params.cover_height + 1.0,
        ])
        .translate([-edge / 2.0 + start as f64 * sq, -edge / 2.0, -0.1])
        .back(row as f64 * sq)
    }
}

/// Parse `text` and build its shape.
pub fn genshape(text: &str, params: &DesignParameters) -> GeneratorResult<Shape> {
    let pattern = Pattern::parse(text)?;
    ShapeBuilder::new(params.clone())?.build(&pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(offset: u32, width: u32, right_offset: u32) -> PatternRow {
        PatternRow {
            offset,
            width,
            right_offset,
        }
    }

    #[test]
    fn test_hold_position_rule() {
        assert_eq!(
            HoldPosition::from_front_row("Plus", &row(1, 1, 1)).unwrap(),
            HoldPosition::Center
        );
        assert_eq!(
            HoldPosition::from_front_row("L", &row(0, 1, 1)).unwrap(),
            HoldPosition::Left
        );
        assert!(matches!(
            HoldPosition::from_front_row("J", &row(1, 1, 0)),
            Err(GeneratorError::UnsupportedHoldPosition { offset: 1, right_offset: 0, .. })
        ));
    }

    #[test]
    fn test_row_adjustment_only_for_c() {
        assert_eq!(row_adjustment("Square", 1, 1.0), RowAdjustment::default());
        assert_eq!(row_adjustment("C", 2, 1.0), RowAdjustment::default());
        assert_eq!(row_adjustment("C", 1, 1.0).extra_back, 1.0);
        assert_eq!(row_adjustment("C", 3, 1.0).extra_back, 0.0);
        assert_eq!(row_adjustment("C", 3, 1.0).extra_depth, 1.0);
    }

    #[test]
    fn test_square_has_plain_cover() {
        let shape = genshape("Square\n  XX\n  XX\n", &DesignParameters::default()).unwrap();
        assert!(matches!(shape.info.cover, Solid::Translate { .. }));
        assert!(shape.info.notches.is_empty());
        assert_eq!(shape.info.cover.primitive_count(), 1);
    }

    #[test]
    fn test_shape_local_origin_is_front_left() {
        let shape = genshape("Square\n  XX\n  XX\n", &DesignParameters::default()).unwrap();
        let b = shape.solid.bounds().unwrap();
        assert!(b.min.x.abs() < 1e-9);
        assert!(b.min.y.abs() < 1e-9);
        assert!((b.max.x - 32.0).abs() < 1e-9);
        assert!((b.max.y - 32.0).abs() < 1e-9);
        assert!((b.max.z - 15.5).abs() < 1e-9);
    }

    #[test]
    fn test_c_shape_arms_reach_into_gap() {
        let shape = genshape("C\n XX\n X.\n XX\n", &DesignParameters::default()).unwrap();
        let b = shape.solid.bounds().unwrap();
        assert!(b.min.y.abs() < 1e-9);
        assert!((b.max.y - 48.0).abs() < 1e-9);
        assert_eq!(shape.info.height, 48.0);

        let prisms = match &shape.solid {
            Solid::Translate { child, .. } => match child.as_ref() {
                Solid::Union(prisms) => prisms.clone(),
                other => panic!("expected union, got {other:?}"),
            },
            other => panic!("expected translate, got {other:?}"),
        };
        let first = prisms[0].bounds().unwrap();
        let third = prisms[2].bounds().unwrap();
        // Before moving forward: row one spans [-17, 0], row three [-48, -31].
        assert!((first.min.y + 17.0).abs() < 1e-9);
        assert!(first.max.y.abs() < 1e-9);
        assert!((third.min.y + 48.0).abs() < 1e-9);
        assert!((third.max.y + 31.0).abs() < 1e-9);
    }
}
