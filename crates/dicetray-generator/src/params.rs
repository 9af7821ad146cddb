//! Design parameters
//!
//! All lengths are in millimetres. The defaults are the dimensions of the
//! shipped tray: sixteen millimetre grid cells in a 136 x 52 mm tray holding
//! four compartments.

use crate::error::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignParameters {
    /// Edge length of one pattern cell
    pub square: f64,
    /// Height of a stack of dice, i.e. pocket depth
    pub stack_height: f64,
    /// Floor thickness below each pocket
    pub wall: f64,
    /// Thickness of a cover insert
    pub cover_height: f64,
    /// Clearance removed around a cover so it drops into its pocket
    pub cover_edge: f64,
    pub tray_width: f64,
    pub tray_depth: f64,
    pub tray_corner_radius: f64,
    /// Diameter of the finger access hole
    pub finger_diameter: f64,
    /// Extra depth given to the "C" shape's first and third rows
    pub c_extra_spacing: f64,
    /// Smallest acceptable gap between neighbouring pockets
    pub min_spacing: f64,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            square: 16.0,
            stack_height: 14.5,
            wall: 2.0,
            cover_height: 0.6,
            cover_edge: 1.0,
            tray_width: 136.0,
            tray_depth: 52.0,
            tray_corner_radius: 3.0,
            finger_diameter: 20.0,
            c_extra_spacing: 1.0,
            min_spacing: 1.4,
        }
    }
}

impl DesignParameters {
    pub fn tray_height(&self) -> f64 {
        self.stack_height + self.wall
    }

    pub fn validate(&self) -> GeneratorResult<()> {
        let positive = [
            ("square", self.square),
            ("stack_height", self.stack_height),
            ("wall", self.wall),
            ("cover_height", self.cover_height),
            ("tray_width", self.tray_width),
            ("tray_depth", self.tray_depth),
            ("finger_diameter", self.finger_diameter),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(GeneratorError::InvalidParameters(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }

        let non_negative = [
            ("cover_edge", self.cover_edge),
            ("tray_corner_radius", self.tray_corner_radius),
            ("c_extra_spacing", self.c_extra_spacing),
            ("min_spacing", self.min_spacing),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(GeneratorError::InvalidParameters(format!(
                "{} must not be negative, got {}",
                name, value
            )));
        }

        if self.cover_edge >= self.square {
            return Err(GeneratorError::InvalidParameters(format!(
                "cover_edge ({}) must be smaller than square ({})",
                self.cover_edge, self.square
            )));
        }

        Ok(())
    }
}

/// Dimensions of the slot cuts around a round foot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootCutParameters {
    pub cut_width: f64,
    pub cut_depth: f64,
    pub cut_height: f64,
    pub foot_diameter: f64,
    pub foot_height: f64,
    /// Chord distance between neighbouring cuts at the foot's rim
    pub cut_space: f64,
}

impl Default for FootCutParameters {
    fn default() -> Self {
        Self {
            cut_width: 2.0,
            cut_depth: 4.0,
            cut_height: 3.0,
            foot_diameter: 30.0,
            foot_height: 5.0,
            cut_space: 4.0,
        }
    }
}

impl FootCutParameters {
    pub fn validate(&self) -> GeneratorResult<()> {
        let dims = [
            self.cut_width,
            self.cut_depth,
            self.cut_height,
            self.foot_diameter,
            self.foot_height,
            self.cut_space,
        ];
        if dims.iter().any(|d| !(*d > 0.0)) {
            return Err(GeneratorError::InvalidParameters(
                "foot cut dimensions must be positive".to_string(),
            ));
        }
        if self.cut_space > self.foot_diameter / 2.0 {
            return Err(GeneratorError::InvalidParameters(format!(
                "cut_space ({}) cannot exceed the foot radius ({})",
                self.cut_space,
                self.foot_diameter / 2.0
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tray_height() {
        let params = DesignParameters::default();
        assert_eq!(params.tray_height(), 16.5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let params = DesignParameters {
            square: 0.0,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("square must be positive"));

        let params = DesignParameters {
            min_spacing: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_foot_cut_space_limited_by_radius() {
        let params = FootCutParameters {
            cut_space: 20.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
        assert!(FootCutParameters::default().validate().is_ok());
    }
}
