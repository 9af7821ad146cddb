//! Built-in compartment patterns
//!
//! Two trays of four compartments each. Every pattern is a shape name
//! followed by its grid rows, back row first.

use crate::error::GeneratorResult;
use crate::pattern::Pattern;

/// Number of compartments in each built-in tray.
pub const GROUP_SIZE: usize = 4;

pub const PATTERN_GROUPS: [[&str; GROUP_SIZE]; 2] = [
    [
        "Plus
       .X.
       XXX
       .X.
    ",
        "T
       X.
       XX
       X.
    ",
        "L
       XX
       X.
       X.
    ",
        "Straight
       X
       X
       X
    ",
    ],
    [
        "C
       XX
       X.
       XX
    ",
        "Square
       XX
       XX
    ",
        "Zig
       .X
       XX
       X.
    ",
        "Small-L
       .X
       XX
    ",
    ],
];

/// Parse every pattern text of one group, in order.
pub fn parse_group(texts: &[&str]) -> GeneratorResult<Vec<Pattern>> {
    texts
        .iter()
        .map(|text| Pattern::parse(text).map_err(Into::into))
        .collect()
}
