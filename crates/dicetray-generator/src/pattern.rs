//! ASCII pattern parsing
//!
//! A pattern is a shape name followed by grid rows such as `.X.` or `XX`.
//! Every row must decompose into a run of `.` (left offset), a run of `X`
//! (filled cells) and a trailing run of `.` (right offset).

use crate::error::{PatternError, PatternResult};
use serde::{Deserialize, Serialize};

const EMPTY: char = '.';
const FILLED: char = 'X';

/// One grid row, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRow {
    pub offset: u32,
    pub width: u32,
    pub right_offset: u32,
}

impl PatternRow {
    /// Parse a single row; `row` is the 1-based row number used in errors.
    pub fn parse(line: &str, row: usize) -> PatternResult<Self> {
        let malformed = |reason: &str| PatternError::MalformedRow {
            row,
            line: line.to_string(),
            reason: reason.to_string(),
        };

        if let Some(bad) = line.chars().find(|c| *c != EMPTY && *c != FILLED) {
            return Err(malformed(&format!(
                "unexpected character '{}', only '{}' and '{}' are allowed",
                bad, EMPTY, FILLED
            )));
        }

        let (offset, rest) = take_run(line, EMPTY);
        let (width, rest) = take_run(rest, FILLED);
        let (right_offset, rest) = take_run(rest, EMPTY);

        if width == 0 {
            return Err(malformed("row has no filled cells"));
        }
        if !rest.is_empty() {
            return Err(malformed("filled cells must be contiguous"));
        }

        Ok(Self {
            offset,
            width,
            right_offset,
        })
    }

    /// Cells from the left edge to the end of the filled run.
    pub fn extent(&self) -> u32 {
        self.offset + self.width
    }

    /// Total cells in the row, including both offsets.
    pub fn span(&self) -> u32 {
        self.offset + self.width + self.right_offset
    }
}

/// Count leading `c` characters and return the remainder.
fn take_run(text: &str, c: char) -> (u32, &str) {
    let rest = text.trim_start_matches(c);
    let count = (text.len() - rest.len()) / c.len_utf8();
    (count as u32, rest)
}

/// A named grid of rows, front row last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub rows: Vec<PatternRow>,
}

impl Pattern {
    /// Parse pattern text.
    ///
    /// The text is split on whitespace: the first token is the name and
    /// every following token is a grid row. Indentation and blank lines are
    /// therefore irrelevant.
    pub fn parse(text: &str) -> PatternResult<Self> {
        let mut tokens = text.split_whitespace();
        let name = tokens.next().ok_or(PatternError::Empty)?.to_string();

        let rows = tokens
            .enumerate()
            .map(|(i, line)| PatternRow::parse(line, i + 1))
            .collect::<PatternResult<Vec<_>>>()?;

        let first = rows.first().ok_or_else(|| PatternError::MissingRows {
            name: name.clone(),
        })?;

        let expected = first.span();
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.span() != expected)
        {
            return Err(PatternError::RaggedRows {
                name,
                row: i + 1,
                found: row.span(),
                expected,
            });
        }

        Ok(Self { name, rows })
    }

    /// Widest extent of any row, in grid units.
    pub fn max_extent(&self) -> u32 {
        self.rows.iter().map(PatternRow::extent).max().unwrap_or(0)
    }

    /// Number of filled cells.
    pub fn filled_cells(&self) -> u32 {
        self.rows.iter().map(|r| r.width).sum()
    }

    /// The row that decides where the finger hole goes.
    pub fn last_row(&self) -> Option<&PatternRow> {
        self.rows.last()
    }
}
