//! Grid world representation: cell colors and dimensions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{FilterError, Result};

/// Cell color observed by the robot's sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Color {
    /// Red cell, serialized as `"R"`.
    #[serde(rename = "R")]
    Red,
    /// Green cell, serialized as `"G"`.
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// One-letter code used in scenario files.
    pub fn code(self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Green => "G",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "R" | "r" => Ok(Color::Red),
            "G" | "g" => Ok(Color::Green),
            other => Err(format!("unknown color: {}", other)),
        }
    }
}

/// Immutable rectangular grid of cell colors.
///
/// Cells are stored row-major. Row index `i` grows downward and column
/// index `j` grows rightward; both axes wrap toroidally during motion
/// updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl World {
    /// Build a world from rows of colors.
    ///
    /// Fails when there are no rows, the rows are empty, or the rows
    /// differ in length.
    pub fn from_rows(rows: &[Vec<Color>]) -> Result<Self> {
        let row_count = rows.len();
        if row_count == 0 {
            return Err(FilterError::DimensionError {
                message: "world has no rows".to_string(),
            });
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(FilterError::DimensionError {
                message: "world has empty rows".to_string(),
            });
        }
        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(FilterError::DimensionError {
                    message: format!(
                        "ragged world: row 0 has {} cells, row {} has {}",
                        cols,
                        i,
                        row.len()
                    ),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Color of the cell at row `i`, column `j`.
    ///
    /// Panics when an index is out of bounds.
    pub fn color_at(&self, i: usize, j: usize) -> Color {
        self.cells[i * self.cols + j]
    }
}
