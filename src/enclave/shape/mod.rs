pub mod catalog;
pub mod transform;

use super::prelude::*;

use itertools::Itertools;
pub use transform::Transform;

/// A rectangular 0/1 matrix describing the cells a piece covers, relative to its top-left origin.
///
/// Every row has the same length and at least one cell is filled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape(Vec<Vec<bool>>);

impl Shape {
    /// Builds a shape from rows of 0s and 1s.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Shape> {
        let matrix = rows.iter()
            .map(|row| row.as_ref().iter().map(|&v| v != 0).collect::<Vec<bool>>())
            .collect::<Vec<_>>();

        let Some(width) = matrix.first().map(|row| row.len()) else {
            return Err(anyhow!("a shape needs at least one row"));
        };
        if width == 0 || matrix.iter().any(|row| row.len() != width) {
            return Err(anyhow!("shape rows must be non-empty and of equal length"));
        }
        if !matrix.iter().flatten().any(|&v| v) {
            return Err(anyhow!("a shape needs at least one filled cell"));
        }
        Ok(Shape(matrix))
    }

    /// The number of rows in the bounding rectangle.
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// The number of columns in the bounding rectangle.
    pub fn cols(&self) -> usize {
        self.0[0].len()
    }

    /// The number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v).count()
    }

    /// The offsets of the filled cells, in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = OffsetCoord> + '_ {
        self.0.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().filter(|(_, v)| **v).map(move |(j, _)| OffsetCoord::new(i as isize, j as isize))
        })
    }

    /// The board coordinates covered when the shape's top-left corner sits on `origin`.
    ///
    /// Coordinates may fall off the board; callers check bounds.
    pub fn cells_at(&self, origin: Coord) -> impl Iterator<Item = OffsetCoord> + '_ {
        let origin = OffsetCoord::from(origin);
        self.filled().map(move |offset| origin + offset)
    }

    /// Rotates a quarter turn clockwise: `rotated[j][rows - 1 - i] = matrix[i][j]`.
    pub fn rotate90(&self) -> Shape {
        let [rows, cols] = [self.rows(), self.cols()];
        let mut rotated = vec![vec![false; rows]; cols];
        for (i, row) in self.0.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                rotated[j][rows - 1 - i] = v;
            }
        }
        Shape(rotated)
    }

    /// Mirrors the shape left-to-right by reversing every row.
    pub fn flip_horizontal(&self) -> Shape {
        Shape(self.0.iter().map(|row| row.iter().rev().copied().collect()).collect())
    }

    /// The canonical notation of the shape: rows of 0/1 joined by slashes.
    pub fn notate(&self) -> String {
        self.0.iter().map(|row| {
            row.iter().map(|&v| if v { "1" } else { "0" }).join("")
        }).join("/")
    }
}

impl std::str::FromStr for Shape {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let rows = s.split('/').map(|row| {
            row.chars().map(|ch| match ch {
                '0' | '.' => Ok(0u8),
                '1' | '#' => Ok(1u8),
                _         => Err(anyhow!("invalid shape cell {ch} in {s}"))
            }).collect::<Result<Vec<u8>>>()
        }).collect::<Result<Vec<_>>>()?;
        Shape::from_rows(&rows)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let art = self.0.iter().map(|row| {
            row.iter().map(|&v| if v { '#' } else { '.' }).collect::<String>()
        }).join("\n");
        write!(f, "{art}")
    }
}
