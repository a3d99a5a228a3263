//! Grid and cell types.

// Coordinates are u16 by construction, so index -> coord casts cannot truncate
#![allow(clippy::cast_possible_truncation)]

use std::fmt;

use crate::board::{Direction, apply_move};

/// Narrowest cell drawn by the console renderer, borders excluded.
const MIN_CELL_WIDTH: usize = 5;

/// Exponent of the largest tile a board may hold.
pub const MAX_TILE_EXPONENT: u32 = 31;

/// Largest tile a board may hold. Tiles of this value no longer merge.
///
/// A grid has at most 2^32 cells, so doubling a tile or summing a full grid
/// of maximal tiles stays within `u64`.
pub const MAX_TILE_VALUE: u64 = 1 << MAX_TILE_EXPONENT;

/// A position on the grid, row-major and 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: u16,
    /// Column index, counted from the left.
    pub col: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No tile.
    #[default]
    Empty,
    /// A tile holding a power of two, at least 2.
    Occupied(u64),
}

impl Cell {
    /// Build a cell from a raw value, where 0 means empty.
    ///
    /// Returns `None` for values that can never appear on a board: 1,
    /// anything that is not a power of two, or anything above
    /// [`MAX_TILE_VALUE`].
    #[must_use]
    pub const fn from_value(value: u64) -> Option<Self> {
        if value == 0 {
            Some(Cell::Empty)
        } else if is_tile_value(value) {
            Some(Cell::Occupied(value))
        } else {
            None
        }
    }

    /// The tile value, or `None` for an empty cell.
    #[must_use]
    #[inline]
    pub const fn value(self) -> Option<u64> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(value) => Some(value),
        }
    }

    /// Check whether this cell holds no tile.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.pad(""),
            Cell::Occupied(value) => f.pad(&value.to_string()),
        }
    }
}

/// Check whether `value` may sit on a board: a power of two between 2 and
/// [`MAX_TILE_VALUE`].
#[must_use]
#[inline]
pub const fn is_tile_value(value: u64) -> bool {
    value.is_power_of_two() && matches!(value.trailing_zeros(), 1..=MAX_TILE_EXPONENT)
}

/// The game grid.
///
/// Dimensions are fixed at construction. Cells are stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows.
    rows: u16,
    /// Number of columns.
    cols: u16,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Returns `None` if either dimension is zero.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }

        Some(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; usize::from(rows) * usize::from(cols)],
        })
    }

    /// Build a grid from rows of raw values, where 0 marks an empty cell.
    ///
    /// Returns `None` if there are no rows, the rows are ragged or empty,
    /// or a value is not a valid tile.
    ///
    /// ```
    /// use merge2048::board::Grid;
    ///
    /// let grid = Grid::from_rows(&[[2, 2, 4, 0], [0, 0, 0, 0]]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.score(), 8);
    /// ```
    #[must_use]
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        let mut grid = Self::new(u16::try_from(rows.len()).ok()?, u16::try_from(width).ok()?)?;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            for (c, &value) in row.iter().enumerate() {
                grid.cells[r * width + c] = Cell::from_value(value)?;
            }
        }

        Some(grid)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// All cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row slices, top to bottom.
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Cell> {
        self.cells.chunks_exact_mut(usize::from(self.cols))
    }

    /// Check if a coordinate is within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.row) * usize::from(self.cols) + usize::from(coord.col))
        } else {
            None
        }
    }

    fn index_to_coord(&self, idx: usize) -> Coord {
        let cols = usize::from(self.cols);
        Coord::new((idx / cols) as u16, (idx % cols) as u16)
    }

    /// Get the cell at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Set the cell at the given coordinate.
    ///
    /// Returns `false`, leaving the grid untouched, if the coordinate is out
    /// of bounds or the cell holds a value that is not a valid tile.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if matches!(cell, Cell::Occupied(value) if !is_tile_value(value)) {
            return false;
        }

        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Overwrite a cell without validating it, for building corrupt grids in tests.
    #[cfg(test)]
    pub(crate) fn set_unchecked(&mut self, coord: Coord, cell: Cell) {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = cell;
        }
    }

    /// Get one row as a slice.
    #[must_use]
    pub fn row(&self, row: u16) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let cols = usize::from(self.cols);
        let start = usize::from(row) * cols;
        Some(&self.cells[start..start + cols])
    }

    /// Iterate over all coordinates and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (self.index_to_coord(idx), cell))
    }

    /// Coordinates of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells holding a tile.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Sum of all tile values. Empty cells contribute nothing.
    ///
    /// Cannot overflow: tiles are capped at [`MAX_TILE_VALUE`].
    #[must_use]
    pub fn score(&self) -> u64 {
        self.cells.iter().filter_map(|cell| cell.value()).sum()
    }

    /// Highest tile value on the grid, 0 if the grid is empty.
    #[must_use]
    pub fn max_tile(&self) -> u64 {
        self.cells
            .iter()
            .filter_map(|cell| cell.value())
            .max()
            .unwrap_or(0)
    }

    /// Return the grid with rows and columns swapped.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let rows = usize::from(self.rows);
        let cols = usize::from(self.cols);

        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..cols {
            for r in 0..rows {
                cells.push(self.cells[r * cols + c]);
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Return the grid after sliding and merging in `direction`. No tile is spawned.
    #[must_use]
    pub fn shifted(&self, direction: Direction) -> Self {
        apply_move(self, direction)
    }

    /// Raw values row by row, 0 for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.cells
            .chunks_exact(usize::from(self.cols))
            .map(|row| row.iter().map(|cell| cell.value().unwrap_or(0)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.max_tile().to_string().len() + 2).max(MIN_CELL_WIDTH);
        let border = format!("+{}", "-".repeat(width)).repeat(usize::from(self.cols)) + "+";

        writeln!(f, "{border}")?;
        for row in self.cells.chunks_exact(usize::from(self.cols)) {
            for cell in row {
                let text = cell.value().as_ref().map(ToString::to_string).unwrap_or_default();
                let pad = width.saturating_sub(text.len());
                // Odd padding leans left when the width is odd too
                let left = pad / 2 + (pad & width & 1);
                let right = pad - left;
                write!(f, "|{:left$}{text}{:right$}", "", "")?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}
