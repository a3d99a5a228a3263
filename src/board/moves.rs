//! Move application: sliding and merging tiles.
//!
//! Every direction reduces to one routine, [`slide_line`], which packs a
//! line toward its start. Right and Down reverse each line first, Up and Down
//! transpose the grid first, and both transforms are undone afterwards.

use std::fmt;

use crate::board::{Cell, Grid, MAX_TILE_VALUE};

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward column 0.
    Left,
    /// Toward the last row.
    Down,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Geometric transforms that map this direction onto a left slide.
    const fn orientation(self) -> Orientation {
        match self {
            Direction::Left => Orientation { transpose: false, reverse: false },
            Direction::Right => Orientation { transpose: false, reverse: true },
            Direction::Up => Orientation { transpose: true, reverse: false },
            Direction::Down => Orientation { transpose: true, reverse: true },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Axis swap and edge reversal applied around the canonical left slide.
#[derive(Debug, Clone, Copy)]
struct Orientation {
    /// Work on columns instead of rows.
    transpose: bool,
    /// Slide toward the far edge of each line.
    reverse: bool,
}

/// Slide and merge one line toward its start.
///
/// Tiles are compacted, then scanned once from the start: an equal adjacent
/// pair becomes one tile of double the value, and a tile produced by a merge
/// never merges again in the same pass. Tiles already at [`MAX_TILE_VALUE`]
/// do not merge. The result has the same length as `line`, padded with empty
/// cells.
///
/// ```
/// use merge2048::board::{Cell, slide_line};
///
/// let line = [Cell::Occupied(2), Cell::Empty, Cell::Occupied(2), Cell::Occupied(2)];
/// assert_eq!(
///     slide_line(&line),
///     vec![Cell::Occupied(4), Cell::Occupied(2), Cell::Empty, Cell::Empty]
/// );
/// ```
#[must_use]
pub fn slide_line(line: &[Cell]) -> Vec<Cell> {
    let values: Vec<u64> = line.iter().filter_map(|cell| cell.value()).collect();

    let mut packed = Vec::with_capacity(line.len());
    let mut i = 0;
    while i < values.len() {
        if values[i] < MAX_TILE_VALUE && values.get(i + 1) == Some(&values[i]) {
            packed.push(Cell::Occupied(values[i] * 2));
            i += 2;
        } else {
            packed.push(Cell::Occupied(values[i]));
            i += 1;
        }
    }

    packed.resize(line.len(), Cell::Empty);
    packed
}

/// Return the grid resulting from sliding every tile in `direction`.
///
/// Pure function of its inputs: no tile is spawned. The number of tiles
/// never grows and the sum of tile values is preserved.
#[must_use]
pub fn apply_move(grid: &Grid, direction: Direction) -> Grid {
    let Orientation { transpose, reverse } = direction.orientation();

    let mut work = if transpose {
        grid.transposed()
    } else {
        grid.clone()
    };

    for line in work.rows_mut() {
        if reverse {
            line.reverse();
        }
        let slid = slide_line(line);
        line.copy_from_slice(&slid);
        if reverse {
            line.reverse();
        }
    }

    if transpose { work.transposed() } else { work }
}
