//! Board, positions and jump directions

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use ferrero_rl_core::{RLError, Result};

/// Cell value of an occupied cell
pub const OCCUPIED: u8 = 1;
/// Cell value of an empty cell
pub const EMPTY: u8 = 0;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub col: usize,
}

impl Position {
    /// The cell left empty by a reset
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new position
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Jump direction
///
/// The discriminant is the direction's slot in the action encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0
    Up = 0,
    /// Towards the last row
    Down = 1,
    /// Towards column 0
    Left = 2,
    /// Towards the last column
    Right = 3,
}

impl Direction {
    /// All directions in enumeration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Slot of this direction in the action encoding
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an encoding slot
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row and column delta of a single step
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Direction of a jump from `from` landing on `to`
    ///
    /// `None` unless the two cells are exactly two apart in a row or column.
    #[must_use]
    pub fn of_jump(from: Position, to: Position) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| {
            let (dr, dc) = direction.delta();
            to_i64(from.row) + 2 * dr == to_i64(to.row)
                && to_i64(from.col) + 2 * dc == to_i64(to.col)
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.pad(name)
    }
}

impl FromStr for Direction {
    type Err = RLError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" | "0" => Ok(Self::Up),
            "down" | "d" | "1" => Ok(Self::Down),
            "left" | "l" | "2" => Ok(Self::Left),
            "right" | "r" | "3" => Ok(Self::Right),
            other => Err(RLError::InvalidConfig(format!("unknown direction: {other}"))),
        }
    }
}

#[allow(clippy::cast_possible_wrap)]
fn to_i64(value: usize) -> i64 {
    value as i64
}

/// Rejection for a cell that is not on the board
pub(crate) fn out_of_bounds(position: Position) -> RLError {
    RLError::OutOfBounds {
        row: to_i64(position.row),
        col: to_i64(position.col),
    }
}

/// Occupancy grid: every cell is [`OCCUPIED`] or [`EMPTY`]
///
/// The dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: Array2<u8>,
}

impl Board {
    /// Create a board in the initial configuration
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut board = Self {
            cells: Array2::from_elem((rows, cols), OCCUPIED),
        };
        board.reset();
        board
    }

    /// Build a board from explicit rows of 0/1 values
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(RLError::InvalidConfig("board must have at least one cell".into()));
        }

        let mut values = Vec::with_capacity(height * width);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(RLError::InvalidConfig(format!(
                    "row {r} has {} cells, expected {width}",
                    row.len()
                )));
            }
            if let Some(bad) = row.iter().find(|&&v| v != OCCUPIED && v != EMPTY) {
                return Err(RLError::InvalidConfig(format!("cell value {bad} in row {r}")));
            }
            values.extend_from_slice(row);
        }

        let cells = Array2::from_shape_vec((height, width), values)
            .map_err(|e| RLError::InvalidConfig(e.to_string()))?;
        Ok(Self { cells })
    }

    /// Fill every cell except the origin
    pub fn reset(&mut self) {
        self.cells.fill(OCCUPIED);
        self.cells[[Position::ORIGIN.row, Position::ORIGIN.col]] = EMPTY;
    }

    /// Number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Raw cell values
    #[must_use]
    pub fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Whether `position` lies on the board
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows() && position.col < self.cols()
    }

    /// Whether `position` is on the board and holds a piece
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells
            .get((position.row, position.col))
            .is_some_and(|&v| v == OCCUPIED)
    }

    /// Whether `position` is on the board and empty
    #[must_use]
    pub fn is_empty_cell(&self, position: Position) -> bool {
        self.cells
            .get((position.row, position.col))
            .is_some_and(|&v| v == EMPTY)
    }

    /// Total number of pieces
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == OCCUPIED).count()
    }

    /// The cell `steps` cells away in `direction`, if it is on the board
    #[must_use]
    pub fn offset(
        &self,
        position: Position,
        direction: Direction,
        steps: usize,
    ) -> Option<Position> {
        let (row, col) = Self::raw_offset(position, direction, steps);
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let target = Position::new(row, col);
        self.contains(target).then_some(target)
    }

    /// Signed coordinates `steps` cells away, which may fall off the board
    #[must_use]
    pub fn raw_offset(position: Position, direction: Direction, steps: usize) -> (i64, i64) {
        let (dr, dc) = direction.delta();
        let steps = to_i64(steps);
        (to_i64(position.row) + dr * steps, to_i64(position.col) + dc * steps)
    }

    /// Landing cell of a legal jump from `position` in `direction`
    ///
    /// A jump is legal when the source holds a piece, the landing cell is
    /// on the board and empty, and the cell in between holds a piece.
    #[must_use]
    pub fn jump_landing(&self, position: Position, direction: Direction) -> Option<Position> {
        if !self.is_occupied(position) {
            return None;
        }
        let landing = self.offset(position, direction, 2)?;
        let over = self.offset(position, direction, 1)?;
        (self.is_occupied(over) && self.is_empty_cell(landing)).then_some(landing)
    }

    /// Every cell in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    pub(crate) fn set(&mut self, position: Position, value: u8) {
        self.cells[[position.row, position.col]] = value;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row
                .iter()
                .map(|&v| if v == OCCUPIED { 'o' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_single_hole_at_origin() {
        let board = Board::new(6, 8);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 8);
        assert_eq!(board.occupied_count(), 47);
        assert!(board.is_empty_cell(Position::ORIGIN));
        assert!(board
            .positions()
            .filter(|&p| p != Position::ORIGIN)
            .all(|p| board.is_occupied(p)));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let board = Board::new(6, 8);
        assert_eq!(
            board.offset(Position::new(0, 2), Direction::Left, 2),
            Some(Position::ORIGIN)
        );
        assert_eq!(board.offset(Position::new(0, 1), Direction::Left, 2), None);
        assert_eq!(board.offset(Position::new(5, 7), Direction::Down, 1), None);
        assert_eq!(
            board.offset(Position::new(5, 7), Direction::Up, 2),
            Some(Position::new(3, 7))
        );
        assert_eq!(
            Board::raw_offset(Position::new(0, 1), Direction::Left, 2),
            (0, -1)
        );
    }

    #[test]
    fn test_jump_landing_on_initial_board() {
        let board = Board::new(6, 8);
        assert_eq!(
            board.jump_landing(Position::new(0, 2), Direction::Left),
            Some(Position::ORIGIN)
        );
        assert_eq!(
            board.jump_landing(Position::new(2, 0), Direction::Up),
            Some(Position::ORIGIN)
        );
        assert_eq!(board.jump_landing(Position::new(0, 2), Direction::Right), None);
        // empty source
        assert_eq!(board.jump_landing(Position::ORIGIN, Direction::Right), None);
    }

    #[test]
    fn test_from_rows_validates() {
        let board = Board::from_rows(&[[1u8, 1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.to_string(), "oo.\n...\n");

        assert!(Board::from_rows(&[vec![1u8, 2]]).is_err());
        assert!(Board::from_rows(&[vec![1u8, 1], vec![1]]).is_err());
        assert!(Board::from_rows::<Vec<u8>>(&[]).is_err());
    }

    #[test]
    fn test_reset_restores_initial_configuration() {
        let mut board = Board::from_rows(&[[0u8, 0, 1], [1, 0, 0]]).unwrap();
        board.reset();
        assert_eq!(board, Board::new(2, 3));
    }

    #[test]
    fn test_direction_parsing_and_jump_direction() {
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("d".parse::<Direction>().unwrap(), Direction::Down);
        assert!("sideways".parse::<Direction>().is_err());

        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(direction.index()), Some(direction));
        }
        assert_eq!(Direction::from_index(4), None);

        assert_eq!(
            Direction::of_jump(Position::new(0, 2), Position::ORIGIN),
            Some(Direction::Left)
        );
        assert_eq!(
            Direction::of_jump(Position::new(1, 1), Position::new(3, 1)),
            Some(Direction::Down)
        );
        assert_eq!(Direction::of_jump(Position::new(1, 1), Position::new(2, 2)), None);
    }
}
