//! Conversion between raw moves and encoded actions
//!
//! An action is `(row * cols + col) * 4 + direction`. The mapping is a
//! bijection between every (position, direction) pair on the board and
//! `[0, rows * cols * 4)`; legality is never checked here.

use serde::{Deserialize, Serialize};
use std::fmt;

use ferrero_rl_core::{DiscreteAction, DiscreteSpace, RLError, Result};

use crate::board::{out_of_bounds, Direction, Position};

/// Number of direction slots per cell
pub const DIRECTIONS: usize = 4;

/// A jump in raw form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell of the jumping piece
    pub position: Position,
    /// Jump direction
    pub direction: Direction,
}

impl Move {
    /// Create a new move
    #[must_use]
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self { position, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.direction)
    }
}

/// Encoder/decoder for a fixed board size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCodec {
    rows: usize,
    cols: usize,
}

impl MoveCodec {
    /// Create a codec for a `rows` x `cols` board
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Size of the action space
    #[must_use]
    pub const fn action_count(&self) -> usize {
        self.rows * self.cols * DIRECTIONS
    }

    /// The full action space
    #[must_use]
    pub fn space(&self) -> DiscreteSpace {
        DiscreteSpace::new(self.action_count())
    }

    /// Encode a move; fails only for a position outside the board
    pub fn encode(&self, position: Position, direction: Direction) -> Result<DiscreteAction> {
        if position.row >= self.rows || position.col >= self.cols {
            return Err(out_of_bounds(position));
        }
        Ok(DiscreteAction(
            (position.row * self.cols + position.col) * DIRECTIONS + direction.index(),
        ))
    }

    /// Decode an action; fails for codes outside the action space
    pub fn decode(&self, action: DiscreteAction) -> Result<Move> {
        let code = action.0;
        if code >= self.action_count() {
            return Err(RLError::InvalidEncoding {
                code,
                limit: self.action_count(),
            });
        }

        let cell = code / DIRECTIONS;
        let direction =
            Direction::from_index(code % DIRECTIONS).ok_or(RLError::InvalidEncoding {
                code,
                limit: self.action_count(),
            })?;
        Ok(Move::new(Position::new(cell / self.cols, cell % self.cols), direction))
    }
}
