//! The Ferrero environment

use tracing::{debug, info};

use ferrero_rl_core::{
    DiscreteAction, DiscreteSpace, Environment, RLError, Result, Reward, Step,
};

use crate::board::{out_of_bounds, Board, Direction, Position, EMPTY, OCCUPIED};
use crate::codec::{Move, MoveCodec};
use crate::config::FerreroConfig;
use crate::observation::BoardObservation;

/// Terminal reward is `REWARD_BASELINE - pieces left`
pub const REWARD_BASELINE: f64 = 8.0;

/// Cells touched by a validated jump
#[derive(Debug, Clone, Copy)]
struct Jump {
    from: Position,
    over: Position,
    to: Position,
}

/// Peg-solitaire environment on a fixed grid
///
/// A terminal step resets the board before returning, so the next call
/// always sees a fresh episode.
#[derive(Debug, Clone)]
pub struct FerreroEnv {
    /// Configuration
    config: FerreroConfig,
    /// Current board
    board: Board,
    /// Action encoding for this board size
    codec: MoveCodec,
    /// Episodes left in the budget
    episodes_remaining: usize,
}

impl FerreroEnv {
    /// Create a new environment in the initial configuration
    pub fn new(config: FerreroConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols);
        Ok(Self::from_parts(config, board))
    }

    /// Create an environment starting from an arbitrary board
    ///
    /// Later resets still restore the initial configuration.
    pub fn with_board(config: FerreroConfig, board: Board) -> Result<Self> {
        config.validate()?;
        if (board.rows(), board.cols()) != (config.rows, config.cols) {
            return Err(RLError::InvalidConfig(format!(
                "board is {}x{}, configuration expects {}x{}",
                board.rows(),
                board.cols(),
                config.rows,
                config.cols
            )));
        }
        Ok(Self::from_parts(config, board))
    }

    fn from_parts(config: FerreroConfig, board: Board) -> Self {
        debug!(
            rows = config.rows,
            cols = config.cols,
            episodes = config.episodes,
            "creating Ferrero environment"
        );
        Self {
            codec: MoveCodec::new(config.rows, config.cols),
            episodes_remaining: config.episodes,
            config,
            board,
        }
    }

    /// Configuration the environment was built with
    #[must_use]
    pub fn config(&self) -> &FerreroConfig {
        &self.config
    }

    /// Current board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of pieces on the current board
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Episodes left in the budget
    #[must_use]
    pub fn episodes_remaining(&self) -> usize {
        self.episodes_remaining
    }

    /// The full action space, legal or not
    #[must_use]
    pub fn action_space(&self) -> DiscreteSpace {
        self.codec.space()
    }

    /// Fill every cell except the origin
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Whether no legal move remains
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Every legal move as an encoded action
    ///
    /// Cells are scanned row-major and each cell's directions in
    /// [`Direction::ALL`] order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<DiscreteAction> {
        let mut actions = Vec::new();
        for position in self.board.positions() {
            for direction in Direction::ALL {
                if self.board.jump_landing(position, direction).is_some() {
                    if let Ok(action) = self.codec.encode(position, direction) {
                        actions.push(action);
                    }
                }
            }
        }
        actions
    }

    /// Landing cells of the legal jumps from `position`
    pub fn legal_moves_from(&self, position: Position) -> Result<Vec<Position>> {
        if !self.board.contains(position) {
            return Err(out_of_bounds(position));
        }
        Ok(Direction::ALL
            .into_iter()
            .filter_map(|direction| self.board.jump_landing(position, direction))
            .collect())
    }

    /// Encode a raw move
    pub fn encode(&self, position: Position, direction: Direction) -> Result<DiscreteAction> {
        self.codec.encode(position, direction)
    }

    /// Decode an encoded action
    pub fn decode(&self, action: DiscreteAction) -> Result<Move> {
        self.codec.decode(action)
    }

    /// Snapshot of the current board and its legal moves
    #[must_use]
    pub fn observation(&self) -> BoardObservation {
        BoardObservation {
            board: self.board.clone(),
            legal_actions: self.legal_moves(),
        }
    }

    /// Apply a legal jump
    ///
    /// The action is fully validated before the board is touched; a
    /// rejected action leaves the environment unchanged. On a terminal
    /// board the reward is [`REWARD_BASELINE`] minus the pieces left, the
    /// episode budget is decremented and the board is reset.
    pub fn step(&mut self, action: DiscreteAction) -> Result<Step<BoardObservation>> {
        let jump = self.check_jump(action)?;
        let state = self.observation();

        self.board.set(jump.from, EMPTY);
        self.board.set(jump.over, EMPTY);
        self.board.set(jump.to, OCCUPIED);

        let next_state = self.observation();
        debug!(
            %action,
            from = %jump.from,
            to = %jump.to,
            pieces = next_state.occupied_count(),
            "applied jump"
        );

        if !next_state.is_terminal() {
            return Ok(Step {
                state,
                next_state,
                reward: Reward::ZERO,
                done: false,
            });
        }

        let pieces = next_state.occupied_count();
        let reward = Reward(REWARD_BASELINE - pieces_as_f64(pieces));
        self.episodes_remaining = self.episodes_remaining.saturating_sub(1);
        info!(
            pieces,
            reward = reward.value(),
            episodes_remaining = self.episodes_remaining,
            "episode finished"
        );
        self.reset();

        Ok(Step {
            state,
            next_state,
            reward,
            done: true,
        })
    }

    fn check_jump(&self, action: DiscreteAction) -> Result<Jump> {
        let Move { position, direction } = self.codec.decode(action)?;

        let Some(to) = self.board.offset(position, direction, 2) else {
            let (row, col) = Board::raw_offset(position, direction, 2);
            debug!(%action, row, col, "rejected jump off the board");
            return Err(RLError::OutOfBounds { row, col });
        };
        let over = self
            .board
            .offset(position, direction, 1)
            .ok_or_else(|| out_of_bounds(position))?;

        let reason = if !self.board.is_occupied(position) {
            Some(format!("no piece at {position}"))
        } else if !self.board.is_occupied(over) {
            Some(format!("no piece to jump over at {over}"))
        } else if !self.board.is_empty_cell(to) {
            Some(format!("landing cell {to} is occupied"))
        } else {
            None
        };

        match reason {
            Some(reason) => {
                debug!(%action, %reason, "rejected illegal jump");
                Err(RLError::IllegalMove { action: action.0, reason })
            }
            None => Ok(Jump { from: position, over, to }),
        }
    }
}

impl Environment for FerreroEnv {
    type Action = DiscreteAction;
    type Observation = BoardObservation;
    type Space = DiscreteSpace;

    fn action_space(&self) -> DiscreteSpace {
        FerreroEnv::action_space(self)
    }

    fn reset(&mut self) -> BoardObservation {
        FerreroEnv::reset(self);
        self.observation()
    }

    fn observation(&self) -> BoardObservation {
        FerreroEnv::observation(self)
    }

    fn is_terminal(&self) -> bool {
        FerreroEnv::is_terminal(self)
    }

    fn step(&mut self, action: DiscreteAction) -> Result<Step<BoardObservation>> {
        FerreroEnv::step(self, action)
    }

    fn episodes_remaining(&self) -> usize {
        self.episodes_remaining
    }
}

#[allow(clippy::cast_precision_loss)]
fn pieces_as_f64(pieces: usize) -> f64 {
    pieces as f64
}
