//! Ferrero peg-solitaire environment for reinforcement learning
//!
//! Pieces fill a grid except for one hole at the origin. A piece jumps
//! over an orthogonal neighbour into an empty cell two steps away,
//! removing the neighbour. The episode ends when no jump is left.
//!
//! ```
//! use ferrero_env::{Direction, FerreroConfig, FerreroEnv, Position};
//!
//! let mut env = FerreroEnv::new(FerreroConfig::default()).unwrap();
//! let action = env.encode(Position::new(0, 2), Direction::Left).unwrap();
//! let step = env.step(action).unwrap();
//! assert_eq!(step.next_state.occupied_count(), 46);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod codec;
pub mod config;
pub mod driver;
pub mod env;
pub mod observation;

pub use board::{Board, Direction, Position};
pub use codec::{Move, MoveCodec};
pub use config::FerreroConfig;
pub use driver::{run, run_episode, EpisodeSummary};
pub use env::{FerreroEnv, REWARD_BASELINE};
pub use observation::BoardObservation;

// Re-export core types
pub use ferrero_rl_core::{
    Agent, DiscreteAction, DiscreteSpace, Environment, LegalActions, Observation, Policy,
    RLError, Result, Reward, Step, Transition,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Board, Direction, FerreroConfig, FerreroEnv, Position};
    pub use ferrero_rl_core::prelude::*;
}
