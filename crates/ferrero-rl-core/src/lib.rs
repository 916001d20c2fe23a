//! Core reinforcement learning traits and types for the Ferrero puzzle
//!
//! This crate provides the abstractions shared by the environment, the
//! agents and the command-line driver.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod agent;
pub mod environment;
pub mod error;
pub mod observation;
pub mod policy;
pub mod reward;
pub mod trajectory;

// Re-export core traits and types
pub use action::{Action, ActionSpace, DiscreteAction, DiscreteSpace};
pub use agent::Agent;
pub use environment::{Environment, Step};
pub use error::{RLError, Result};
pub use observation::{LegalActions, Observation};
pub use policy::Policy;
pub use reward::Reward;
pub use trajectory::{Trajectory, Transition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Action, ActionSpace, Agent, DiscreteAction, Environment, LegalActions, Observation,
        Policy, Result, Reward, Step, Transition,
    };
}
