//! Baseline agents for the Ferrero environment
//!
//! The learning algorithm itself lives outside this workspace; these
//! agents implement the decision-maker and learning-sink contracts so the
//! environment can be driven end to end.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod random;
pub mod recorder;

pub use random::{AgentMetrics, RandomAgent};
pub use recorder::EpisodeRecorder;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{EpisodeRecorder, RandomAgent};
    pub use ferrero_rl_core::prelude::*;
}
