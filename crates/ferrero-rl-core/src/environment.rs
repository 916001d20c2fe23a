//! Environment traits and types

use crate::{Action, ActionSpace, LegalActions, Reward, Transition};

/// Result of a single environment step
///
/// `state` and `next_state` are independent snapshots; mutating the
/// environment afterwards changes neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<O> {
    /// Observation before the action was applied
    pub state: O,
    /// Observation right after the action was applied
    pub next_state: O,
    /// Reward signal
    pub reward: Reward,
    /// Whether the episode is done
    pub done: bool,
}

impl<O> Step<O> {
    /// Pair the step with the action that produced it
    pub fn into_transition<A>(self, action: A) -> Transition<O, A> {
        Transition {
            state: self.state,
            action,
            reward: self.reward,
            next_state: self.next_state,
            done: self.done,
        }
    }
}

/// Core environment trait
///
/// Environments are synchronous: every method runs to completion and
/// exclusive access is given by `&mut self`.
pub trait Environment: Send {
    /// Action type
    type Action: Action;
    /// Observation type
    type Observation: LegalActions<Action = Self::Action>;
    /// Action space type
    type Space: ActionSpace<Action = Self::Action>;

    /// Get the full action space, legal or not
    fn action_space(&self) -> Self::Space;

    /// Reset the environment and return the initial observation
    fn reset(&mut self) -> Self::Observation;

    /// Snapshot of the current state
    fn observation(&self) -> Self::Observation;

    /// Whether no legal action remains
    fn is_terminal(&self) -> bool;

    /// Take a step in the environment
    fn step(&mut self, action: Self::Action) -> crate::Result<Step<Self::Observation>>;

    /// Episodes left in the budget
    fn episodes_remaining(&self) -> usize;
}
