//! Transitions and trajectories

use serde::{Deserialize, Serialize};

use crate::Reward;

/// Single transition, the record handed to a learning sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<O, A> {
    /// Observation before the action
    pub state: O,
    /// Action taken
    pub action: A,
    /// Reward received
    pub reward: Reward,
    /// Observation right after the action
    pub next_state: O,
    /// Whether the action ended the episode
    pub done: bool,
}

/// Complete trajectory of an episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<O, A> {
    /// Sequence of transitions
    pub transitions: Vec<Transition<O, A>>,
    /// Total reward
    pub total_reward: Reward,
}

impl<O, A> Trajectory<O, A> {
    /// Create a new empty trajectory
    #[must_use]
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            total_reward: Reward::ZERO,
        }
    }

    /// Add a transition to the trajectory
    pub fn push(&mut self, transition: Transition<O, A>) {
        self.total_reward += transition.reward;
        self.transitions.push(transition);
    }

    /// Get the length of the trajectory
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if trajectory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Whether the last transition ended the episode
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.transitions.last().is_some_and(|t| t.done)
    }
}

impl<O, A> Default for Trajectory<O, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscreteAction;

    fn transition(reward: f64, done: bool) -> Transition<u8, DiscreteAction> {
        Transition {
            state: 0,
            action: DiscreteAction(8),
            reward: Reward(reward),
            next_state: 1,
            done,
        }
    }

    #[test]
    fn test_trajectory_accumulates_reward() {
        let mut trajectory = Trajectory::new();
        assert!(trajectory.is_empty());
        assert!(!trajectory.is_complete());

        trajectory.push(transition(0.0, false));
        trajectory.push(transition(0.0, false));
        assert!(!trajectory.is_complete());

        trajectory.push(transition(-5.0, true));
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.total_reward, Reward(-5.0));
        assert!(trajectory.is_complete());
    }
}
