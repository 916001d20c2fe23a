//! Learning sink that keeps recent trajectories

use async_trait::async_trait;
use std::collections::VecDeque;
use tracing::debug;

use ferrero_rl_core::{Agent, Policy, Result, Trajectory, Transition};

/// Wraps a policy and records every transition it is shown
///
/// Transitions accumulate in the current trajectory; a `done` transition
/// closes it. At most `capacity` completed trajectories are kept, oldest
/// dropped first.
pub struct EpisodeRecorder<P: Policy> {
    /// Wrapped decision-maker
    policy: P,
    /// Trajectory of the episode in progress
    current: Trajectory<P::Observation, P::Action>,
    /// Completed trajectories
    completed: VecDeque<Trajectory<P::Observation, P::Action>>,
    /// Maximum number of completed trajectories kept
    capacity: usize,
}

impl<P: Policy> EpisodeRecorder<P> {
    /// Create a new recorder
    #[must_use]
    pub fn new(policy: P, capacity: usize) -> Self {
        Self {
            policy,
            current: Trajectory::new(),
            completed: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The wrapped policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Trajectory of the episode in progress
    pub fn current(&self) -> &Trajectory<P::Observation, P::Action> {
        &self.current
    }

    /// Completed trajectories, oldest first
    pub fn completed(&self) -> impl Iterator<Item = &Trajectory<P::Observation, P::Action>> {
        self.completed.iter()
    }

    /// Number of completed trajectories held
    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Check if no trajectory has been completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Remove and return every completed trajectory
    pub fn drain(&mut self) -> Vec<Trajectory<P::Observation, P::Action>> {
        self.completed.drain(..).collect()
    }

    fn close_episode(&mut self) {
        let trajectory = std::mem::take(&mut self.current);
        if self.capacity == 0 {
            return;
        }
        if self.completed.len() >= self.capacity {
            self.completed.pop_front();
        }
        debug!(
            steps = trajectory.len(),
            reward = trajectory.total_reward.value(),
            "recorded episode"
        );
        self.completed.push_back(trajectory);
    }
}

#[async_trait]
impl<P> Policy for EpisodeRecorder<P>
where
    P: Policy,
{
    type Action = P::Action;
    type Observation = P::Observation;

    async fn act(&mut self, observation: &Self::Observation) -> Result<Self::Action> {
        self.policy.act(observation).await
    }
}

#[async_trait]
impl<P> Agent for EpisodeRecorder<P>
where
    P: Policy,
{
    async fn observe(
        &mut self,
        transition: &Transition<Self::Observation, Self::Action>,
    ) -> Result<()> {
        self.current.push(transition.clone());
        if transition.done {
            self.close_episode();
        }
        Ok(())
    }
}
