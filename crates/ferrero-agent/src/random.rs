//! Random agent for baseline comparisons

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use ferrero_rl_core::{Agent, LegalActions, Policy, RLError, Transition};

/// Counters kept by the random agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMetrics {
    /// Total steps observed
    pub total_steps: usize,
    /// Total episodes observed
    pub total_episodes: usize,
}

/// Agent that selects uniformly among the legal actions
pub struct RandomAgent<O> {
    rng: StdRng,
    metrics: AgentMetrics,
    _observation: PhantomData<fn(&O)>,
}

impl<O> RandomAgent<O> {
    /// Create an agent seeded from system entropy
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a reproducible agent
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            metrics: AgentMetrics::default(),
            _observation: PhantomData,
        }
    }

    /// Step and episode counters
    #[must_use]
    pub fn metrics(&self) -> &AgentMetrics {
        &self.metrics
    }
}

impl<O> Default for RandomAgent<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<O> Policy for RandomAgent<O>
where
    O: LegalActions + 'static,
{
    type Action = O::Action;
    type Observation = O;

    async fn act(&mut self, observation: &O) -> ferrero_rl_core::Result<O::Action> {
        observation
            .legal_actions()
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| RLError::Agent("no legal action to choose from".to_string()))
    }
}

#[async_trait]
impl<O> Agent for RandomAgent<O>
where
    O: LegalActions + 'static,
{
    async fn observe(
        &mut self,
        transition: &Transition<O, O::Action>,
    ) -> ferrero_rl_core::Result<()> {
        // Random agent doesn't learn from experience
        self.metrics.total_steps += 1;
        if transition.done {
            self.metrics.total_episodes += 1;
        }
        Ok(())
    }
}
