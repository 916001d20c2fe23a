//! Training driver: composes an environment with an agent
//!
//! The environment never calls the agent; this loop asks the agent for
//! an action, checks it against the legal set, steps the environment and
//! hands the transition back to the agent.

use serde::Serialize;
use tracing::{debug, info, warn};

use ferrero_rl_core::{Agent, Environment, LegalActions, RLError, Result, Reward};

/// Outcome of one finished episode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary<O> {
    /// Zero-based episode index within the run
    pub index: usize,
    /// Number of steps taken
    pub steps: usize,
    /// Reward of the terminal step
    pub reward: Reward,
    /// Observation right after the terminal step
    pub terminal_state: O,
}

/// Play a single episode to its terminal state
pub async fn run_episode<E, A>(
    env: &mut E,
    agent: &mut A,
    index: usize,
) -> Result<EpisodeSummary<E::Observation>>
where
    E: Environment,
    A: Agent<Observation = E::Observation, Action = E::Action>,
{
    if env.is_terminal() {
        return Err(RLError::Environment(
            "episode started on a terminal board".to_string(),
        ));
    }

    let mut steps = 0;
    loop {
        let observation = env.observation();
        let action = agent.act(&observation).await?;
        if !observation.is_legal(&action) {
            warn!(episode = index, ?action, "policy chose an action outside the legal set");
            return Err(RLError::Policy(format!(
                "action {action:?} is not among the {} legal actions",
                observation.legal_actions().len()
            )));
        }

        let step = env.step(action.clone())?;
        steps += 1;
        debug!(episode = index, step = steps, ?action, reward = step.reward.value(), "step");

        let done = step.done;
        let reward = step.reward;
        let transition = step.into_transition(action);
        agent.observe(&transition).await?;

        if done {
            info!(episode = index, steps, reward = reward.value(), "episode complete");
            return Ok(EpisodeSummary {
                index,
                steps,
                reward,
                terminal_state: transition.next_state,
            });
        }
    }
}

/// Play episodes until the environment's budget is spent
pub async fn run<E, A>(env: &mut E, agent: &mut A) -> Result<Vec<EpisodeSummary<E::Observation>>>
where
    E: Environment,
    A: Agent<Observation = E::Observation, Action = E::Action>,
{
    let mut summaries = Vec::new();
    while env.episodes_remaining() > 0 {
        summaries.push(run_episode(env, agent, summaries.len()).await?);
    }
    info!(episodes = summaries.len(), "run finished");
    Ok(summaries)
}
