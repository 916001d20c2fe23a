//! Driver loop tests with real and scripted agents

use async_trait::async_trait;

use ferrero_agent::{EpisodeRecorder, RandomAgent};
use ferrero_env::{
    run, run_episode, Agent, BoardObservation, DiscreteAction, FerreroConfig, FerreroEnv, Policy,
    RLError, Result, Transition,
};

fn env(rows: usize, cols: usize, episodes: usize) -> FerreroEnv {
    FerreroEnv::new(FerreroConfig {
        rows,
        cols,
        episodes,
    })
    .unwrap()
}

/// Always answers with one fixed action
struct Stubborn(DiscreteAction);

#[async_trait]
impl Policy for Stubborn {
    type Action = DiscreteAction;
    type Observation = BoardObservation;

    async fn act(&mut self, _observation: &BoardObservation) -> Result<DiscreteAction> {
        Ok(self.0)
    }
}

#[async_trait]
impl Agent for Stubborn {}

/// Takes the first legal action and remembers what it saw
#[derive(Default)]
struct FirstLegal {
    seen: Vec<Transition<BoardObservation, DiscreteAction>>,
}

#[async_trait]
impl Policy for FirstLegal {
    type Action = DiscreteAction;
    type Observation = BoardObservation;

    async fn act(&mut self, observation: &BoardObservation) -> Result<DiscreteAction> {
        Ok(observation.legal_actions[0])
    }
}

#[async_trait]
impl Agent for FirstLegal {
    async fn observe(
        &mut self,
        transition: &Transition<BoardObservation, DiscreteAction>,
    ) -> Result<()> {
        self.seen.push(transition.clone());
        Ok(())
    }
}

/// Plays a fixed number of episodes, then refuses to act
struct GivesUpAfter {
    episodes: usize,
    finished: usize,
}

#[async_trait]
impl Policy for GivesUpAfter {
    type Action = DiscreteAction;
    type Observation = BoardObservation;

    async fn act(&mut self, observation: &BoardObservation) -> Result<DiscreteAction> {
        if self.finished == self.episodes {
            return Err(RLError::Agent("done playing".to_string()));
        }
        Ok(observation.legal_actions[0])
    }
}

#[async_trait]
impl Agent for GivesUpAfter {
    async fn observe(
        &mut self,
        transition: &Transition<BoardObservation, DiscreteAction>,
    ) -> Result<()> {
        if transition.done {
            self.finished += 1;
        }
        Ok(())
    }
}

#[tokio::test]
async fn run_spends_the_whole_budget() {
    let mut env = env(6, 8, 5);
    let mut agent = RandomAgent::<BoardObservation>::with_seed(42);

    let summaries = run(&mut env, &mut agent).await.unwrap();
    assert_eq!(summaries.len(), 5);
    assert_eq!(env.episodes_remaining(), 0);
    assert_eq!(agent.metrics().total_episodes, 5);

    let total_steps: usize = summaries.iter().map(|s| s.steps).sum();
    assert_eq!(agent.metrics().total_steps, total_steps);

    for (index, summary) in summaries.iter().enumerate() {
        assert_eq!(summary.index, index);
        let pieces = summary.terminal_state.occupied_count();
        assert_eq!(pieces, 47 - summary.steps);
        assert!(summary.terminal_state.legal_actions.is_empty());
    }
}

#[tokio::test]
async fn transitions_reach_the_sink_in_order() {
    let mut env = env(4, 4, 1);
    let mut agent = FirstLegal::default();

    let summary = run_episode(&mut env, &mut agent, 0).await.unwrap();
    assert_eq!(agent.seen.len(), summary.steps);

    for pair in agent.seen.windows(2) {
        assert_eq!(pair[0].next_state, pair[1].state);
        assert!(!pair[0].done);
    }
    let last = agent.seen.last().unwrap();
    assert!(last.done);
    assert_eq!(last.reward, summary.reward);
    assert_eq!(last.next_state, summary.terminal_state);
}

#[tokio::test]
async fn illegal_choice_fails_without_touching_the_board() {
    let mut env = env(6, 8, 1);
    let before = env.board().clone();
    // (0,2) right lands on an occupied cell
    let mut agent = Stubborn(DiscreteAction(11));

    let err = run_episode(&mut env, &mut agent, 0).await.unwrap_err();
    assert!(matches!(err, RLError::Policy(_)));
    assert_eq!(env.board(), &before);
    assert_eq!(env.episodes_remaining(), 1);
}

#[tokio::test]
async fn recorder_keeps_completed_episodes() {
    let mut env = env(3, 5, 4);
    let mut agent = EpisodeRecorder::new(RandomAgent::<BoardObservation>::with_seed(9), 3);

    let summaries = run(&mut env, &mut agent).await.unwrap();
    assert_eq!(agent.len(), 3);
    assert!(agent.current().is_empty());

    let kept: Vec<usize> = agent.completed().map(|t| t.len()).collect();
    let expected: Vec<usize> = summaries[1..].iter().map(|s| s.steps).collect();
    assert_eq!(kept, expected);
    assert!(agent.completed().all(|t| t.is_complete()));
}

#[tokio::test]
async fn unbounded_budget_starts_playing_immediately() {
    let mut env = env(1, 3, usize::MAX);
    let mut agent = GivesUpAfter {
        episodes: 3,
        finished: 0,
    };

    let err = run(&mut env, &mut agent).await.unwrap_err();
    assert!(matches!(err, RLError::Agent(_)));
    assert_eq!(agent.finished, 3);
    assert_eq!(env.episodes_remaining(), usize::MAX - 3);
}

#[tokio::test]
async fn zero_budget_runs_nothing() {
    let mut env = env(6, 8, 0);
    let mut agent = RandomAgent::<BoardObservation>::with_seed(1);
    assert!(run(&mut env, &mut agent).await.unwrap().is_empty());
}
