// Command implementations for ferreroctl

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use ferrero_agent::RandomAgent;
use ferrero_env::{
    run, BoardObservation, DiscreteAction, Direction, EpisodeSummary, FerreroConfig, FerreroEnv,
    Position,
};

use crate::{BoardArgs, Commands};

pub async fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Play { board, episodes, seed, json } => {
            let config = resolve_config(&board, episodes)?;
            play(config, seed, json).await?;
        }

        Commands::Moves { board, from } => {
            let env = FerreroEnv::new(resolve_config(&board, None)?)?;
            match from.as_deref() {
                Some(&[row, col]) => list_moves_from(&env, Position::new(row, col))?,
                Some(other) => anyhow::bail!("--from expects ROW COL, got {other:?}"),
                None => list_moves(&env),
            }
        }

        Commands::Encode { row, col, direction, board } => {
            let env = FerreroEnv::new(resolve_config(&board, None)?)?;
            let direction: Direction = direction.parse()?;
            let action = env
                .encode(Position::new(row, col), direction)
                .with_context(|| format!("cannot encode ({row}, {col}) {direction}"))?;
            println!("{action}");
        }

        Commands::Decode { code, board } => {
            let env = FerreroEnv::new(resolve_config(&board, None)?)?;
            let mv = env
                .decode(DiscreteAction(code))
                .with_context(|| format!("cannot decode {code}"))?;
            println!("{mv}");
        }

        Commands::Show { board } => {
            let env = FerreroEnv::new(resolve_config(&board, None)?)?;
            print!("{}", env.board());
        }
    }

    Ok(())
}

/// Load the configuration file, if any, and apply command-line overrides
fn resolve_config(board: &BoardArgs, episodes: Option<usize>) -> Result<FerreroConfig> {
    let mut config = match &board.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            FerreroConfig::from_json(&json)
                .with_context(|| format!("Invalid configuration in {}", path.display()))?
        }
        None => FerreroConfig::default(),
    };

    if let Some(rows) = board.rows {
        config.rows = rows;
    }
    if let Some(cols) = board.cols {
        config.cols = cols;
    }
    if let Some(episodes) = episodes {
        config.episodes = episodes;
    }
    config.validate()?;
    Ok(config)
}

async fn play(config: FerreroConfig, seed: Option<u64>, json: bool) -> Result<()> {
    info!(rows = config.rows, cols = config.cols, episodes = config.episodes, "starting run");

    let mut env = FerreroEnv::new(config)?;
    let mut agent: RandomAgent<BoardObservation> = match seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };

    let summaries = run(&mut env, &mut agent).await?;
    let rows: Vec<EpisodeRow> = summaries.iter().map(EpisodeRow::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    match RunStats::from_rows(&rows) {
        Some(stats) => {
            println!("Episodes:          {}", stats.episodes);
            println!("Mean reward:       {:.3}", stats.mean_reward);
            println!("Best reward:       {:.1}", stats.best_reward);
            println!("Mean pieces left:  {:.3}", stats.mean_pieces_left);
            println!("Fewest pieces:     {}", stats.fewest_pieces);
        }
        None => println!("No episodes played."),
    }
    Ok(())
}

fn list_moves(env: &FerreroEnv) {
    let legal = env.legal_moves();
    println!("{} legal moves:", legal.len());
    for action in legal {
        if let Ok(mv) = env.decode(action) {
            println!("  {:>5}  {mv}", action.0);
        }
    }
}

fn list_moves_from(env: &FerreroEnv, position: Position) -> Result<()> {
    let jumps = jumps_from(env, position)?;
    println!("{} legal moves from {position}:", jumps.len());
    for (action, direction, landing) in jumps {
        println!("  {:>5}  {direction:<5} -> {landing}", action.0);
    }
    Ok(())
}

/// Legal jumps from one cell as (action, direction, landing cell)
///
/// The direction is recovered from the source and landing cells, the way a
/// player picks a move by clicking its destination.
fn jumps_from(
    env: &FerreroEnv,
    position: Position,
) -> Result<Vec<(DiscreteAction, Direction, Position)>> {
    let landings = env
        .legal_moves_from(position)
        .with_context(|| format!("cannot list moves from {position}"))?;

    landings
        .into_iter()
        .map(|landing| -> Result<_> {
            let direction = Direction::of_jump(position, landing)
                .with_context(|| format!("{landing} is not a jump away from {position}"))?;
            let action = env.encode(position, direction)?;
            Ok((action, direction, landing))
        })
        .collect()
}

/// Flat per-episode record for output
#[derive(Debug, Clone, PartialEq, Serialize)]
struct EpisodeRow {
    index: usize,
    steps: usize,
    reward: f64,
    pieces_left: usize,
}

impl From<&EpisodeSummary<BoardObservation>> for EpisodeRow {
    fn from(summary: &EpisodeSummary<BoardObservation>) -> Self {
        Self {
            index: summary.index,
            steps: summary.steps,
            reward: summary.reward.value(),
            pieces_left: summary.terminal_state.occupied_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RunStats {
    episodes: usize,
    mean_reward: f64,
    best_reward: f64,
    mean_pieces_left: f64,
    fewest_pieces: usize,
}

impl RunStats {
    #[allow(clippy::cast_precision_loss)]
    fn from_rows(rows: &[EpisodeRow]) -> Option<Self> {
        let fewest_pieces = rows.iter().map(|r| r.pieces_left).min()?;
        let n = rows.len() as f64;
        Some(Self {
            episodes: rows.len(),
            mean_reward: rows.iter().map(|r| r.reward).sum::<f64>() / n,
            best_reward: rows.iter().map(|r| r.reward).fold(f64::NEG_INFINITY, f64::max),
            mean_pieces_left: rows.iter().map(|r| r.pieces_left as f64).sum::<f64>() / n,
            fewest_pieces,
        })
    }
}
