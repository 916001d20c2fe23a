//! Error types for the RL core library

use thiserror::Error;

/// Core error type for RL operations
#[derive(Error, Debug)]
pub enum RLError {
    /// Environment-related errors
    #[error("Environment error: {0}")]
    Environment(String),

    /// Agent-related errors
    #[error("Agent error: {0}")]
    Agent(String),

    /// Policy-related errors, including actions outside the legal set
    #[error("Policy error: {0}")]
    Policy(String),

    /// A position or landing cell outside the grid
    #[error("Position ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Row of the offending cell (may be negative)
        row: i64,
        /// Column of the offending cell (may be negative)
        col: i64,
    },

    /// The jump rule does not hold for this action on the current board
    #[error("Illegal move {action}: {reason}")]
    IllegalMove {
        /// Encoded action that was rejected
        action: usize,
        /// Which part of the jump rule failed
        reason: String,
    },

    /// Encoded action outside the action space
    #[error("Invalid encoding: {code} is not in [0, {limit})")]
    InvalidEncoding {
        /// The rejected code
        code: usize,
        /// Size of the action space
        limit: usize,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for RL operations
pub type Result<T> = std::result::Result<T, RLError>;
