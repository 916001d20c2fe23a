//! Environment configuration

use serde::{Deserialize, Serialize};

use ferrero_rl_core::{RLError, Result};

use crate::codec::DIRECTIONS;

/// Configuration for the Ferrero environment
///
/// Missing fields fall back to the defaults, so `{"episodes": 10}` is a
/// complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FerreroConfig {
    /// Number of board rows
    pub rows: usize,
    /// Number of board columns
    pub cols: usize,
    /// Episode budget
    pub episodes: usize,
}

impl Default for FerreroConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 8,
            episodes: 50_000,
        }
    }
}

impl FerreroConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the board can be built and has a legal opening move
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(RLError::InvalidConfig(format!(
                "board dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows < 3 && self.cols < 3 {
            return Err(RLError::InvalidConfig(format!(
                "a {}x{} board has no opening move",
                self.rows, self.cols
            )));
        }
        if self.action_count().is_none() {
            return Err(RLError::InvalidConfig(format!(
                "a {}x{} board overflows the action space",
                self.rows, self.cols
            )));
        }
        Ok(())
    }

    /// Size of the encoded action space, if it fits in `usize`
    #[must_use]
    pub fn action_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)?.checked_mul(DIRECTIONS)
    }
}
