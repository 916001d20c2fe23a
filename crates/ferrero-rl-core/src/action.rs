//! Action representations and action spaces

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for actions in an RL environment
pub trait Action: Clone + Debug + PartialEq + Send + Sync {}

/// Trait for defining action spaces
pub trait ActionSpace: Send + Sync {
    /// The type of actions in this space
    type Action: Action;

    /// Check if an action is valid within this space
    fn contains(&self, action: &Self::Action) -> bool;
}

/// Discrete action, an index into a dense action space
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscreteAction(pub usize);

impl Action for DiscreteAction {}

impl From<usize> for DiscreteAction {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for DiscreteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discrete action space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteSpace {
    /// Number of discrete actions
    pub n: usize,
}

impl DiscreteSpace {
    /// Create a new discrete action space
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Iterate over every action in the space, in index order
    pub fn iter(&self) -> impl Iterator<Item = DiscreteAction> {
        (0..self.n).map(DiscreteAction)
    }
}

impl ActionSpace for DiscreteSpace {
    type Action = DiscreteAction;

    fn contains(&self, action: &Self::Action) -> bool {
        action.0 < self.n
    }
}
