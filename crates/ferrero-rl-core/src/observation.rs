//! Observation representations

use std::fmt::Debug;

use crate::Action;

/// Trait for observations from an environment
pub trait Observation: Clone + Debug + Send + Sync {
    /// Convert observation to a feature vector
    fn to_vec(&self) -> Vec<f64>;

    /// Get the shape of the observation
    fn shape(&self) -> Vec<usize>;
}

/// Observations that carry the set of actions legal in that state
pub trait LegalActions: Observation {
    /// Action type
    type Action: Action;

    /// Legal actions, in the environment's enumeration order
    fn legal_actions(&self) -> &[Self::Action];

    /// Whether `action` is in the legal set
    fn is_legal(&self, action: &Self::Action) -> bool {
        self.legal_actions().contains(action)
    }
}
