//! Policy abstractions for action selection

use async_trait::async_trait;

use crate::{Action, LegalActions};

/// Decision-maker: picks one legal action for an observation
#[async_trait]
pub trait Policy: Send {
    /// Action type
    type Action: Action;
    /// Observation type
    type Observation: LegalActions<Action = Self::Action>;

    /// Select an action given an observation
    ///
    /// The returned action must be a member of
    /// `observation.legal_actions()`.
    async fn act(&mut self, observation: &Self::Observation) -> crate::Result<Self::Action>;
}
