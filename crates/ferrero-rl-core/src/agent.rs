//! Agent traits

use async_trait::async_trait;

use crate::{Policy, Transition};

/// An agent is a policy that may also learn from transitions
#[async_trait]
pub trait Agent: Policy {
    /// Learning sink: ingest a completed transition
    async fn observe(
        &mut self,
        _transition: &Transition<Self::Observation, Self::Action>,
    ) -> crate::Result<()> {
        Ok(()) // Default: no learning
    }
}
