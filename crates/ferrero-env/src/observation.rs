//! Observation handed to decision-makers and learning sinks

use serde::Serialize;

use ferrero_rl_core::{DiscreteAction, LegalActions, Observation};

use crate::board::Board;

/// Board snapshot paired with the actions legal on it
///
/// Owns its board; later steps never change an observation already
/// handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardObservation {
    /// Board at the time of the snapshot
    pub board: Board,
    /// Legal encoded actions, in enumeration order
    pub legal_actions: Vec<DiscreteAction>,
}

impl BoardObservation {
    /// Number of pieces on the snapshot
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Whether no legal action remains
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.legal_actions.is_empty()
    }
}

impl Observation for BoardObservation {
    fn to_vec(&self) -> Vec<f64> {
        self.board.cells().iter().map(|&v| f64::from(v)).collect()
    }

    fn shape(&self) -> Vec<usize> {
        vec![self.board.rows(), self.board.cols()]
    }
}

impl LegalActions for BoardObservation {
    type Action = DiscreteAction;

    fn legal_actions(&self) -> &[DiscreteAction] {
        &self.legal_actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_follow_board_layout() {
        let obs = BoardObservation {
            board: Board::from_rows(&[[0u8, 1, 1]]).unwrap(),
            legal_actions: vec![DiscreteAction(10)],
        };
        assert_eq!(obs.to_vec(), vec![0.0, 1.0, 1.0]);
        assert_eq!(obs.shape(), vec![1, 3]);
        assert_eq!(obs.occupied_count(), 2);
        assert!(obs.is_legal(&DiscreteAction(10)));
        assert!(!obs.is_legal(&DiscreteAction(11)));
        assert!(!obs.is_terminal());
    }
}
