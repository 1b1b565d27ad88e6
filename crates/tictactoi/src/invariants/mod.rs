//! First-class invariants over [`GameState`](crate::GameState).
//!
//! Invariants are logical properties that must hold after every committed
//! move. The state machine checks them in debug builds; tests check them
//! directly.

mod ledger_matches_board;
mod single_winner;

pub use ledger_matches_board::LedgerMatchesBoardInvariant;
pub use single_winner::SingleWinnerInvariant;

use crate::state::GameState;

/// A property of [`GameState`] that no committed move may break.
pub trait Invariant {
    /// True when `state` satisfies the property.
    fn holds(state: &GameState) -> bool;

    /// Short name used in violation reports.
    fn description() -> &'static str;
}

/// The invariant a state failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the failed invariant.
    pub description: &'static str,
}

/// Invariants checked together after every committed move.
pub trait InvariantSet {
    /// Returns every violated invariant, or `Ok(())` when all hold.
    fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>>;
}

impl<A: Invariant, B: Invariant> InvariantSet for (A, B) {
    fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (LedgerMatchesBoardInvariant, SingleWinnerInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMachine, GameMode, MemoryScoreStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_invariant_set_holds_for_new_round() {
        let mut machine = GameMachine::with_rng(MemoryScoreStore::new(), StdRng::seed_from_u64(0));
        machine.start_new_round(GameMode::Friend);
        assert!(GameInvariants::check_all(machine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut machine = GameMachine::with_rng(MemoryScoreStore::new(), StdRng::seed_from_u64(0));
        machine.start_new_round(GameMode::Friend);
        machine.apply_move(1, 1).unwrap();

        let mut state = machine.state().clone();
        state.ledger_mut().clear();

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, LedgerMatchesBoardInvariant::description());
    }
}
