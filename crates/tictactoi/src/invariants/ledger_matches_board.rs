//! Ledger consistency: the ledger describes exactly the marks on the board.

use super::Invariant;
use crate::state::GameState;

/// Invariant: every ledger entry's cell holds that entry's mark, and the
/// ledger length equals the number of occupied cells.
///
/// Draw recovery removes cells and ledger entries together, so this holds
/// across recoveries as well as plain moves.
pub struct LedgerMatchesBoardInvariant;

impl Invariant for LedgerMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let ledger = state.ledger();

        ledger.len() == board.occupied()
            && ledger
                .moves()
                .iter()
                .all(|m| board.mark_at(m.cell) == Some(m.player))
    }

    fn description() -> &'static str {
        "Ledger entries match the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameMachine, GameMode, Mark, MemoryScoreStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn machine() -> GameMachine<MemoryScoreStore> {
        let mut machine = GameMachine::with_rng(MemoryScoreStore::new(), StdRng::seed_from_u64(3));
        machine.start_new_round(GameMode::Friend);
        machine
    }

    #[test]
    fn test_holds_after_moves() {
        let mut machine = machine();
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            machine.apply_move(row, col).unwrap();
            machine.settle();
        }
        assert!(LedgerMatchesBoardInvariant::holds(machine.state()));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut machine = machine();
        machine.apply_move(1, 1).unwrap();
        let mut state = machine.state().clone();
        state.board_mut().put(crate::Cell::new(0, 0).unwrap(), Mark::Second);
        assert!(!LedgerMatchesBoardInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut machine = machine();
        machine.apply_move(1, 1).unwrap();
        let mut state = machine.state().clone();
        let placed = state.board().get(1, 1).unwrap();
        *state.board_mut() = Board::new();
        state.board_mut().put(crate::Cell::new(1, 1).unwrap(), placed.opponent());
        assert!(!LedgerMatchesBoardInvariant::holds(&state));
    }
}
