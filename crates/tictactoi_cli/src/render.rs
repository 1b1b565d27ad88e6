//! Plain-text rendering of the game state.

use tictactoi::{Board, Cell, GameState, Mark, MoveOutcome, Phase, Scoreboard};

/// Renders the board with cell numbers 1-9 on empty squares.
///
/// Cells on the winning line are wrapped in brackets.
pub fn board(board: &Board, phase: Phase) -> String {
    let highlighted = |cell: Cell| match phase {
        Phase::Won { line, .. } => line.contains(cell),
        Phase::InProgress => false,
    };

    let mut out = String::new();
    for row in 0..tictactoi::SIZE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..tictactoi::SIZE)
            .map(|col| {
                let cell = Cell::new(row, col).map(|c| (c, board.mark_at(c)));
                match cell {
                    Some((c, Some(mark))) if highlighted(c) => format!("[{mark}]"),
                    Some((_, Some(mark))) => format!(" {mark} "),
                    Some((c, None)) => format!(" {} ", c.index() + 1),
                    None => "   ".to_string(),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

/// One-line status: whose turn, or who won.
pub fn status(state: &GameState) -> String {
    match state.phase() {
        Phase::Won { winner, .. } => format!("{} wins! Press enter for a new round.", label(state, winner)),
        Phase::InProgress if state.is_computer_turn() => {
            format!("{} to move (computer)", state.current_player())
        }
        Phase::InProgress => format!("{} to move", label(state, state.current_player())),
    }
}

/// Score line in the form `X: 2   O: 1`.
pub fn scores(scores: Scoreboard) -> String {
    format!(
        "{}: {}   {}: {}",
        Mark::First,
        scores.wins(Mark::First),
        Mark::Second,
        scores.wins(Mark::Second)
    )
}

/// Describes a committed move's outcome, `None` when there is nothing to say.
pub fn outcome(outcome: &MoveOutcome) -> Option<String> {
    match outcome {
        MoveOutcome::Continue => None,
        MoveOutcome::DrawRecovered { removed } => {
            let cells: Vec<String> = removed.iter().map(|m| m.to_string()).collect();
            Some(format!("Draw! Oldest marks removed: {}", cells.join(", ")))
        }
        MoveOutcome::Won(win) => {
            let (start, end) = win.line.endpoints();
            Some(format!("{} completes {} to {}", win.player, start, end))
        }
    }
}

fn label(state: &GameState, mark: Mark) -> String {
    match state.human_mark() {
        Some(human) if human == mark => format!("{mark} (you)"),
        Some(_) => format!("{mark} (computer)"),
        None => mark.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoi::{GameMachine, GameMode, MemoryScoreStore, WIN_LINES};

    #[test]
    fn test_empty_board_shows_numbers() {
        let text = board(&Board::new(), Phase::InProgress);
        assert_eq!(text, " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n");
    }

    #[test]
    fn test_marks_replace_numbers() {
        let text = board(&Board::from_rows(["X..", ".O.", "..."]), Phase::InProgress);
        assert!(text.starts_with(" X | 2 | 3 \n"));
        assert!(text.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let phase = Phase::Won {
            winner: Mark::First,
            line: WIN_LINES[0],
        };
        let text = board(&Board::from_rows(["XXX", "OO.", "..."]), phase);
        assert!(text.starts_with("[X]|[X]|[X]\n"));
        assert!(text.contains(" O | O | 6 "));
    }

    #[test]
    fn test_scores_line() {
        assert_eq!(scores(Scoreboard::new(2, 1)), "X: 2   O: 1");
    }

    #[test]
    fn test_continue_is_silent() {
        assert_eq!(outcome(&MoveOutcome::Continue), None);
    }

    #[test]
    fn test_friend_status_names_mover() {
        let mut machine = GameMachine::new(MemoryScoreStore::new());
        machine.start_new_round(GameMode::Friend);
        let mover = machine.state().current_player();
        assert_eq!(status(machine.state()), format!("{mover} to move"));
    }
}
