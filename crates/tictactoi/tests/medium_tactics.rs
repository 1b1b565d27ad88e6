//! Medium difficulty always takes a win and always blocks a single threat.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoi::rules::win::has_line;
use tictactoi::{Board, Cell, Difficulty, Mark, WIN_LINES, compute_move};

#[test]
fn test_medium_prefers_win_over_block() {
    let board = Board::from_rows(["XX.", "OO.", "..."]);
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cell = compute_move(&board, Difficulty::Medium, Mark::Second, Mark::First, &mut rng);
        assert_eq!(cell, Cell::new(1, 2));
    }
}

#[test]
fn test_medium_blocks_single_threat() {
    let board = Board::from_rows(["O..", "XX.", "..O"]);
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cell = compute_move(&board, Difficulty::Medium, Mark::Second, Mark::First, &mut rng);
        assert_eq!(cell, Cell::new(1, 2));
    }
}

/// For every win-line, two computer marks plus a human decoy elsewhere:
/// Medium must finish the line.
#[test]
fn test_medium_completes_every_line() {
    for line in WIN_LINES {
        let [a, b, gap] = line.cells();
        let mut board = Board::new();
        board.set(a.row(), a.col(), Mark::Second).unwrap();
        board.set(b.row(), b.col(), Mark::Second).unwrap();

        // Park human marks on cells outside the line until two are placed.
        let free: Vec<Cell> = Cell::all()
            .filter(|c| !line.contains(*c) && board.is_empty_at(*c))
            .collect();
        let mut placed = 0;
        for cell in free {
            let mut trial = board;
            trial.set(cell.row(), cell.col(), Mark::First).unwrap();
            if has_line(&trial, Mark::First) {
                continue;
            }
            board = trial;
            placed += 1;
            if placed == 2 {
                break;
            }
        }

        let mut rng = StdRng::seed_from_u64(0);
        let chosen = compute_move(&board, Difficulty::Medium, Mark::Second, Mark::First, &mut rng).unwrap();
        let mut after = board;
        after.set(chosen.row(), chosen.col(), Mark::Second).unwrap();
        assert!(has_line(&after, Mark::Second), "missed win at {gap} on {board:?}");
    }
}

/// For every win-line, two human marks and one computer mark elsewhere:
/// the computer has nothing to win, so Medium must take the gap.
#[test]
fn test_medium_blocks_every_line() {
    for line in WIN_LINES {
        let [a, b, gap] = line.cells();
        let mut board = Board::new();
        board.set(a.row(), a.col(), Mark::First).unwrap();
        board.set(b.row(), b.col(), Mark::First).unwrap();
        let elsewhere = Cell::all().find(|c| !line.contains(*c)).unwrap();
        board.set(elsewhere.row(), elsewhere.col(), Mark::Second).unwrap();

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = compute_move(&board, Difficulty::Medium, Mark::Second, Mark::First, &mut rng);
            assert_eq!(chosen, Some(gap), "failed to block {gap} on {board:?}");
        }
    }
}
