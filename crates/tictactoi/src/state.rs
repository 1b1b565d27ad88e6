//! Complete game state as seen by a renderer.

use crate::ai::Difficulty;
use crate::board::{Board, Mark};
use crate::ledger::MoveLedger;
use crate::rules::WinLine;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Who sits on the other side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameMode {
    /// Two humans sharing one device.
    #[display("friend")]
    Friend,
    /// Human against the computer at the given difficulty.
    #[display("computer ({_0})")]
    VsComputer(Difficulty),
}

/// Round phase. There is no draw phase: a draw reopens the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// Terminal until the next round starts.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The line that decided the round.
        line: WinLine,
    },
}

impl Phase {
    /// True while the round accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Phase::InProgress)
    }

    /// The winner, if the round is decided.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Phase::Won { winner, .. } => Some(*winner),
            Phase::InProgress => None,
        }
    }
}

/// Win totals as last read from or written to the score store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    first: u32,
    second: u32,
}

impl Scoreboard {
    /// Creates a scoreboard from explicit totals.
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::First => self.first,
            Mark::Second => self.second,
        }
    }

    /// Per-mark maximum of `self` and `other`.
    pub(crate) fn at_least(self, other: Scoreboard) -> Scoreboard {
        Scoreboard {
            first: self.first.max(other.first),
            second: self.second.max(other.second),
        }
    }

    /// Adds one win for `mark` and returns the new total.
    pub(crate) fn increment(&mut self, mark: Mark) -> u32 {
        let slot = match mark {
            Mark::First => &mut self.first,
            Mark::Second => &mut self.second,
        };
        *slot = slot.saturating_add(1);
        *slot
    }
}

/// Everything the state machine owns about the current round.
///
/// Only [`crate::GameMachine`] mutates it; everyone else reads a reference
/// or a clone.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Marks currently on the board, oldest first.
    ledger: MoveLedger,
    /// Mark to move next.
    #[getter(copy)]
    current_player: Mark,
    /// Round phase.
    #[getter(copy)]
    phase: Phase,
    /// Friend or computer opponent.
    #[getter(copy)]
    mode: GameMode,
    /// The human's mark against the computer, `None` in friend mode.
    #[getter(copy)]
    human_mark: Option<Mark>,
    /// Win totals.
    #[getter(copy)]
    scores: Scoreboard,
}

impl GameState {
    pub(crate) fn new(mode: GameMode, starter: Mark, human_mark: Option<Mark>, scores: Scoreboard) -> Self {
        Self {
            board: Board::new(),
            ledger: MoveLedger::new(),
            current_player: starter,
            phase: Phase::InProgress,
            mode,
            human_mark,
            scores,
        }
    }

    /// The computer's mark, `None` in friend mode.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.human_mark.map(Mark::opponent)
    }

    /// True when the computer holds the mark that moves next in a live round.
    pub fn is_computer_turn(&self) -> bool {
        self.phase.is_in_progress() && self.computer_mark() == Some(self.current_player)
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut MoveLedger {
        &mut self.ledger
    }

    pub(crate) fn set_current_player(&mut self, mark: Mark) {
        self.current_player = mark;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn scores_mut(&mut self) -> &mut Scoreboard {
        &mut self.scores
    }
}
