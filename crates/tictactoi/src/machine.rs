//! The game state machine.
//!
//! [`GameMachine`] is the only owner of [`GameState`]. Human input and
//! computer answers both reach the board through [`GameMachine::apply_move`].
//!
//! # Turn flow
//!
//! ```text
//! apply_move ──► latch = Transitioning ──► settle() ──► latch = Ready
//!                                              │
//!                          computer to move? ──┴──► AiRequest ──► AiWorker
//!                                                                    │
//!                 deliver(AiResponse) ◄──────────────────────────────┘
//! ```
//!
//! While the latch is set, further moves fail with
//! [`InvalidStateReason::Transitioning`]. While a request is outstanding,
//! human moves fail with [`InvalidStateReason::AwaitingComputer`].

use crate::ai::{AiRequest, AiResponse, RequestId};
use crate::board::{Cell, Mark};
use crate::error::{InvalidStateReason, MoveError};
#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, InvariantSet};
use crate::ledger::Move;
use crate::rules::{Win, is_draw, winner};
use crate::score::ScoreStore;
use crate::state::{GameMode, GameState, Phase, Scoreboard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Result of a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play continues with the other mark.
    Continue,
    /// The board filled up without a line. Each player's oldest mark was
    /// removed and First moves next.
    DrawRecovered {
        /// The removed moves, First's then Second's.
        removed: Vec<Move>,
    },
    /// The mover completed a line; the round is over.
    Won(Win),
}

impl MoveOutcome {
    /// True when the move ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won(_))
    }
}

/// What happened to a background AI answer on delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The answer was current and its move was committed.
    Applied {
        /// The computer's cell.
        cell: Cell,
        /// Outcome of the committed move.
        outcome: MoveOutcome,
    },
    /// The answer belonged to a superseded request or an outdated board.
    /// Nothing changed.
    Stale,
    /// The answer was current but the AI had no move.
    NoMove,
}

/// Whether the previous move is still being handed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TurnLatch {
    /// Moves are accepted.
    #[default]
    Ready,
    /// A move was committed and [`GameMachine::settle`] has not run yet.
    Transitioning,
}

/// Authoritative owner of the game.
#[derive(Debug)]
pub struct GameMachine<S: ScoreStore> {
    state: GameState,
    latch: TurnLatch,
    pending: Option<AiRequest>,
    last_request: u64,
    store: S,
    rng: StdRng,
}

impl<S: ScoreStore> GameMachine<S> {
    /// Creates a machine with an OS-seeded random source.
    ///
    /// The initial round is a friend game with First to move; call
    /// [`start_new_round`](Self::start_new_round) to choose a mode.
    pub fn new(store: S) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    /// Creates a machine with an explicit random source.
    pub fn with_rng(store: S, rng: StdRng) -> Self {
        let scores = load_scores(&store);
        info!(
            first = scores.wins(Mark::First),
            second = scores.wins(Mark::Second),
            "Scores loaded"
        );
        Self {
            state: GameState::new(GameMode::Friend, Mark::First, None, scores),
            latch: TurnLatch::Ready,
            pending: None,
            last_request: 0,
            store,
            rng,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current latch position.
    pub fn latch(&self) -> TurnLatch {
        self.latch
    }

    /// The AI request waiting for an answer, if any.
    pub fn pending_request(&self) -> Option<&AiRequest> {
        self.pending.as_ref()
    }

    /// The injected score store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the round with a fresh one.
    ///
    /// Clears board and ledger, picks a random starting mark and, against the
    /// computer, a random mark for the human. Any outstanding AI request is
    /// superseded. Returns the first AI request when the computer starts.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self, mode: GameMode) -> Option<AiRequest> {
        let starter = self.coin_flip();
        let human = match mode {
            GameMode::Friend => None,
            GameMode::VsComputer(_) => Some(self.coin_flip()),
        };
        if let Some(stale) = self.pending.take() {
            debug!(id = %stale.id(), "Superseding outstanding AI request");
        }

        let scores = self.reload_scores();
        self.state = GameState::new(mode, starter, human, scores);
        self.latch = TurnLatch::Ready;
        info!(%mode, %starter, ?human, "New round");

        self.issue_request_if_due()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the move is committed together with its win/draw
    /// resolution and the latch is set until [`settle`](Self::settle).
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidState`] when the round is over, the previous
    ///   move is unsettled, or the computer is to move.
    /// - [`MoveError::IllegalMove`] when the cell is occupied or off the board.
    ///
    /// Either way the state is left exactly as it was.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        self.accepting_moves()?;

        let cell = Cell::new(row, col).ok_or(MoveError::IllegalMove { row, col })?;
        let player = self.state.current_player();
        self.state.board_mut().set(row, col, player)?;
        self.state.ledger_mut().record(Move::new(cell, player));
        self.latch = TurnLatch::Transitioning;
        debug!(%cell, "Mark placed");

        let outcome = if let Some(win) = winner(self.state.board()) {
            self.state.set_phase(Phase::Won {
                winner: win.player,
                line: win.line,
            });
            self.record_win(win.player);
            MoveOutcome::Won(win)
        } else if is_draw(self.state.board()) {
            MoveOutcome::DrawRecovered {
                removed: self.recover_from_draw(),
            }
        } else {
            self.state.set_current_player(player.opponent());
            MoveOutcome::Continue
        };

        #[cfg(debug_assertions)]
        if let Err(violations) = GameInvariants::check_all(&self.state) {
            panic!("game invariants violated after {cell}: {violations:?}");
        }

        Ok(outcome)
    }

    /// Finishes the hand-over of the last move.
    ///
    /// Releases the latch and, when the computer is to move in a live round
    /// with no request outstanding, issues the next AI request. Calling it
    /// with the latch already released only does the latter.
    #[instrument(skip(self))]
    pub fn settle(&mut self) -> Option<AiRequest> {
        if self.latch == TurnLatch::Transitioning {
            self.latch = TurnLatch::Ready;
            debug!(next = %self.state.current_player(), "Turn handed over");
        }
        self.issue_request_if_due()
    }

    /// Applies a background AI answer if it is still current.
    ///
    /// An answer is current when its id matches the outstanding request and
    /// the board and turn are still the ones the request was issued for.
    /// Anything else is dropped without touching the state.
    #[instrument(skip(self), fields(id = %response.id))]
    pub fn deliver(&mut self, response: AiResponse) -> Result<Delivery, MoveError> {
        let Some(pending) = self.pending else {
            debug!("No outstanding request, dropping AI answer");
            return Ok(Delivery::Stale);
        };
        if pending.id() != response.id {
            debug!(outstanding = %pending.id(), "Superseded AI answer dropped");
            return Ok(Delivery::Stale);
        }
        self.pending = None;

        if !self.state.is_computer_turn() || pending.snapshot() != self.state.board() {
            debug!("AI answer no longer matches the board, dropping it");
            return Ok(Delivery::Stale);
        }

        let Some(cell) = response.cell else {
            warn!("AI answered without a move");
            return Ok(Delivery::NoMove);
        };

        let outcome = self.apply_move(cell.row(), cell.col())?;
        Ok(Delivery::Applied { cell, outcome })
    }

    fn accepting_moves(&self) -> Result<(), MoveError> {
        let reason = if !self.state.phase().is_in_progress() {
            InvalidStateReason::RoundOver
        } else if self.latch == TurnLatch::Transitioning {
            InvalidStateReason::Transitioning
        } else if self.pending.is_some() {
            InvalidStateReason::AwaitingComputer
        } else {
            return Ok(());
        };
        debug!(%reason, "Move refused");
        Err(MoveError::InvalidState { reason })
    }

    fn issue_request_if_due(&mut self) -> Option<AiRequest> {
        let GameMode::VsComputer(difficulty) = self.state.mode() else {
            return None;
        };
        if self.latch != TurnLatch::Ready || self.pending.is_some() || !self.state.is_computer_turn() {
            return None;
        }
        let computer = self.state.computer_mark()?;

        self.last_request += 1;
        let request = AiRequest::new(
            RequestId::new(self.last_request),
            *self.state.board(),
            difficulty,
            computer,
        );
        self.pending = Some(request);
        debug!(id = %request.id(), %difficulty, "AI request issued");
        Some(request)
    }

    /// Removes each player's oldest mark still on the board and gives First the move.
    fn recover_from_draw(&mut self) -> Vec<Move> {
        let mut removed = Vec::with_capacity(2);
        for mark in Mark::iter() {
            if let Some(mv) = self.state.ledger_mut().remove_earliest(mark) {
                self.state.board_mut().remove(mv.cell);
                removed.push(mv);
            }
        }
        self.state.set_current_player(Mark::First);
        info!(
            removed = removed.len(),
            remaining = self.state.ledger().len(),
            "Draw, board reopened"
        );
        removed
    }

    fn record_win(&mut self, winner: Mark) {
        let total = self.state.scores_mut().increment(winner);
        info!(%winner, total, "Round won");
        if let Err(err) = self.store.save_score(winner, total) {
            warn!(%err, "Failed to persist score");
        }
    }

    /// Reads the stored totals for a new round.
    ///
    /// A win whose save failed is still counted: the in-memory total wins
    /// over a lower stored one and its save is retried.
    fn reload_scores(&mut self) -> Scoreboard {
        let stored = load_scores(&self.store);
        let known = self.state.scores();
        for mark in Mark::iter() {
            let wins = known.wins(mark);
            if wins > stored.wins(mark)
                && let Err(err) = self.store.save_score(mark, wins)
            {
                warn!(%err, %mark, wins, "Score store still behind, keeping in-memory total");
            }
        }
        stored.at_least(known)
    }

    fn coin_flip(&mut self) -> Mark {
        if self.rng.random_bool(0.5) {
            Mark::First
        } else {
            Mark::Second
        }
    }
}

fn load_scores<S: ScoreStore>(store: &S) -> Scoreboard {
    Scoreboard::new(store.load_score(Mark::First), store.load_score(Mark::Second))
}
