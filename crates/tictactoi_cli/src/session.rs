//! Interactive terminal session.
//!
//! One task owns the [`GameMachine`]. Keyboard lines, AI answers and the
//! end of the transitioning window all arrive through a single
//! `tokio::select!`, so the machine is never touched concurrently.

use crate::render;
use std::time::Duration;
use tictactoi::{
    AiRequest, AiResponse, AiWorker, Cell, Delivery, GameMachine, GameMode, MoveError, MoveOutcome,
    ScoreStore,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Enter a cell 1-9 or `row col` (0-2), `n` for a new round, `q` to quit.";

/// A parsed line of keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at zero-based coordinates (not yet range-checked).
    Place {
        /// Row.
        row: usize,
        /// Column.
        col: usize,
    },
    /// Abandon the round and start another.
    NewRound,
    /// Leave the session.
    Quit,
    /// Anything else.
    Unknown,
}

/// Parses one line of input.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Input::Quit,
        "n" | "new" => return Input::NewRound,
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [single] => single
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Cell::from_index)
            .map_or(Input::Unknown, |cell| Input::Place {
                row: cell.row(),
                col: cell.col(),
            }),
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Input::Place { row, col },
            _ => Input::Unknown,
        },
        _ => Input::Unknown,
    }
}

/// What the session wants done after handling an event.
#[derive(Debug, Default)]
pub struct Reaction {
    /// Lines to print.
    pub lines: Vec<String>,
    /// Search to hand to the AI worker.
    pub request: Option<AiRequest>,
    /// True when the user asked to leave.
    pub quit: bool,
}

impl Reaction {
    fn say(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }
}

/// Session state wrapped around the game machine.
pub struct Session<S: ScoreStore> {
    machine: GameMachine<S>,
    mode: GameMode,
    settle: Duration,
    settle_at: Option<Instant>,
    sound: bool,
}

impl<S: ScoreStore> Session<S> {
    /// Creates a session. Nothing happens until [`Session::start`].
    pub fn new(machine: GameMachine<S>, mode: GameMode, settle: Duration, sound: bool) -> Self {
        Self {
            machine,
            mode,
            settle,
            settle_at: None,
            sound,
        }
    }

    #[cfg(test)]
    fn machine(&self) -> &GameMachine<S> {
        &self.machine
    }

    /// When the current transitioning window closes, if one is open.
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle_at
    }

    /// Starts the first round.
    pub fn start(&mut self) -> Reaction {
        let mut reaction = self.new_round();
        reaction.lines.insert(0, HELP.to_string());
        reaction
    }

    /// Handles one line of keyboard input.
    #[instrument(skip(self))]
    pub fn on_line(&mut self, line: &str) -> Reaction {
        let input = parse_input(line);
        if input == Input::Quit {
            return Reaction {
                quit: true,
                ..Reaction::default()
            };
        }
        // Any input after a win restarts.
        if !self.machine.state().phase().is_in_progress() {
            return self.new_round();
        }

        match input {
            Input::Place { row, col } => match self.machine.apply_move(row, col) {
                Ok(outcome) => {
                    self.settle_at = Some(Instant::now() + self.settle);
                    Reaction::say(self.describe_move(&outcome))
                }
                Err(MoveError::InvalidState { reason }) => {
                    debug!(%reason, "Input ignored");
                    Reaction::say(vec![format!("Not now: {reason}")])
                }
                Err(e) => Reaction::say(vec![e.to_string()]),
            },
            Input::NewRound => self.new_round(),
            Input::Quit | Input::Unknown => Reaction::say(vec![HELP.to_string()]),
        }
    }

    /// Hands a background answer to the machine.
    #[instrument(skip(self), fields(id = %response.id))]
    pub fn on_answer(&mut self, response: AiResponse) -> Result<Reaction, MoveError> {
        match self.machine.deliver(response)? {
            Delivery::Applied { cell, outcome } => {
                self.settle_at = Some(Instant::now() + self.settle);
                let mut lines = vec![format!("Computer plays {}", cell.index() + 1)];
                lines.extend(self.describe_move(&outcome));
                Ok(Reaction::say(lines))
            }
            Delivery::Stale => {
                debug!("Discarded stale answer");
                Ok(Reaction::default())
            }
            Delivery::NoMove => {
                warn!("Computer found no move");
                Ok(Reaction::default())
            }
        }
    }

    /// Closes the transitioning window.
    pub fn on_settle(&mut self) -> Reaction {
        self.settle_at = None;
        match self.machine.settle() {
            Some(request) => Reaction {
                lines: vec!["Computer is thinking...".to_string()],
                request: Some(request),
                quit: false,
            },
            None => Reaction::default(),
        }
    }

    fn new_round(&mut self) -> Reaction {
        self.settle_at = None;
        let request = self.machine.start_new_round(self.mode);
        let state = self.machine.state();
        info!(mode = %self.mode, starter = %state.current_player(), "Round started");

        let mut lines = vec![
            format!("New round against {}", self.mode),
            render::scores(state.scores()),
            render::board(state.board(), state.phase()),
            render::status(state),
        ];
        if request.is_some() {
            lines.push("Computer is thinking...".to_string());
        }
        Reaction {
            lines,
            request,
            quit: false,
        }
    }

    fn describe_move(&self, outcome: &MoveOutcome) -> Vec<String> {
        let state = self.machine.state();
        let mut lines = vec![render::board(state.board(), state.phase())];
        if let Some(text) = render::outcome(outcome) {
            lines.push(text);
        }
        if outcome.is_terminal() {
            lines.push(render::scores(state.scores()));
            if self.sound {
                lines.push("\x07".to_string());
            }
        }
        lines.push(render::status(state));
        lines
    }
}

/// Runs the session on stdin/stdout until the user quits or input ends.
pub async fn run<S: ScoreStore>(mut session: Session<S>) -> anyhow::Result<()> {
    let (worker, mut answers) = AiWorker::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut reaction = session.start();

    loop {
        for line in &reaction.lines {
            println!("{line}");
        }
        if reaction.quit {
            break;
        }
        if let Some(request) = reaction.request.take() {
            worker.dispatch(request);
        }

        let deadline = session.settle_deadline();
        reaction = tokio::select! {
            line = input.next_line() => match line? {
                Some(line) => session.on_line(&line),
                None => break,
            },
            Some(answer) = answers.recv() => session.on_answer(answer)?,
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => session.on_settle(),
        };
    }

    info!("Session ended");
    Ok(())
}
