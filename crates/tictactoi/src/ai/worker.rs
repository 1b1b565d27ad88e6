//! Background execution of AI requests.

use super::request::{AiRequest, AiResponse};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Runs AI searches on tokio's blocking pool and sends the answers back.
///
/// The worker holds no game state. Every request carries its own board
/// copy, and every answer carries the request's id so the interactive side
/// can throw away superseded results.
#[derive(Debug, Clone)]
pub struct AiWorker {
    tx: mpsc::UnboundedSender<AiResponse>,
}

impl AiWorker {
    /// Creates a worker and the receiver its answers arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AiResponse>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Starts computing `request` in the background. Returns immediately.
    ///
    /// Must be called from within a tokio runtime. There is no preemption:
    /// a superseded search runs to completion and its answer is filtered
    /// out at delivery.
    #[instrument(skip(self, request), fields(id = %request.id(), difficulty = %request.difficulty()))]
    pub fn dispatch(&self, request: AiRequest) -> JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            let response = request.compute(&mut rand::rng());
            debug!(
                id = %response.id,
                cell = ?response.cell,
                elapsed_us = started.elapsed().as_micros() as u64,
                "AI search finished"
            );
            if tx.send(response).is_err() {
                debug!(id = %response.id, "Receiver gone, dropping AI answer");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Difficulty, RequestId};
    use crate::board::{Board, Cell, Mark};

    #[tokio::test]
    async fn test_dispatch_reports_back() {
        let (worker, mut rx) = AiWorker::new();
        let board = Board::from_rows(["OO.", "XX.", "X.."]);
        let request = AiRequest::new(RequestId::new(1), board, Difficulty::Hard, Mark::Second);
        worker.dispatch(request).await.unwrap();
        let response = rx.recv().await.unwrap();
        assert_eq!(response.id, RequestId::new(1));
        assert_eq!(response.cell, Cell::new(0, 2));
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_panic() {
        let (worker, rx) = AiWorker::new();
        drop(rx);
        let request = AiRequest::new(RequestId::new(9), Board::new(), Difficulty::Easy, Mark::First);
        assert!(worker.dispatch(request).await.is_ok());
    }
}
