//! Superseded background answers never reach the board.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use tictactoi::{
    AiRequest, AiWorker, Delivery, Difficulty, GameMachine, GameMode, MemoryScoreStore,
};

fn computer_first(machine: &mut GameMachine<MemoryScoreStore>, difficulty: Difficulty) -> AiRequest {
    loop {
        if let Some(request) = machine.start_new_round(GameMode::VsComputer(difficulty)) {
            return request;
        }
    }
}

#[tokio::test]
async fn test_first_of_two_requests_is_discarded() {
    let mut machine = GameMachine::with_rng(MemoryScoreStore::new(), StdRng::seed_from_u64(21));
    let (worker, mut answers) = AiWorker::new();

    let first = computer_first(&mut machine, Difficulty::Hard);
    worker.dispatch(first);
    let second = computer_first(&mut machine, Difficulty::Easy);
    worker.dispatch(second);

    let mut deliveries = HashMap::new();
    for _ in 0..2 {
        let answer = answers.recv().await.unwrap();
        let delivery = machine.deliver(answer).unwrap();
        deliveries.insert(answer.id, (answer.cell, delivery));
    }

    assert_eq!(deliveries[&first.id()].1, Delivery::Stale);
    let (cell, delivery) = &deliveries[&second.id()];
    assert!(matches!(delivery, Delivery::Applied { .. }));

    // Exactly the second request's move is on the board.
    let board = machine.state().board();
    assert_eq!(board.occupied(), 1);
    let cell = cell.unwrap();
    assert_eq!(board.mark_at(cell), Some(second.computer()));
}

#[tokio::test]
async fn test_answer_arriving_after_reset_is_discarded() {
    let mut machine = GameMachine::with_rng(MemoryScoreStore::new(), StdRng::seed_from_u64(22));
    let (worker, mut answers) = AiWorker::new();

    let request = computer_first(&mut machine, Difficulty::Medium);
    worker.dispatch(request).await.unwrap();
    machine.start_new_round(GameMode::Friend);

    let answer = answers.recv().await.unwrap();
    let before = machine.state().clone();
    assert_eq!(machine.deliver(answer), Ok(Delivery::Stale));
    assert_eq!(machine.state(), &before);
}

#[tokio::test]
async fn test_many_superseded_requests() {
    let mut machine = GameMachine::with_rng(MemoryScoreStore::new(), StdRng::seed_from_u64(23));
    let (worker, mut answers) = AiWorker::new();

    let mut last = None;
    for _ in 0..5 {
        let request = computer_first(&mut machine, Difficulty::Easy);
        worker.dispatch(request);
        last = Some(request);
    }
    let last = last.unwrap();

    let mut applied = 0;
    for _ in 0..5 {
        let answer = answers.recv().await.unwrap();
        match machine.deliver(answer).unwrap() {
            Delivery::Applied { .. } => {
                assert_eq!(answer.id, last.id());
                applied += 1;
            }
            Delivery::Stale => assert_ne!(answer.id, last.id()),
            Delivery::NoMove => panic!("empty board always has a move"),
        }
    }
    assert_eq!(applied, 1);
    assert_eq!(machine.state().board().occupied(), 1);
}
