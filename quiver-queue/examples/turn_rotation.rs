//! Turn rotation over a linked queue: the front player takes a turn and
//! goes straight to the back of the line.
//!
//! Run with `RUST_LOG=debug` for per-rotation detail.

use quiver_queue::{LinkedQueue, util};

fn main() {
    tracing_subscriber::fmt()
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut players = LinkedQueue::new();
    for name in ["Ray", "Brian", "Eric"] {
        players.push(name);
    }
    tracing::info!("game on: {} players", players.len());

    for round in 1..=3 {
        for _ in 0..players.len() {
            let player = util::rotate(&mut players).expect("player queue is non-empty");
            tracing::info!("round {round}: {player} takes a turn");
        }
        tracing::debug!("round {round} complete, {:?} is up next", players.front());
    }
}
