//! Bridge hand dealer example.
//!
//! Usage: `cargo run --example bridge_deal -- [seed]`. Set `RUST_LOG=deck52=trace`
//! to watch every deal.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use deck52::{Deck, Seat, deal_bridge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deck52=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = seed_from_args();
    info!(seed, "dealing bridge hand");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::new(&mut rng);
    let hands = deal_bridge(&mut deck);

    for (seat, hand) in Seat::ALL.iter().zip(&hands) {
        println!("{seat}:");
        println!("{hand}");
    }
}

fn seed_from_args() -> u64 {
    env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
}
