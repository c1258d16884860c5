//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that shuffles in place with a caller-supplied
//! random source and deals cards one at a time, plus [`Card`], [`Suit`] and
//! [`Rank`] types with their display names.
//!
//! # Example
//!
//! ```
//! use deck52::{Deck, deal_bridge};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::new(&mut rng);
//! let hands = deal_bridge(&mut deck);
//! assert!(hands.iter().all(|hand| hand.len() == 13));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_COUNT, Rank, SUIT_COUNT, Suit};
pub use deck::{Deals, Deck};
pub use error::CardError;
pub use hand::{Hand, Seat, deal_bridge, deal_round_robin};
pub use options::DeckOptions;
