//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when converting a raw index into a card type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card identifier is not in `0..52`.
    #[error("card index {0} is out of range (expected 0..52)")]
    InvalidCard(u8),
    /// Suit index is not in `0..4`.
    #[error("suit index {0} is out of range (expected 0..4)")]
    InvalidSuit(u8),
    /// Rank index is not in `0..13`.
    #[error("rank index {0} is out of range (expected 0..13)")]
    InvalidRank(u8),
}
