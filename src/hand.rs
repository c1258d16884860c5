//! Hands dealt from a deck, and bridge-style rendering.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};
use crate::deck::Deck;

/// Bridge seat, in the order hands are dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// North.
    North,
    /// West.
    West,
    /// South.
    South,
    /// East.
    East,
}

impl Seat {
    /// All seats in dealing order.
    pub const ALL: [Self; 4] = [Self::North, Self::West, Self::South, Self::East];

    /// Returns the seat name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::West => "West",
            Self::South => "South",
            Self::East => "East",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand of cards.
///
/// `Display` renders one line per suit, spades first:
///
/// ```text
///   ♠ : A K 3
///   ♥ : void
///   ♦ : Q 10 9 2
///   ♣ : J 8 7 6 5 4 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sorts the hand from the highest card down (spades ace first).
    pub fn sort_descending(&mut self) {
        self.cards.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Iterates over the cards of one suit, in hand order.
    pub fn cards_in_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards
            .iter()
            .copied()
            .filter(move |card| card.suit() == suit)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, suit) in Suit::ALL.iter().rev().enumerate() {
            if line > 0 {
                f.write_str("\n")?;
            }
            write!(f, "  {suit} :")?;

            let mut cards = self.cards_in_suit(*suit).peekable();
            if cards.peek().is_none() {
                f.write_str(" void")?;
            }
            for card in cards {
                write!(f, " {}", card.rank())?;
            }
        }
        Ok(())
    }
}

/// Deals the rest of the deck round-robin into `N` hands.
///
/// The `i`-th card dealt goes to hand `i % N`. Dealing stops when the deck
/// is exhausted, so hands can differ in length by one.
///
/// # Example
///
/// ```
/// use deck52::{Deck, deal_round_robin};
///
/// let mut deck = Deck::from_seed(1);
/// let hands: [_; 4] = deal_round_robin(&mut deck);
/// assert!(hands.iter().all(|hand| hand.len() == 13));
/// assert!(deck.is_empty());
/// ```
pub fn deal_round_robin<R, const N: usize>(deck: &mut Deck<R>) -> [Hand; N] {
    let mut hands: [Hand; N] = core::array::from_fn(|_| Hand::new());
    if N == 0 {
        return hands;
    }

    for (i, card) in deck.drain().enumerate() {
        hands[i % N].add_card(card);
    }
    hands
}

/// Deals a bridge hand: the rest of the deck round-robin to the four
/// [`Seat`]s, each hand sorted from the highest card down.
///
/// Index the result with the position of a seat in [`Seat::ALL`].
pub fn deal_bridge<R>(deck: &mut Deck<R>) -> [Hand; 4] {
    let mut hands: [Hand; 4] = deal_round_robin(deck);
    for hand in &mut hands {
        hand.sort_descending();
    }
    hands
}
