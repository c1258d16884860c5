//! The 52-card deck: shuffling and sequential dealing.

use core::iter::FusedIterator;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::DeckOptions;

/// A standard deck of 52 cards with a dealing cursor.
///
/// The deck draws randomness from `R`, which is usually a `&mut` borrow of a
/// generator the caller owns. The borrow keeps the generator alive for as
/// long as the deck exists, and the deck never reseeds it.
///
/// Cards before the cursor have been dealt. Cards from the cursor onwards
/// remain in the order set by the last shuffle.
///
/// # Example
///
/// ```
/// use deck52::Deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut deck = Deck::new(&mut rng);
///
/// let card = deck.deal_card();
/// assert!(card.is_some());
/// assert_eq!(deck.size(), 51);
/// ```
#[derive(Debug)]
pub struct Deck<R = ChaCha8Rng> {
    /// Permutation of all 52 cards.
    cards: [Card; DECK_SIZE],
    /// Index of the next card to deal.
    cursor: usize,
    /// Random source used by [`Deck::shuffle`].
    rng: R,
}

impl<R: RngCore> Deck<R> {
    /// Creates a deck and shuffles it.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::with_options(rng, DeckOptions::default())
    }

    /// Creates a deck in identity order (clubs 2..A, diamonds, hearts, spades).
    ///
    /// # Example
    ///
    /// ```
    /// use deck52::{Card, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(0);
    /// let deck = Deck::unshuffled(&mut rng);
    /// assert_eq!(deck.remaining(), &Card::ALL[..]);
    /// ```
    #[must_use]
    pub fn unshuffled(rng: R) -> Self {
        Self::with_options(rng, DeckOptions::default().with_auto_shuffle(false))
    }

    /// Creates a deck with the given options.
    #[must_use]
    pub fn with_options(rng: R, options: DeckOptions) -> Self {
        let mut deck = Self {
            cards: Card::ALL,
            cursor: 0,
            rng,
        };

        if options.auto_shuffle {
            deck.shuffle();
        }

        deck
    }

    /// Shuffles all 52 cards and resets the cursor.
    ///
    /// Uses a forward Fisher-Yates pass: each position `i` in `0..51` is
    /// swapped with a position drawn uniformly from `i..52`. Any dealing
    /// progress is discarded, so the full deck is available again.
    pub fn shuffle(&mut self) {
        for i in 0..DECK_SIZE - 1 {
            let j = self.rng.random_range(i..DECK_SIZE);
            self.cards.swap(i, j);
        }
        let discarded = self.cursor;
        self.cursor = 0;

        debug!(discarded, "deck shuffled");
    }
}

impl<R> Deck<R> {
    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub const fn size(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor == DECK_SIZE
    }

    /// Deals the next card from the deck.
    ///
    /// Returns `None` once the deck is exhausted. Further calls keep returning
    /// `None` until the next [`shuffle`](Deck::shuffle).
    pub fn deal_card(&mut self) -> Option<Card> {
        let Some(&card) = self.cards.get(self.cursor) else {
            trace!("deal from exhausted deck");
            return None;
        };
        self.cursor += 1;

        trace!(card = card.index(), remaining = self.size(), "dealt card");
        Some(card)
    }

    /// Deals up to `count` cards, stopping early if the deck runs out.
    ///
    /// # Example
    ///
    /// ```
    /// use deck52::Deck;
    ///
    /// let mut deck = Deck::from_seed(3);
    /// let hand: Vec<_> = deck.deal(5).collect();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(deck.size(), 47);
    /// ```
    pub fn deal(&mut self, count: usize) -> Deals<'_, R> {
        let left = count.min(self.size());
        Deals { deck: self, left }
    }

    /// Deals every card that is left.
    pub const fn drain(&mut self) -> Deals<'_, R> {
        let left = self.size();
        Deals { deck: self, left }
    }

    /// Returns the cards not yet dealt, in the order they will be dealt.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }

    /// Returns the cards already dealt since the last shuffle, in deal order.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Returns the random source.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl Deck {
    /// Creates a shuffled deck that owns a [`ChaCha8Rng`] seeded with `seed`.
    ///
    /// The same seed always yields the same order.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Returns the suit of a card.
    #[must_use]
    pub const fn suit(card: Card) -> Suit {
        card.suit()
    }

    /// Returns the rank of a card. Ranks compare numerically, aces high.
    #[must_use]
    pub const fn rank(card: Card) -> Rank {
        card.rank()
    }

    /// Returns the suit symbol (`♣`, `♦`, `♥` or `♠`).
    #[must_use]
    pub const fn suit_name(suit: Suit) -> &'static str {
        suit.name()
    }

    /// Returns the rank name (`2` .. `10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn rank_name(rank: Rank) -> &'static str {
        rank.name()
    }
}

/// Iterator returned by [`Deck::deal`] and [`Deck::drain`].
///
/// Every item advances the deck's cursor, as [`Deck::deal_card`] does.
#[derive(Debug)]
pub struct Deals<'a, R> {
    deck: &'a mut Deck<R>,
    left: usize,
}

impl<R> Iterator for Deals<'_, R> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.left == 0 {
            return None;
        }
        let card = self.deck.deal_card()?;
        self.left -= 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<R> ExactSizeIterator for Deals<'_, R> {}

impl<R> FusedIterator for Deals<'_, R> {}
