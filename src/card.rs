//! Card types and the rank/suit naming tables.
//!
//! A card is identified by an integer in `0..52`. The suit is `index / 13`
//! and the rank is `index % 13`, so the identity ordering runs clubs 2..A,
//! diamonds 2..A, hearts 2..A, spades 2..A.

use core::fmt;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of suits.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

const SUIT_NAMES: [&str; SUIT_COUNT] = ["\u{2663}", "\u{2666}", "\u{2665}", "\u{2660}"];

const RANK_NAMES: [&str; RANK_COUNT] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Card suit, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Hearts.
    Hearts = 2,
    /// Spades.
    Spades = 3,
}

impl Suit {
    /// All suits in encoding order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for an encoded index.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `index` is not in `0..4`.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Self::Clubs),
            1 => Ok(Self::Diamonds),
            2 => Ok(Self::Hearts),
            3 => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(index)),
        }
    }

    /// Returns the encoded index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the conventional suit symbol as a single Unicode character.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// Card rank, ascending with aces high.
///
/// Ranks compare with the usual operators, so `Rank::Ace > Rank::King`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two = 0,
    /// 3.
    Three = 1,
    /// 4.
    Four = 2,
    /// 5.
    Five = 3,
    /// 6.
    Six = 4,
    /// 7.
    Seven = 5,
    /// 8.
    Eight = 6,
    /// 9.
    Nine = 7,
    /// 10.
    Ten = 8,
    /// Jack.
    Jack = 9,
    /// Queen.
    Queen = 10,
    /// King.
    King = 11,
    /// Ace.
    Ace = 12,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank for an encoded index.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `index` is not in `0..13`.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        if (index as usize) < RANK_COUNT {
            Ok(Self::ALL[index as usize])
        } else {
            Err(CardError::InvalidRank(index))
        }
    }

    /// Returns the encoded index of the rank.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the display string of the rank (`"2"` .. `"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        RANK_NAMES[self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// A playing card, identified by an index in `0..52`.
///
/// The index is validated on construction, so decoding the suit and rank
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// All 52 cards in identifier order.
    pub const ALL: [Self; DECK_SIZE] = {
        let mut cards = [Self(0); DECK_SIZE];
        let mut i = 0;
        while i < DECK_SIZE {
            cards[i] = Self(i as u8);
            i += 1;
        }
        cards
    };

    /// Creates the card with the given suit and rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self(suit as u8 * RANK_COUNT as u8 + rank as u8)
    }

    /// Returns the card with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if `index` is not in `0..52`.
    ///
    /// # Example
    ///
    /// ```
    /// use deck52::{Card, Rank, Suit};
    ///
    /// let card = Card::from_index(51).unwrap();
    /// assert_eq!(card.suit(), Suit::Spades);
    /// assert_eq!(card.rank(), Rank::Ace);
    /// assert!(Card::from_index(52).is_err());
    /// ```
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        if (index as usize) < DECK_SIZE {
            Ok(Self(index))
        } else {
            Err(CardError::InvalidCard(index))
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANK_COUNT as u8) as usize]
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % RANK_COUNT as u8) as usize]
    }

    /// Iterates over all 52 cards in identifier order.
    #[must_use]
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn identity_decoding_covers_every_card() {
        for card in Card::all() {
            let rebuilt = card.suit().index() * RANK_COUNT as u8 + card.rank().index();
            assert_eq!(rebuilt, card.index());
            assert_eq!(Card::new(card.suit(), card.rank()), card);
            assert_eq!(u8::from(card), card.index());
        }
    }

    #[test]
    fn identity_ordering_starts_with_clubs() {
        let first = Card::from_index(0).unwrap();
        assert_eq!(first.suit(), Suit::Clubs);
        assert_eq!(first.rank(), Rank::Two);

        let ace_of_clubs = Card::from_index(12).unwrap();
        assert_eq!(ace_of_clubs.rank(), Rank::Ace);

        let two_of_diamonds = Card::from_index(13).unwrap();
        assert_eq!(two_of_diamonds.suit(), Suit::Diamonds);
        assert_eq!(two_of_diamonds.rank(), Rank::Two);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(Card::from_index(52), Err(CardError::InvalidCard(52)));
        assert_eq!(Card::try_from(255), Err(CardError::InvalidCard(255)));
        assert_eq!(Suit::from_index(4), Err(CardError::InvalidSuit(4)));
        assert_eq!(Rank::from_index(13), Err(CardError::InvalidRank(13)));
    }

    #[test]
    fn display_joins_rank_and_suit() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10\u{2665}");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A\u{2660}");
    }

    #[test]
    fn ranks_compare_aces_high() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Two < Rank::Three);
        assert_eq!(Rank::ALL.iter().max(), Some(&Rank::Ace));
    }
}
