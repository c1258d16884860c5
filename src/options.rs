//! Deck configuration options.

/// Configuration options for constructing a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deck52::DeckOptions;
///
/// let options = DeckOptions::default().with_auto_shuffle(false);
/// assert!(!options.auto_shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Whether the deck is shuffled as soon as it is constructed.
    /// When disabled the deck starts in identity order.
    pub auto_shuffle: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self { auto_shuffle: true }
    }
}

impl DeckOptions {
    /// Sets whether the deck is shuffled on construction.
    ///
    /// # Example
    ///
    /// ```
    /// use deck52::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_auto_shuffle(false);
    /// assert_eq!(options.auto_shuffle, false);
    /// ```
    #[must_use]
    pub const fn with_auto_shuffle(mut self, auto_shuffle: bool) -> Self {
        self.auto_shuffle = auto_shuffle;
        self
    }
}
