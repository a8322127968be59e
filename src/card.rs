//! Card types and rank glyphs.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// The declaration order doubles as the tie-break order when sorting a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Joker cards.
    Joker,
    /// A card that must not be revealed.
    Hidden,
}

impl Suit {
    /// The four suits of a standard pack, in pack order.
    pub const STANDARD: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the symbol drawn in the corners of a card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Joker | Self::Hidden => '?',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King,
    /// 14 = Joker, 0 = hidden placeholder).
    pub rank: u8,
}

impl Card {
    /// Rank of an Ace.
    pub const ACE: u8 = 1;
    /// Rank of a Jack.
    pub const JACK: u8 = 11;
    /// Rank of a Queen.
    pub const QUEEN: u8 = 12;
    /// Rank of a King.
    pub const KING: u8 = 13;
    /// Rank of a Joker.
    pub const JOKER: u8 = 14;
    /// Rank of the hidden placeholder.
    pub const HIDDEN_RANK: u8 = 0;

    /// Placeholder shown in place of a concealed card.
    pub const HIDDEN: Self = Self::new(Suit::Hidden, Self::HIDDEN_RANK);

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::try_new`]
    /// to reject ranks that have no glyph.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a new card, rejecting ranks above [`Card::JOKER`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is greater than 14.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, CardError, Suit};
    ///
    /// assert!(Card::try_new(Suit::Hearts, 13).is_ok());
    /// assert_eq!(Card::try_new(Suit::Hearts, 15), Err(CardError::InvalidRank(15)));
    /// ```
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank > Self::JOKER {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(suit, rank))
    }

    /// Returns the value the card adds to a hand total.
    ///
    /// Ranks above 10 (face cards and the Joker) count 10. An Ace counts 1
    /// here; the extra 10 is handled by hand valuation.
    #[must_use]
    pub const fn value(self) -> u32 {
        if self.rank > 10 { 10 } else { self.rank as u32 }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == Self::ACE
    }

    /// Returns the five text rows of the card's box.
    #[must_use]
    pub fn rows(&self) -> [String; 5] {
        let symbol = self.suit.symbol();
        let face = if self.rank == 10 {
            String::from(" 10")
        } else {
            format!(" {} ", glyph(self.rank).unwrap_or("?"))
        };

        [
            String::from(" _____ "),
            format!("|{symbol}    |"),
            format!("| {face} |"),
            format!("|    {symbol}|"),
            String::from(" ‾‾‾‾‾ "),
        ]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Returns the glyph printed for a rank.
///
/// The Joker shares the Jack's glyph. Ranks outside 0..=14 have no glyph.
///
/// # Example
///
/// ```
/// use twentyone::card::glyph;
///
/// assert_eq!(glyph(1), Some("A"));
/// assert_eq!(glyph(10), Some("10"));
/// assert_eq!(glyph(14), Some("J"));
/// assert_eq!(glyph(0), Some("?"));
/// assert_eq!(glyph(15), None);
/// ```
#[must_use]
pub const fn glyph(rank: u8) -> Option<&'static str> {
    match rank {
        0 => Some("?"),
        1 => Some("A"),
        2 => Some("2"),
        3 => Some("3"),
        4 => Some("4"),
        5 => Some("5"),
        6 => Some("6"),
        7 => Some("7"),
        8 => Some("8"),
        9 => Some("9"),
        10 => Some("10"),
        11 | 14 => Some("J"),
        12 => Some("Q"),
        13 => Some("K"),
        _ => None,
    }
}

/// Number of cards in a standard pack, jokers excluded.
pub const DECK_SIZE: usize = 52;
