//! Ordered card piles: the shoe and every hand.

use alloc::collections::{VecDeque, vec_deque};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::card::{Card, Suit};
use crate::error::DeckError;
use crate::shuffle::shuffled;

/// Cards drawn side by side in one rendered row.
const CARDS_PER_ROW: usize = 4;

/// An ordered pile of cards.
///
/// The sequence runs from bottom to top: cards are drawn from the end and
/// added at the start. Indexing, iteration and rendering all follow the
/// sequence, so a hand built by adding cards lists its newest card first and
/// keeps the first card it received on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Number of standard packs restored by [`Deck::reset`].
    packs: usize,
    /// Jokers added per pack by [`Deck::reset`].
    jokers_per_pack: usize,
    /// Cards, back = top.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Default number of packs for a standalone deck.
    pub const DEFAULT_PACKS: usize = 1;
    /// Default number of jokers per pack.
    pub const DEFAULT_JOKERS_PER_PACK: usize = 0;

    /// Creates a deck of `packs` standard packs with `jokers_per_pack` jokers
    /// each, in reset order.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Deck;
    ///
    /// assert_eq!(Deck::new(1, 0).count(), 52);
    /// assert_eq!(Deck::new(1, 4).count(), 56);
    /// assert_eq!(Deck::new(0, 0).count(), 0);
    /// ```
    #[must_use]
    pub fn new(packs: usize, jokers_per_pack: usize) -> Self {
        let mut deck = Self {
            packs,
            jokers_per_pack,
            cards: VecDeque::new(),
        };
        deck.reset();
        deck
    }

    /// Creates an empty deck, used for hands and dealt piles.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            packs: 0,
            jokers_per_pack: 0,
            cards: VecDeque::new(),
        }
    }

    /// Rebuilds the full sequence of cards.
    ///
    /// Each pack contributes the four standard suits in order, Ace to King
    /// within a suit. Jokers follow all packs, so they sit on top.
    pub fn reset(&mut self) {
        let capacity = self.packs * (crate::card::DECK_SIZE + self.jokers_per_pack);
        let mut cards = VecDeque::with_capacity(capacity);

        for _ in 0..self.packs {
            for suit in Suit::STANDARD {
                for rank in Card::ACE..=Card::KING {
                    cards.push_back(Card::new(suit, rank));
                }
            }
        }

        for _ in 0..self.packs * self.jokers_per_pack {
            cards.push_back(Card::new(Suit::Joker, Card::JOKER));
        }

        self.cards = cards;
    }

    /// Replaces the cards with a random permutation of themselves.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let permuted = shuffled(self.cards.make_contiguous(), rng);
        self.cards = VecDeque::from(permuted);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::new(1, 0);
    /// assert_eq!(deck.draw(), Ok(Card::new(Suit::Spades, Card::KING)));
    /// assert_eq!(deck.count(), 51);
    /// ```
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_back().ok_or(DeckError::Empty)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn peek(&self) -> Result<Card, DeckError> {
        self.cards.back().copied().ok_or(DeckError::Empty)
    }

    /// Adds a card to the bottom.
    pub fn add(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Adds cards to the bottom as a block, keeping their order.
    pub fn merge(&mut self, cards: &[Card]) {
        for card in cards.iter().rev() {
            self.cards.push_front(*card);
        }
    }

    /// Adds every card of `other` to the bottom, keeping its order.
    pub fn merge_deck(&mut self, other: &Self) {
        for card in other.cards.iter().rev() {
            self.cards.push_front(*card);
        }
    }

    /// Deals the deck out to `recipients` new piles, one card at a time.
    ///
    /// With `size_per_recipient`, each pile receives exactly that many cards.
    /// Without it the whole deck is distributed: every pile gets
    /// `count / recipients` cards and the first `count % recipients` piles
    /// get one more.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NoRecipients`] if `recipients` is zero, or
    /// [`DeckError::Empty`] if the deck holds fewer than
    /// `recipients * size_per_recipient` cards. No card moves on error.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Deck;
    ///
    /// let mut deck = Deck::new(1, 0);
    /// let piles = deck.deal(4, None).unwrap();
    /// assert!(piles.iter().all(|pile| pile.count() == 13));
    /// assert!(deck.is_empty());
    /// ```
    pub fn deal(
        &mut self,
        recipients: usize,
        size_per_recipient: Option<usize>,
    ) -> Result<Vec<Self>, DeckError> {
        if recipients == 0 {
            return Err(DeckError::NoRecipients);
        }

        let (rounds, leftover) = match size_per_recipient {
            Some(size) => {
                if size.saturating_mul(recipients) > self.count() {
                    return Err(DeckError::Empty);
                }
                (size, 0)
            }
            None => (self.count() / recipients, self.count() % recipients),
        };

        let mut piles: Vec<Self> = (0..recipients).map(|_| Self::empty()).collect();

        for _ in 0..rounds {
            for pile in &mut piles {
                pile.add(self.draw()?);
            }
        }

        for pile in piles.iter_mut().take(leftover) {
            pile.add(self.draw()?);
        }

        Ok(piles)
    }

    /// Sorts ascending by rank, breaking ties by suit order.
    pub fn sort(&mut self) {
        self.cards
            .make_contiguous()
            .sort_by_key(|card| (card.rank, card.suit));
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns a copy of the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns the card at `index`, counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Renders the cards as boxes, four per row.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let cards = self.cards();

        for chunk in cards.chunks(CARDS_PER_ROW) {
            let mut lines: [String; 5] = Default::default();
            for card in chunk {
                for (line, row) in lines.iter_mut().zip(card.rows()) {
                    line.push_str(&row);
                }
            }
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
        }

        out
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PACKS, Self::DEFAULT_JOKERS_PER_PACK)
    }
}

impl FromIterator<Card> for Deck {
    /// Collects cards into an empty-configured deck; the last card is the top.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut deck = Self::empty();
        deck.cards.extend(iter);
        deck
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
