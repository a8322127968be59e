//! Hand valuation.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;

/// A participant's cards. Hands are plain decks built up one card at a time.
pub type Hand = Deck;

/// Highest total that does not bust.
pub const WIN_TOTAL: u32 = 21;

/// Total at which a hard dealer hand stops drawing.
pub const DEALER_STAND_TOTAL: u32 = 17;

/// Extra value of an Ace counted high.
const ACE_BONUS: u32 = 10;

/// Returns every total a sequence of cards can reach, ascending and distinct.
///
/// Each Ace contributes 1 to every running total and opens one more total
/// with the Ace counted as 11.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Suit, hand::totals};
///
/// let cards = [Card::new(Suit::Clubs, 5), Card::new(Suit::Spades, 1)];
/// assert_eq!(totals(&cards), vec![6, 16]);
/// ```
pub fn totals<'a, I>(cards: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut running = vec![0_u32];

    for card in cards {
        for total in &mut running {
            *total += card.value();
        }
        if card.is_ace() {
            let last = running.last().copied().unwrap_or_default();
            running.push(last + ACE_BONUS);
        }
    }

    running.sort_unstable();
    running.dedup();
    running
}

/// The best total of a hand and the total just below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Largest total not above 21, or the smallest total when every one busts.
    pub best: u32,
    /// The total preceding `best` in ascending order, if any.
    pub second_best: Option<u32>,
}

impl Evaluation {
    /// Returns whether the best total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.best > WIN_TOTAL
    }

    /// Returns whether the hand is soft for the dealer's drawing rule.
    ///
    /// A hand is soft when the total just below the best one is under 17.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.second_best.is_some_and(|total| total < DEALER_STAND_TOTAL)
    }
}

/// Picks the best total from a sequence of cards.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Suit, hand::evaluate};
///
/// let cards = [
///     Card::new(Suit::Clubs, 5),
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Clubs, 10),
/// ];
/// let evaluation = evaluate(&cards);
/// assert_eq!(evaluation.best, 16);
/// assert_eq!(evaluation.second_best, None);
/// ```
pub fn evaluate<'a, I>(cards: I) -> Evaluation
where
    I: IntoIterator<Item = &'a Card>,
{
    let totals = totals(cards);
    let best_index = totals
        .iter()
        .rposition(|&total| total <= WIN_TOTAL)
        .unwrap_or(0);

    Evaluation {
        best: totals[best_index],
        second_best: best_index.checked_sub(1).map(|index| totals[index]),
    }
}

impl Deck {
    /// Returns every total this hand can reach.
    #[must_use]
    pub fn totals(&self) -> Vec<u32> {
        totals(self.iter())
    }

    /// Evaluates this hand.
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        evaluate(self.iter())
    }

    /// Returns the best total of this hand.
    #[must_use]
    pub fn best(&self) -> u32 {
        self.evaluate().best
    }

    /// Returns whether this hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.evaluate().is_bust()
    }

    /// Returns whether this hand holds two cards of equal value.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        match (self.get(0), self.get(1)) {
            (Some(first), Some(second)) => self.count() == 2 && first.value() == second.value(),
            _ => false,
        }
    }
}
