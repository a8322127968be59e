//! Player and dealer state.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{Evaluation, Hand};

/// A seat at the table: the human player or the dealer.
///
/// Balances are signed. The participant never refuses a bet; a balance at or
/// below zero is how the caller learns the session is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Name shown next to this participant's cards.
    pub id: String,
    /// Money available to bet.
    pub balance: i64,
    /// Stake placed this round, shared by every hand.
    pub bid: i64,
    /// Hands in play order.
    hands: Vec<Hand>,
}

impl Participant {
    /// Creates a participant holding a single empty hand.
    #[must_use]
    pub fn new(id: impl Into<String>, balance: i64) -> Self {
        Self {
            id: id.into(),
            balance,
            bid: 0,
            hands: vec![Hand::empty()],
        }
    }

    /// Stakes `amount`.
    pub const fn place_bet(&mut self, amount: i64) {
        self.balance -= amount;
        self.bid = amount;
    }

    /// Returns the stake after a tie.
    pub const fn return_bet(&mut self) {
        self.balance += self.bid;
    }

    /// Returns the stake plus an equal win.
    pub const fn collect_win(&mut self) {
        self.balance += self.bid * 2;
    }

    /// Collects a win for every hand that is not bust.
    ///
    /// Returns the number of hands paid.
    pub fn collect_all_wins(&mut self) -> usize {
        let surviving = self.hands.iter().filter(|hand| !hand.is_bust()).count();
        for _ in 0..surviving {
            self.collect_win();
        }
        surviving
    }

    /// Drops every hand and starts over with one empty hand.
    pub fn reset_hands(&mut self) {
        self.hands = vec![Hand::empty()];
    }

    /// Returns the hands in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at `hand_index`.
    #[must_use]
    pub fn hand(&self, hand_index: usize) -> Option<&Hand> {
        self.hands.get(hand_index)
    }

    /// Returns the number of hands.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Adds a card to the bottom of a hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] for an unknown index.
    pub fn add_card(&mut self, hand_index: usize, card: Card) -> Result<(), ActionError> {
        self.hands
            .get_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?
            .add(card);
        Ok(())
    }

    /// Adds every card of `deck` to a hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] for an unknown index.
    pub fn merge_into(&mut self, hand_index: usize, deck: &Deck) -> Result<(), ActionError> {
        self.hands
            .get_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?
            .merge_deck(deck);
        Ok(())
    }

    /// Evaluates a hand.
    #[must_use]
    pub fn evaluate(&self, hand_index: usize) -> Option<Evaluation> {
        self.hand(hand_index).map(Hand::evaluate)
    }

    /// Returns whether a hand is bust. Unknown hands are not bust.
    #[must_use]
    pub fn is_bust(&self, hand_index: usize) -> bool {
        self.hand(hand_index).is_some_and(Hand::is_bust)
    }

    /// Returns whether every hand is bust.
    #[must_use]
    pub fn all_bust(&self) -> bool {
        self.hands.iter().all(Hand::is_bust)
    }

    /// Returns the highest best total among hands that are not bust, or 0.
    #[must_use]
    pub fn best_surviving_total(&self) -> u32 {
        self.hands
            .iter()
            .map(Hand::evaluate)
            .filter(|evaluation| !evaluation.is_bust())
            .map(|evaluation| evaluation.best)
            .max()
            .unwrap_or(0)
    }

    /// Returns whether a hand holds exactly two cards of equal value.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Participant, Suit};
    ///
    /// let mut player = Participant::new("Player", 100);
    /// player.add_card(0, Card::new(Suit::Hearts, 8)).unwrap();
    /// player.add_card(0, Card::new(Suit::Spades, 8)).unwrap();
    /// assert!(player.can_split(0));
    /// ```
    #[must_use]
    pub fn can_split(&self, hand_index: usize) -> bool {
        self.hand(hand_index).is_some_and(Hand::is_pair)
    }

    /// Splits a two-card hand into two one-card hands.
    ///
    /// Stakes the current bid again, removes the hand and appends one hand per
    /// card, bottom card first. Returns the indices of the new hands. Funds
    /// and card values are the caller's to check.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] for an unknown index and
    /// [`ActionError::CannotSplit`] if the hand does not hold exactly two
    /// cards. Nothing changes on error.
    pub fn split(&mut self, hand_index: usize) -> Result<(usize, usize), ActionError> {
        let hand = self.hand(hand_index).ok_or(ActionError::HandNotFound)?;
        let (Some(first), Some(second), 2) = (hand.get(0), hand.get(1), hand.count()) else {
            return Err(ActionError::CannotSplit);
        };

        self.place_bet(self.bid);
        self.hands.remove(hand_index);

        self.hands.push(core::iter::once(first).collect());
        self.hands.push(core::iter::once(second).collect());

        let last = self.hands.len() - 1;
        Ok((last - 1, last))
    }
}
