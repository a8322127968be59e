//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank has no glyph and no value.
    #[error("invalid card rank {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when drawing from or dealing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// Asked to deal to zero recipients.
    #[error("cannot deal to zero recipients")]
    NoRecipients,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero or negative.
    #[error("bid must be greater than $0")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur while reading user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input stream was closed.
    #[error("input stream closed")]
    Closed,
    /// The input stream could not be read.
    #[error("failed to read input")]
    Read,
}

/// Errors that can end a round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this phase.
    #[error("invalid game state for this phase")]
    InvalidState,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A hand operation failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// A bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The view could not supply input.
    #[error(transparent)]
    Input(#[from] InputError),
}
