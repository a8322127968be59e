//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow against
//! a fixed-policy dealer: betting, dealing, the player's hit/stand/split
//! decisions, the dealer's draws, and settlement across split hands. All
//! input and output goes through a [`TableView`](view::TableView).
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, TableOptions};
//! use twentyone::view::ScriptedView;
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! let mut view = ScriptedView::new(["50", "s"]);
//! let result = game.play_round(&mut view).unwrap();
//! assert_eq!(result.hands.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shuffle;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, CardError, DeckError, InputError, RoundError};
pub use game::{Decision, Game, GameState};
pub use hand::{Evaluation, Hand, WIN_TOTAL};
pub use options::TableOptions;
pub use participant::Participant;
pub use result::{HandOutcome, HandResult, RoundResult, SessionEnd, SessionStats, SessionSummary};
