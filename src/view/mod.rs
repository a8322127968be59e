//! Presentation capabilities the engine drives.
//!
//! The engine never prints or reads on its own. It talks to a [`TableView`],
//! which only has to know how to show a line of text, read a line of input,
//! pause and clear. Everything else (hand rendering, yes/no questions,
//! validated prompts) is built on those four calls.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::InputError;
use crate::participant::Participant;

mod scripted;
#[cfg(feature = "std")]
mod terminal;

pub use scripted::ScriptedView;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use terminal::TerminalView;

/// Line printed between decisions.
pub const SEPARATOR: &str = "------------------------------";

/// Text front end for a table.
pub trait TableView {
    /// Shows a block of text.
    fn display(&mut self, text: &str);

    /// Shows `prompt` and reads one line of input, without the line ending.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] when no more input will arrive and
    /// [`InputError::Read`] when the input could not be read.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Waits to pace the dealer's play.
    fn pause(&mut self);

    /// Marks a break between decisions.
    fn clear(&mut self);

    /// Shows one hand of a participant with its possible totals.
    fn display_hand(&mut self, participant: &Participant, hand_index: usize) {
        let Some(hand) = participant.hand(hand_index) else {
            return;
        };

        let header = if participant.hand_count() > 1 {
            format!(
                "{} - Hand #{}/{}'s cards:",
                participant.id,
                hand_index + 1,
                participant.hand_count()
            )
        } else {
            format!("{}'s cards:", participant.id)
        };
        self.display(&header);

        let totals = hand
            .totals()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" OR ");
        self.display(&format!("Adds up to {totals}"));
        self.display(&hand.render());
    }

    /// Shows an opponent's visible card next to a concealed one.
    fn display_opponent_peek(&mut self, id: &str, visible: Card) {
        let shown: Deck = [visible, Card::HIDDEN].into_iter().collect();
        self.display(&format!("{id}'s cards"));
        self.display(&shown.render());
    }

    /// Asks a yes/no question until it gets a `y`, `yes`, `n` or `no`.
    ///
    /// # Errors
    ///
    /// Propagates [`TableView::read_line`] errors.
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, InputError> {
        let question = format!("{prompt} [y/n]: ");
        loop {
            match self.read_line(&question)?.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {}
            }
        }
    }

    /// Asks until the first character of the answer is one of `allowed`.
    ///
    /// Answers are compared in lowercase.
    ///
    /// # Errors
    ///
    /// Propagates [`TableView::read_line`] errors.
    fn ask_choice(&mut self, prompt: &str, allowed: &str) -> Result<char, InputError> {
        loop {
            let answer = self.read_line(prompt)?;
            let choice = answer
                .trim()
                .chars()
                .next()
                .map(|c| c.to_ascii_lowercase());
            if let Some(choice) = choice.filter(|c| allowed.contains(*c)) {
                return Ok(choice);
            }
        }
    }

    /// Asks until `validate` accepts the answer, showing each rejection.
    ///
    /// `validate` turns the raw answer into a value or a message explaining
    /// why it was refused. An empty message re-prompts silently.
    ///
    /// # Errors
    ///
    /// Propagates [`TableView::read_line`] errors.
    fn ask_validated<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, InputError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let answer = self.read_line(prompt)?;
            match validate(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(message) if message.is_empty() => {}
                Err(message) => self.display(&message),
            }
        }
    }

    /// Asks for a whole number inside `range`.
    ///
    /// # Errors
    ///
    /// Propagates [`TableView::read_line`] errors.
    fn ask_bounded(&mut self, prompt: &str, range: RangeInclusive<i64>) -> Result<i64, InputError> {
        self.ask_validated(prompt, |answer| {
            let value = answer
                .parse::<i64>()
                .map_err(|_| String::from("Please enter a number."))?;
            if range.contains(&value) {
                Ok(value)
            } else {
                Err(format!(
                    "Enter a number from {} to {}.",
                    range.start(),
                    range.end()
                ))
            }
        })
    }
}
