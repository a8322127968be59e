use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::InputError;

use super::{SEPARATOR, TableView};

/// A view that replays canned answers and records everything shown.
///
/// Prompts are recorded alongside displayed text. Running out of answers
/// reports [`InputError::Closed`]. Pauses return immediately.
///
/// # Example
///
/// ```
/// use twentyone::view::{ScriptedView, TableView};
///
/// let mut view = ScriptedView::new(["maybe", "y"]);
/// assert_eq!(view.ask_yes_no("Continue Playing?"), Ok(true));
/// assert!(view.ask_yes_no("Again?").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedView {
    inputs: VecDeque<String>,
    output: Vec<String>,
    pauses: usize,
}

impl ScriptedView {
    /// Creates a view that answers prompts with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            pauses: 0,
        }
    }

    /// Queues another answer.
    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    /// Returns the answers not consumed yet.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Returns every block displayed and every prompt shown, in order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns whether any recorded block contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|block| block.contains(needle))
    }

    /// Returns the number of pauses requested.
    #[must_use]
    pub const fn pauses(&self) -> usize {
        self.pauses
    }
}

impl TableView for ScriptedView {
    fn display(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.output.push(prompt.to_string());
        self.inputs.pop_front().ok_or(InputError::Closed)
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn clear(&mut self) {
        self.output.push(SEPARATOR.to_string());
    }
}
