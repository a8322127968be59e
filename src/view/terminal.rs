use std::io::{self, BufRead, Write};
use std::thread;

use alloc::string::String;
use core::time::Duration;

use crate::error::InputError;
use crate::options::TableOptions;

use super::{SEPARATOR, TableView};

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// A view on standard input and output.
#[derive(Debug, Clone)]
pub struct TerminalView {
    pause: Duration,
    clear_screen: bool,
}

impl TerminalView {
    /// Creates a terminal view.
    #[must_use]
    pub const fn new(pause: Duration, clear_screen: bool) -> Self {
        Self {
            pause,
            clear_screen,
        }
    }

    /// Creates a terminal view using the pacing and clearing of `options`.
    #[must_use]
    pub const fn from_options(options: &TableOptions) -> Self {
        Self::new(options.dealer_pause, options.clear_screen)
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::from_options(&TableOptions::default())
    }
}

impl TableView for TerminalView {
    fn display(&mut self, text: &str) {
        println!("{text}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(input.trim_end_matches(['\r', '\n']).into()),
            Err(err) => {
                log::warn!("failed to read from stdin: {err}");
                Err(InputError::Read)
            }
        }
    }

    fn pause(&mut self) {
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
    }

    fn clear(&mut self) {
        println!("{SEPARATOR}");
        if self.clear_screen {
            print!("{CLEAR_SCREEN}");
            let _ = io::stdout().flush();
        }
    }
}
