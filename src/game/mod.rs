//! Round engine and session loop.

use alloc::format;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::TableOptions;
use crate::participant::Participant;
use crate::result::{RoundResult, SessionEnd, SessionStats, SessionSummary};
use crate::view::TableView;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Decision;
pub use state::GameState;

/// Name shown for the human player.
pub const PLAYER_ID: &str = "Player";
/// Name shown for the dealer.
pub const DEALER_ID: &str = "Dealer";

/// Balances and bids captured before a round, restored if it is voided.
#[derive(Debug, Clone, Copy)]
struct Stakes {
    player_balance: i64,
    player_bid: i64,
    dealer_balance: i64,
    dealer_bid: i64,
}

/// A blackjack table: one player, one dealer and a shared shoe.
///
/// Rounds run as a fixed sequence of phases, each exposed as a method that
/// checks the current [`GameState`]. [`Game::play_round`] runs them all and
/// [`Game::play`] loops rounds until the player quits or goes broke.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards both participants draw from.
    pub shoe: Deck,
    /// Table options.
    pub options: TableOptions,
    /// The human player.
    pub player: Participant,
    /// The dealer.
    pub dealer: Participant,
    /// Current round phase.
    state: GameState,
    /// Rounds started so far.
    rounds_played: u32,
    /// Session totals.
    stats: SessionStats,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 4 * 52);
    /// assert_eq!(game.player.balance, 800);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Self::create_shoe(&options, &mut rng);

        Self {
            shoe,
            player: Participant::new(PLAYER_ID, options.player_bank),
            dealer: Participant::new(DEALER_ID, options.dealer_bank),
            options,
            state: GameState::WaitingForRound,
            rounds_played: 0,
            stats: SessionStats::default(),
            rng,
        }
    }

    /// Builds and shuffles a shoe.
    fn create_shoe(options: &TableOptions, rng: &mut ChaCha8Rng) -> Deck {
        let mut shoe = Deck::new(options.packs, options.jokers_per_pack);
        shoe.shuffle(rng);
        shoe
    }

    /// Rebuilds and shuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), RoundError> {
        if !self.between_rounds() {
            return Err(RoundError::InvalidState);
        }
        self.shoe = Self::create_shoe(&self.options, &mut self.rng);
        log::debug!("shoe rebuilt with {} cards", self.shoe.count());
        Ok(())
    }

    /// Returns whether the next round starts on a fresh shoe.
    ///
    /// Always `false` before the first round or when the reshuffle interval
    /// is 0.
    #[must_use]
    pub const fn needs_reshuffle(&self) -> bool {
        let interval = self.options.reshuffle_interval;
        interval != 0 && self.rounds_played != 0 && self.rounds_played % interval == 0
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.count()
    }

    const fn between_rounds(&self) -> bool {
        matches!(self.state, GameState::WaitingForRound | GameState::RoundOver)
    }

    fn expect_state(&self, expected: GameState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    /// Opens a round, reshuffling the shoe when the interval is reached.
    ///
    /// Returns whether the shoe was reshuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round<V: TableView>(&mut self, view: &mut V) -> Result<bool, RoundError> {
        if !self.between_rounds() {
            return Err(RoundError::InvalidState);
        }

        let reshuffled = self.needs_reshuffle();
        if reshuffled {
            self.reshuffle()?;
            view.display("Shuffling a fresh shoe.");
        }

        self.rounds_played += 1;
        log::debug!(
            "round {} starts with {} cards in the shoe",
            self.rounds_played,
            self.shoe.count()
        );

        view.display(&format!("Your Balance: ${}", self.player.balance));
        view.display("==========================================");
        self.state = GameState::Betting;
        Ok(reshuffled)
    }

    /// Plays one full round: betting, dealing, both turns and settlement.
    ///
    /// If the round fails part way (most often because the shoe ran out),
    /// it is voided: balances and bids are restored, hands are cleared and,
    /// for an empty shoe, the shoe is rebuilt. The error is still returned.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the round.
    pub fn play_round<V: TableView>(&mut self, view: &mut V) -> Result<RoundResult, RoundError> {
        let stakes = Stakes {
            player_balance: self.player.balance,
            player_bid: self.player.bid,
            dealer_balance: self.dealer.balance,
            dealer_bid: self.dealer.bid,
        };

        let result = self.run_round(view);
        match &result {
            Err(err) if *err != RoundError::InvalidState => self.void_round(stakes, *err),
            _ => {}
        }
        result
    }

    fn run_round<V: TableView>(&mut self, view: &mut V) -> Result<RoundResult, RoundError> {
        self.start_round(view)?;
        self.take_bets(view)?;
        self.deal()?;
        self.play_player_hands(view)?;
        self.dealer_play(view)?;
        self.settle(view)
    }

    fn void_round(&mut self, stakes: Stakes, err: RoundError) {
        log::warn!("round {} voided: {err}", self.rounds_played);

        self.player.balance = stakes.player_balance;
        self.player.bid = stakes.player_bid;
        self.dealer.balance = stakes.dealer_balance;
        self.dealer.bid = stakes.dealer_bid;
        self.player.reset_hands();
        self.dealer.reset_hands();
        self.stats.voided += 1;
        self.state = GameState::RoundOver;

        if matches!(err, RoundError::Deck(_)) {
            self.shoe = Self::create_shoe(&self.options, &mut self.rng);
        }
    }

    /// Plays rounds until the player is bankrupt or declines to continue.
    ///
    /// A round voided by an empty shoe is reported and play continues.
    ///
    /// # Errors
    ///
    /// Returns any other error that stops a round, such as closed input.
    pub fn play<V: TableView>(&mut self, view: &mut V) -> Result<SessionSummary, RoundError> {
        view.display("Welcome to Black Jack!");

        loop {
            match self.play_round(view) {
                Ok(_) => {}
                Err(RoundError::Deck(err)) => {
                    view.display(&format!("Round voided, bets returned: {err}."));
                }
                Err(err) => return Err(err),
            }

            if self.player.balance <= 0 {
                return Ok(self.end_session(view, SessionEnd::Bankrupt));
            }

            if !view.ask_yes_no("Continue Playing?")? {
                return Ok(self.end_session(view, SessionEnd::Quit));
            }
            view.clear();
        }
    }

    fn end_session<V: TableView>(&self, view: &mut V, end: SessionEnd) -> SessionSummary {
        let stats = self.stats;
        view.display(&format!(
            "Final Balance: ${} Dealer Balance: ${}",
            self.player.balance, self.dealer.balance
        ));
        view.display(&format!(
            "Rounds: {} | Won: {} | Lost: {} | Tied: {} | 21s: {} | Voided: {}",
            stats.rounds, stats.wins, stats.losses, stats.pushes, stats.blackjacks, stats.voided
        ));

        match end {
            SessionEnd::Bankrupt => {
                view.display("You've been bankrupted!");
                view.display("You can no longer play in this process :(");
            }
            SessionEnd::Quit => {
                view.display("Thanks for playing!");
                view.display("See you next time!");
            }
        }

        SessionSummary {
            end,
            player_balance: self.player.balance,
            dealer_balance: self.dealer.balance,
            stats,
        }
    }
}
