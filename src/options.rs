//! Table configuration options.

use core::time::Duration;

/// Starting bankroll of the player.
pub const DEFAULT_PLAYER_BANK: i64 = 800;
/// Starting bankroll of the dealer.
pub const DEFAULT_DEALER_BANK: i64 = 80_000;
/// Standard packs in the shoe.
pub const DEFAULT_PACKS: usize = 4;
/// Jokers added to each pack of the shoe.
pub const DEFAULT_JOKERS_PER_PACK: usize = 0;
/// Rounds played between full reshuffles of the shoe.
pub const DEFAULT_RESHUFFLE_INTERVAL: u32 = 3;
/// Pause before the dealer plays and between the dealer's draws.
pub const DEFAULT_DEALER_PAUSE: Duration = Duration::from_millis(1000);

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_packs(6)
///     .with_player_bank(1_000)
///     .with_reshuffle_interval(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Player's starting balance.
    pub player_bank: i64,
    /// Dealer's starting balance.
    pub dealer_bank: i64,
    /// Standard packs in the shoe.
    pub packs: usize,
    /// Jokers per pack in the shoe.
    pub jokers_per_pack: usize,
    /// The shoe is rebuilt and shuffled every this many rounds.
    /// 0 to disable reshuffling.
    pub reshuffle_interval: u32,
    /// Pause used for pacing the dealer's turn.
    pub dealer_pause: Duration,
    /// Whether the terminal is cleared between decisions.
    pub clear_screen: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            player_bank: DEFAULT_PLAYER_BANK,
            dealer_bank: DEFAULT_DEALER_BANK,
            packs: DEFAULT_PACKS,
            jokers_per_pack: DEFAULT_JOKERS_PER_PACK,
            reshuffle_interval: DEFAULT_RESHUFFLE_INTERVAL,
            dealer_pause: DEFAULT_DEALER_PAUSE,
            clear_screen: false,
        }
    }
}

impl TableOptions {
    /// Sets the player's starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_bank(250);
    /// assert_eq!(options.player_bank, 250);
    /// ```
    #[must_use]
    pub const fn with_player_bank(mut self, bank: i64) -> Self {
        self.player_bank = bank;
        self
    }

    /// Sets the dealer's starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_bank(500);
    /// assert_eq!(options.dealer_bank, 500);
    /// ```
    #[must_use]
    pub const fn with_dealer_bank(mut self, bank: i64) -> Self {
        self.dealer_bank = bank;
        self
    }

    /// Sets the number of standard packs in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_packs(2);
    /// assert_eq!(options.packs, 2);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: usize) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the number of jokers per pack.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_jokers_per_pack(2);
    /// assert_eq!(options.jokers_per_pack, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers_per_pack(mut self, jokers: usize) -> Self {
        self.jokers_per_pack = jokers;
        self
    }

    /// Sets how many rounds are played between reshuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_interval(0);
    /// assert_eq!(options.reshuffle_interval, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_interval(mut self, rounds: u32) -> Self {
        self.reshuffle_interval = rounds;
        self
    }

    /// Sets the dealer's pacing pause.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_pause(Duration::ZERO);
    /// assert_eq!(options.dealer_pause, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_dealer_pause(mut self, pause: Duration) -> Self {
        self.dealer_pause = pause;
        self
    }

    /// Sets whether the terminal is cleared between decisions.
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
