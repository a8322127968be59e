//! Terminal blackjack against the house.

use core::time::Duration;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use twentyone::options::{
    DEFAULT_DEALER_BANK, DEFAULT_JOKERS_PER_PACK, DEFAULT_PACKS, DEFAULT_PLAYER_BANK,
    DEFAULT_RESHUFFLE_INTERVAL,
};
use twentyone::view::{TableView, TerminalView};
use twentyone::{Game, InputError, RoundError, TableOptions};

#[derive(Parser)]
#[command(name = "twentyone", about = "Play blackjack against the dealer")]
struct Args {
    /// Player's starting balance
    #[arg(long, default_value_t = DEFAULT_PLAYER_BANK)]
    player_bank: i64,

    /// Dealer's starting balance
    #[arg(long, default_value_t = DEFAULT_DEALER_BANK)]
    dealer_bank: i64,

    /// Standard 52-card packs in the shoe
    #[arg(long, default_value_t = DEFAULT_PACKS)]
    packs: usize,

    /// Jokers added to each pack
    #[arg(long, default_value_t = DEFAULT_JOKERS_PER_PACK)]
    jokers: usize,

    /// Rounds between reshuffles (0 = never)
    #[arg(long, default_value_t = DEFAULT_RESHUFFLE_INTERVAL)]
    reshuffle_every: u32,

    /// Dealer pause in milliseconds
    #[arg(long, default_value_t = 1000)]
    pause_ms: u64,

    /// Clear the console between decisions
    #[arg(long)]
    clear: bool,

    /// Seed for the shuffle (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn options(&self) -> TableOptions {
        TableOptions::default()
            .with_player_bank(self.player_bank)
            .with_dealer_bank(self.dealer_bank)
            .with_packs(self.packs)
            .with_jokers_per_pack(self.jokers)
            .with_reshuffle_interval(self.reshuffle_every)
            .with_dealer_pause(Duration::from_millis(self.pause_ms))
            .with_clear_screen(self.clear)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("starting table with seed {seed}");

    let options = args.options();
    let mut view = TerminalView::from_options(&options);
    let mut game = Game::new(options, seed);

    match game.play(&mut view) {
        Ok(summary) => {
            log::info!("session ended: {:?}", summary.end);
            ExitCode::SUCCESS
        }
        Err(RoundError::Input(InputError::Closed)) => {
            view.display("Goodbye.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("session failed: {err}");
            ExitCode::FAILURE
        }
    }
}
