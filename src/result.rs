//! Round and session result types.

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The player's hand value.
    pub player_value: u32,
    /// The dealer's hand value.
    pub dealer_value: u32,
    /// Whether the winning side finished on exactly 21.
    pub blackjack: bool,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Player balance after settlement.
    pub player_balance: i64,
    /// Dealer balance after settlement.
    pub dealer_balance: i64,
}

impl RoundResult {
    /// Counts the hands with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: HandOutcome) -> usize {
        self.hands.iter().filter(|hand| hand.outcome == outcome).count()
    }
}

/// Running totals over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds settled.
    pub rounds: u32,
    /// Rounds voided because the shoe ran out.
    pub voided: u32,
    /// Player hands won.
    pub wins: u32,
    /// Player hands lost.
    pub losses: u32,
    /// Player hands pushed.
    pub pushes: u32,
    /// Player hands won on exactly 21.
    pub blackjacks: u32,
}

impl SessionStats {
    /// Adds a settled round.
    pub fn record(&mut self, round: &RoundResult) {
        self.rounds += 1;
        for hand in &round.hands {
            match hand.outcome {
                HandOutcome::Win => {
                    self.wins += 1;
                    if hand.blackjack {
                        self.blackjacks += 1;
                    }
                }
                HandOutcome::Lose => self.losses += 1,
                HandOutcome::Push => self.pushes += 1,
            }
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player ran out of money.
    Bankrupt,
    /// The player chose to stop.
    Quit,
}

/// Summary returned when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// How the session ended.
    pub end: SessionEnd,
    /// Final player balance.
    pub player_balance: i64,
    /// Final dealer balance.
    pub dealer_balance: i64,
    /// Session statistics.
    pub stats: SessionStats,
}
