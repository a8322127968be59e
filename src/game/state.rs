//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round in progress.
    WaitingForRound,
    /// Accepting the bid for the round.
    Betting,
    /// Dealing the opening cards.
    Dealing,
    /// Waiting for the player's decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are compared and bets paid.
    Settlement,
    /// Round has been settled.
    RoundOver,
}
