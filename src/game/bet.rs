use alloc::format;
use alloc::string::{String, ToString};

use crate::error::{BetError, DeckError, RoundError};
use crate::view::TableView;

use super::{Game, GameState};

/// Checks a bid against the player's balance.
const fn validate_bid(amount: i64, balance: i64) -> Result<(), BetError> {
    if amount <= 0 {
        return Err(BetError::ZeroBet);
    }
    if amount > balance {
        return Err(BetError::InsufficientFunds);
    }
    Ok(())
}

impl Game {
    /// Asks the player for a bid and places it for both sides.
    ///
    /// Non-numeric answers, bids of $0 or less and bids above the player's
    /// balance are re-prompted. A bid the dealer cannot cover is accepted
    /// with a warning.
    ///
    /// Returns the accepted bid.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the view runs
    /// out of input.
    pub fn take_bets<V: TableView>(&mut self, view: &mut V) -> Result<i64, RoundError> {
        self.expect_state(GameState::Betting)?;

        let balance = self.player.balance;
        let bid = view.ask_validated("How much would you like to bid?\n > ", |answer| {
            let amount = answer
                .parse::<i64>()
                .map_err(|_| String::from("Please enter a number."))?;
            validate_bid(amount, balance).map_err(|err| err.to_string())?;
            Ok(amount)
        })?;

        if bid > self.dealer.balance {
            view.display("The Dealer Does Not Have Enough Funds To Support That Bid.");
        }

        self.place_bets(bid)?;
        view.display(&format!(
            "Your Balance: ${} | Your Bid: ${}",
            self.player.balance, self.player.bid
        ));

        Ok(bid)
    }

    /// Places `amount` for the player and the dealer and clears both sides'
    /// hands.
    ///
    /// The dealer is allowed to stake more than it holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the bid is not
    /// positive, or the player lacks funds.
    pub fn place_bets(&mut self, amount: i64) -> Result<(), RoundError> {
        self.expect_state(GameState::Betting)?;
        validate_bid(amount, self.player.balance)?;

        self.player.place_bet(amount);
        self.dealer.place_bet(amount);
        self.player.reset_hands();
        self.dealer.reset_hands();

        log::debug!("bid of {amount} placed");
        self.state = GameState::Dealing;
        Ok(())
    }

    /// Deals two cards each to the player and the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or the shoe holds
    /// fewer than four cards.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.expect_state(GameState::Dealing)?;

        let mut piles = self.shoe.deal(2, Some(2))?.into_iter();
        let (Some(player_cards), Some(dealer_cards)) = (piles.next(), piles.next()) else {
            return Err(DeckError::Empty.into());
        };

        self.player.merge_into(0, &player_cards)?;
        self.dealer.merge_into(0, &dealer_cards)?;

        log::debug!("dealt, {} cards left in the shoe", self.shoe.count());
        self.state = GameState::PlayerTurn;
        Ok(())
    }
}
