use alloc::format;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, RoundError};
use crate::hand::{DEALER_STAND_TOTAL, WIN_TOTAL};
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::view::TableView;

use super::{Game, GameState};

impl Game {
    /// Returns whether the dealer draws another card.
    ///
    /// The dealer only draws while the player still has a live hand and
    /// the dealer is behind the player's best live total. Within that, it
    /// draws below 17 and on any soft hand.
    #[must_use]
    pub fn dealer_should_hit(&self) -> bool {
        let Some(dealer) = self.dealer.evaluate(0) else {
            return false;
        };

        !self.player.all_bust()
            && dealer.best < self.player.best_surviving_total()
            && (dealer.best < DEALER_STAND_TOTAL || dealer.is_soft())
    }

    /// Dealer plays their hand by the fixed drawing rule.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play<V: TableView>(&mut self, view: &mut V) -> Result<Vec<Card>, RoundError> {
        self.expect_state(GameState::DealerTurn)?;

        let mut drawn = Vec::new();
        while self.dealer_should_hit() {
            view.clear();
            view.display("Dealer hits!");

            let card = self.shoe.draw()?;
            self.dealer.add_card(0, card)?;
            drawn.push(card);
            log::debug!("dealer draws {card:?}");
            view.display_hand(&self.dealer, 0);

            // A bust dealer has nothing left to announce.
            if self.dealer.is_bust(0) {
                self.state = GameState::Settlement;
                return Ok(drawn);
            }
            view.pause();
        }

        let total = self.dealer.evaluate(0).map_or(0, |evaluation| evaluation.best);
        view.display(&format!("Dealer decides to stay at {total}!"));

        self.state = GameState::Settlement;
        Ok(drawn)
    }

    /// Compares every player hand to the dealer's and pays out.
    ///
    /// When the dealer stands, every hand the player busted pays the dealer
    /// again, on top of the payment taken when it busted. A dealer bust pays
    /// each surviving player hand and leaves bust hands alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn settle<V: TableView>(&mut self, view: &mut V) -> Result<RoundResult, RoundError> {
        self.expect_state(GameState::Settlement)?;

        view.clear();
        view.display_hand(&self.dealer, 0);

        let dealer = self.dealer.evaluate(0).ok_or(ActionError::HandNotFound)?;
        let dealer_value = dealer.best;
        let mut hands = Vec::with_capacity(self.player.hand_count());

        if dealer.is_bust() {
            view.display("Dealer Bust! Player Wins!");
            let paid = self.player.collect_all_wins();
            log::debug!("dealer bust, {paid} hand(s) paid");

            for (hand_index, hand) in self.player.hands().iter().enumerate() {
                let player = hand.evaluate();
                let outcome = if player.is_bust() {
                    HandOutcome::Lose
                } else {
                    HandOutcome::Win
                };
                hands.push(HandResult {
                    hand_index,
                    outcome,
                    player_value: player.best,
                    dealer_value,
                    blackjack: outcome == HandOutcome::Win && player.best == WIN_TOTAL,
                });
            }
        } else {
            for hand_index in 0..self.player.hand_count() {
                hands.push(self.settle_hand(view, hand_index, dealer_value)?);
            }
        }

        let result = RoundResult {
            hands,
            dealer_value,
            dealer_bust: dealer.is_bust(),
            player_balance: self.player.balance,
            dealer_balance: self.dealer.balance,
        };
        self.stats.record(&result);

        self.player.bid = 0;
        view.display(&format!(
            "Your Balance: ${} | Your Bid: ${}",
            self.player.balance, self.player.bid
        ));

        self.state = GameState::RoundOver;
        Ok(result)
    }

    /// Settles one player hand against a dealer that did not bust.
    fn settle_hand<V: TableView>(
        &mut self,
        view: &mut V,
        hand_index: usize,
        dealer_value: u32,
    ) -> Result<HandResult, RoundError> {
        let player = self
            .player
            .evaluate(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        let player_value = player.best;
        view.display_hand(&self.player, hand_index);

        let (outcome, blackjack) = if player.is_bust() {
            view.display("Player Bust - Dealer Wins!");
            self.dealer.collect_win();
            (HandOutcome::Lose, false)
        } else if dealer_value > player_value {
            let blackjack = dealer_value == WIN_TOTAL;
            if blackjack {
                view.display("Dealer got BlackJack! You Did Not! They Win!");
            } else {
                view.display("Dealer was closer to BlackJack - Dealer Wins!");
            }
            self.dealer.collect_win();
            (HandOutcome::Lose, blackjack)
        } else if dealer_value < player_value {
            let blackjack = player_value == WIN_TOTAL;
            if blackjack {
                view.display("Player got BlackJack! Dealer Did Not! You Win!");
            } else {
                view.display("Player was closer to BlackJack - Player Wins!");
            }
            self.player.collect_win();
            (HandOutcome::Win, blackjack)
        } else {
            view.display("Tie!");
            self.player.return_bet();
            self.dealer.return_bet();
            (HandOutcome::Push, false)
        };

        log::debug!("hand {hand_index}: {player_value} vs {dealer_value}, {outcome:?}");

        Ok(HandResult {
            hand_index,
            outcome,
            player_value,
            dealer_value,
            blackjack,
        })
    }
}
