use alloc::format;
use alloc::vec;

use crate::error::{ActionError, RoundError};
use crate::view::TableView;

use super::{Game, GameState};

/// A choice the player makes for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Turn a pair into two hands.
    Split,
}

impl Decision {
    /// Maps a key to a decision: `h` hit, `s` stand, `p` split.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'h' => Some(Self::Hit),
            's' => Some(Self::Stand),
            'p' => Some(Self::Split),
            _ => None,
        }
    }
}

impl Game {
    /// Runs the player's decisions for every hand, splits included.
    ///
    /// Hands are visited from an explicit stack. A split pushes its two new
    /// hands so that both are finished, first one first, before any hand
    /// that was already waiting.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the shoe
    /// runs out, or the view runs out of input.
    pub fn play_player_hands<V: TableView>(&mut self, view: &mut V) -> Result<(), RoundError> {
        self.expect_state(GameState::PlayerTurn)?;

        let mut pending = vec![0_usize];
        while let Some(hand_index) = pending.pop() {
            let Some((first, second)) = self.play_hand(view, hand_index)? else {
                continue;
            };

            // The split hand was removed, so later hands moved down one slot.
            for index in &mut pending {
                if *index > hand_index {
                    *index -= 1;
                }
            }
            pending.push(second);
            pending.push(first);
        }

        view.pause();
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Plays a single hand until it stands, busts or splits.
    ///
    /// Returns the indices of the new hands after a split.
    fn play_hand<V: TableView>(
        &mut self,
        view: &mut V,
        hand_index: usize,
    ) -> Result<Option<(usize, usize)>, RoundError> {
        let mut notice = None;
        loop {
            // Hands receive cards at the bottom, so the top card is the first one dealt.
            let up_card = self
                .dealer
                .hand(0)
                .ok_or(ActionError::HandNotFound)?
                .peek()?;

            view.clear();
            view.display_opponent_peek(&self.dealer.id, up_card);
            view.display_hand(&self.player, hand_index);
            view.display(&format!(
                "> Your Balance: ${} | Your Bid: ${} <",
                self.player.balance, self.player.bid
            ));
            if let Some(notice) = notice.take() {
                view.display(notice);
            }

            let (prompt, allowed) = if self.player.can_split(hand_index) {
                ("Would you like to hit(h) or stand(s) or split(p)? ", "hsp")
            } else {
                ("Would you like to hit(h) or stand(s)? ", "hs")
            };
            let key = view.ask_choice(prompt, allowed)?;

            match Decision::from_key(key) {
                Some(Decision::Hit) => {
                    let card = self.shoe.draw()?;
                    self.player.add_card(hand_index, card)?;
                    log::debug!("hand {hand_index} hits {card:?}");

                    if self.player.is_bust(hand_index) {
                        self.dealer.collect_win();
                        view.clear();
                        view.display_hand(&self.dealer, 0);
                        view.display_hand(&self.player, hand_index);
                        view.display("Bust! You went over!");
                        return Ok(None);
                    }
                }
                Some(Decision::Stand) => {
                    view.clear();
                    view.display_hand(&self.dealer, 0);
                    view.display_hand(&self.player, hand_index);
                    return Ok(None);
                }
                Some(Decision::Split) => {
                    if self.player.balance < self.player.bid {
                        notice = Some("Insufficient Funds to Split! How Humiliating!");
                    } else {
                        view.clear();
                        view.display("Splitting!");
                        let indices = self.player.split(hand_index)?;
                        log::debug!("hand {hand_index} split into {indices:?}");
                        return Ok(Some(indices));
                    }
                }
                None => {}
            }
        }
    }
}
