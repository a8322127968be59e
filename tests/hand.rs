//! Hand valuation and participant tests.

use twentyone::hand::{evaluate, totals};
use twentyone::{ActionError, Card, Deck, Evaluation, Participant, Suit};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn totals_without_aces_is_single_sum() {
    let cards = [
        card(Suit::Hearts, 4),
        card(Suit::Clubs, 12),
        card(Suit::Spades, 7),
    ];
    assert_eq!(totals(&cards), vec![21]);

    assert_eq!(totals(&[] as &[Card]), vec![0]);
}

#[test]
fn totals_with_aces_step_by_ten() {
    for aces in 1..=4_u8 {
        let mut cards = vec![card(Suit::Diamonds, 3)];
        cards.extend((0..aces).map(|_| card(Suit::Spades, 1)));

        let values = totals(&cards);
        assert_eq!(values.len(), usize::from(aces) + 1);
        assert!(values.windows(2).all(|pair| pair[1] == pair[0] + 10));
        assert_eq!(values[0], 3 + u32::from(aces));
    }
}

#[test]
fn joker_counts_ten() {
    let cards = [card(Suit::Joker, 14), card(Suit::Hearts, 1)];
    assert_eq!(totals(&cards), vec![11, 21]);
}

#[test]
fn best_prefers_highest_total_not_over_21() {
    let mut player = Participant::new("player", 1000);

    player.add_card(0, card(Suit::Clubs, 5)).unwrap();
    assert_eq!(player.evaluate(0).unwrap().best, 5);

    player.add_card(0, card(Suit::Spades, 1)).unwrap();
    assert_eq!(player.hand(0).unwrap().totals(), vec![6, 16]);
    assert_eq!(player.evaluate(0).unwrap().best, 16);

    player.add_card(0, card(Suit::Clubs, 10)).unwrap();
    assert_eq!(player.hand(0).unwrap().totals(), vec![16, 26]);
    assert_eq!(player.evaluate(0).unwrap().best, 16);
}

#[test]
fn best_of_all_bust_is_smallest_total() {
    let cards = [
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 1),
        card(Suit::Diamonds, 5),
    ];
    let evaluation = evaluate(&cards);
    assert_eq!(evaluation.best, 26);
    assert!(evaluation.is_bust());
    assert_eq!(evaluation.second_best, None);
}

#[test]
fn second_best_marks_soft_hands() {
    let soft_17 = evaluate(&[card(Suit::Spades, 1), card(Suit::Clubs, 6)]);
    assert_eq!(
        soft_17,
        Evaluation {
            best: 17,
            second_best: Some(7),
        }
    );
    assert!(soft_17.is_soft());

    let hard_17 = evaluate(&[card(Suit::Spades, 10), card(Suit::Clubs, 7)]);
    assert_eq!(hard_17.second_best, None);
    assert!(!hard_17.is_soft());

    // Two aces: 2 / 12 / 22, best 12 with 2 below it.
    let two_aces = evaluate(&[card(Suit::Spades, 1), card(Suit::Clubs, 1)]);
    assert_eq!(two_aces.best, 12);
    assert_eq!(two_aces.second_best, Some(2));
}

#[test]
fn bet_tie_and_win() {
    let mut player = Participant::new("player", 1000);
    assert_eq!(player.balance, 1000);

    player.place_bet(30);
    assert_eq!(player.balance, 970);
    player.return_bet();
    assert_eq!(player.balance, 1000);

    player.place_bet(30);
    assert_eq!(player.balance, 970);
    player.collect_win();
    assert_eq!(player.balance, 1030);
}

#[test]
fn collect_all_wins_skips_bust_hands() {
    let mut player = Participant::new("player", 1000);
    player.place_bet(30);
    player.add_card(0, card(Suit::Diamonds, 4)).unwrap();
    player.add_card(0, card(Suit::Hearts, 4)).unwrap();
    player.split(0).unwrap();
    assert_eq!(player.balance, 940);

    // Hand 0 busts, hand 1 survives.
    player.merge_into(0, &Deck::new(1, 0)).unwrap();
    assert!(player.is_bust(0));
    assert!(!player.is_bust(1));

    assert_eq!(player.collect_all_wins(), 1);
    assert_eq!(player.balance, 1000);
}

#[test]
fn best_surviving_total_ignores_bust_hands() {
    let mut player = Participant::new("player", 1000);
    player.add_card(0, card(Suit::Clubs, 10)).unwrap();
    player.add_card(0, card(Suit::Clubs, 10)).unwrap();
    player.split(0).unwrap();
    assert_eq!(player.best_surviving_total(), 10);

    player.add_card(1, card(Suit::Spades, 1)).unwrap();
    assert_eq!(player.best_surviving_total(), 21);

    player.merge_into(0, &Deck::new(1, 0)).unwrap();
    assert_eq!(player.best_surviving_total(), 21);

    player.add_card(1, card(Suit::Hearts, 10)).unwrap();
    player.add_card(1, card(Suit::Hearts, 10)).unwrap();
    assert!(player.all_bust());
    assert_eq!(player.best_surviving_total(), 0);
}

#[test]
fn can_split_needs_two_cards_of_equal_value() {
    let mut pair = Participant::new("player", 100);
    pair.add_card(0, card(Suit::Hearts, 8)).unwrap();
    pair.add_card(0, card(Suit::Spades, 8)).unwrap();
    assert!(pair.can_split(0));

    let mut faces = Participant::new("player", 100);
    faces.add_card(0, card(Suit::Hearts, 10)).unwrap();
    faces.add_card(0, card(Suit::Spades, 13)).unwrap();
    assert!(faces.can_split(0));

    let mut mixed = Participant::new("player", 100);
    mixed.add_card(0, card(Suit::Hearts, 8)).unwrap();
    mixed.add_card(0, card(Suit::Spades, 9)).unwrap();
    assert!(!mixed.can_split(0));

    pair.add_card(0, card(Suit::Clubs, 8)).unwrap();
    assert!(!pair.can_split(0));
    assert!(!pair.can_split(3));
}

#[test]
fn split_rebets_and_moves_cards_to_new_hands() {
    let eight_hearts = card(Suit::Hearts, 8);
    let eight_spades = card(Suit::Spades, 8);

    let mut player = Participant::new("player", 100);
    player.place_bet(10);
    player.add_card(0, eight_hearts).unwrap();
    player.add_card(0, eight_spades).unwrap();

    assert_eq!(player.split(0), Ok((0, 1)));
    assert_eq!(player.balance, 80);
    assert_eq!(player.bid, 10);
    assert_eq!(player.hand_count(), 2);
    // The newest card sits at the bottom and goes to the first new hand.
    assert_eq!(player.hand(0).unwrap().cards(), vec![eight_spades]);
    assert_eq!(player.hand(1).unwrap().cards(), vec![eight_hearts]);
}

#[test]
fn split_of_middle_hand_appends_to_end() {
    let mut player = Participant::new("player", 100);
    player.add_card(0, card(Suit::Hearts, 3)).unwrap();
    player.add_card(0, card(Suit::Spades, 3)).unwrap();
    player.split(0).unwrap();
    player.add_card(0, card(Suit::Clubs, 3)).unwrap();

    assert_eq!(player.split(0), Ok((1, 2)));
    assert_eq!(player.hand(0).unwrap().cards(), vec![card(Suit::Hearts, 3)]);
    assert_eq!(player.hand(1).unwrap().cards(), vec![card(Suit::Clubs, 3)]);
    assert_eq!(player.hand(2).unwrap().cards(), vec![card(Suit::Spades, 3)]);
}

#[test]
fn split_errors_leave_state_untouched() {
    let mut player = Participant::new("player", 100);
    player.place_bet(10);
    player.add_card(0, card(Suit::Hearts, 8)).unwrap();

    assert_eq!(player.split(0), Err(ActionError::CannotSplit));
    assert_eq!(player.split(4), Err(ActionError::HandNotFound));
    assert_eq!(player.balance, 90);
    assert_eq!(player.hand_count(), 1);

    assert_eq!(
        player.add_card(2, card(Suit::Clubs, 2)),
        Err(ActionError::HandNotFound)
    );
}

#[test]
fn reset_hands_leaves_one_empty_hand() {
    let mut player = Participant::new("player", 100);
    player.add_card(0, card(Suit::Hearts, 5)).unwrap();
    player.add_card(0, card(Suit::Spades, 5)).unwrap();
    player.split(0).unwrap();

    player.reset_hands();
    assert_eq!(player.hand_count(), 1);
    assert!(player.hand(0).unwrap().is_empty());
}
