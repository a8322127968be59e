//! Card and deck tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::card::glyph;
use twentyone::{Card, CardError, DECK_SIZE, Deck, DeckError, Suit};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|c| (c.rank, c.suit));
    cards
}

#[test]
fn glyphs_follow_rank_map() {
    assert_eq!(glyph(Card::ACE), Some("A"));
    assert_eq!(glyph(7), Some("7"));
    assert_eq!(glyph(Card::JACK), Some("J"));
    assert_eq!(glyph(Card::QUEEN), Some("Q"));
    assert_eq!(glyph(Card::KING), Some("K"));
    assert_eq!(glyph(Card::JOKER), Some("J"));
    assert_eq!(glyph(Card::HIDDEN_RANK), Some("?"));
    assert_eq!(glyph(20), None);

    assert_eq!(Card::try_new(Suit::Joker, 14), Ok(card(Suit::Joker, 14)));
    assert_eq!(Card::try_new(Suit::Clubs, 15), Err(CardError::InvalidRank(15)));
}

#[test]
fn card_values_are_capped_at_ten() {
    assert_eq!(card(Suit::Hearts, 1).value(), 1);
    assert_eq!(card(Suit::Hearts, 9).value(), 9);
    assert_eq!(card(Suit::Hearts, 13).value(), 10);
    assert_eq!(card(Suit::Joker, 14).value(), 10);
    assert_eq!(Card::HIDDEN.value(), 0);
}

#[test]
fn card_renders_as_five_line_box() {
    let ace = card(Suit::Clubs, 1).rows();
    assert_eq!(ace[0], " _____ ");
    assert_eq!(ace[1], "|♣    |");
    assert_eq!(ace[2], "|  A  |");
    assert_eq!(ace[3], "|    ♣|");
    assert_eq!(ace[4], " ‾‾‾‾‾ ");

    let ten = card(Suit::Hearts, 10).rows();
    assert_eq!(ten[2], "|  10 |");

    let hidden = Card::HIDDEN.rows();
    assert_eq!(hidden[1], "|?    |");
    assert_eq!(hidden[2], "|  ?  |");
}

#[test]
fn new_deck_sizes() {
    assert_eq!(Deck::new(1, 0).count(), DECK_SIZE);
    assert_eq!(Deck::new(1, 4).count(), 56);
    assert_eq!(Deck::new(3, 2).count(), 3 * 52 + 3 * 2);
    assert_eq!(Deck::new(0, 0).count(), 0);
    assert!(Deck::empty().is_empty());
}

#[test]
fn reset_is_deterministic_and_ordered() {
    let mut deck = Deck::new(2, 1);
    let first = deck.cards();
    deck.reset();
    assert_eq!(deck.cards(), first);

    assert_eq!(first[0], card(Suit::Clubs, 1));
    assert_eq!(first[12], card(Suit::Clubs, 13));
    assert_eq!(first[13], card(Suit::Diamonds, 1));
    assert_eq!(first[51], card(Suit::Spades, 13));
    assert_eq!(first[52], card(Suit::Clubs, 1));
    assert!(first[104..].iter().all(|c| *c == card(Suit::Joker, 14)));
    assert_eq!(first.len(), 106);
}

#[test]
fn reset_restores_after_draws_and_shuffle() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let fresh = Deck::new(1, 2);
    let mut deck = fresh.clone();

    deck.shuffle(&mut rng);
    deck.draw().unwrap();
    deck.draw().unwrap();
    assert_eq!(deck.count(), 52);

    deck.reset();
    assert_eq!(deck, fresh);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let original = Deck::new(1, 4);
    let mut deck = original.clone();

    deck.shuffle(&mut rng);

    assert_eq!(deck.count(), original.count());
    assert_ne!(deck.cards(), original.cards());
    assert_eq!(sorted(deck.cards()), sorted(original.cards()));
    assert_eq!(original, Deck::new(1, 4));
}

#[test]
fn draw_peek_and_add() {
    let mut deck = Deck::empty();
    assert_eq!(deck.draw(), Err(DeckError::Empty));
    assert_eq!(deck.peek(), Err(DeckError::Empty));

    let seven_hearts = card(Suit::Hearts, 7);
    let seven_diamonds = card(Suit::Diamonds, 7);

    deck.add(seven_hearts);
    assert_eq!(deck.count(), 1);
    assert_eq!(deck.peek(), Ok(seven_hearts));

    // Added cards go to the bottom, so the first one stays on top.
    deck.add(seven_diamonds);
    assert_eq!(deck.count(), 2);
    assert_eq!(deck.peek(), Ok(seven_hearts));
    assert_eq!(deck.cards(), vec![seven_diamonds, seven_hearts]);
    assert_eq!(deck.draw(), Ok(seven_hearts));
    assert_eq!(deck.draw(), Ok(seven_diamonds));
    assert_eq!(deck.count(), 0);

    deck.merge(&[seven_hearts, seven_diamonds]);
    assert_eq!(deck.cards(), vec![seven_hearts, seven_diamonds]);

    let two_clubs = card(Suit::Clubs, 2);
    deck.merge(&[two_clubs]);
    assert_eq!(deck.cards(), vec![two_clubs, seven_hearts, seven_diamonds]);
    assert_eq!(deck.peek(), Ok(seven_diamonds));
}

#[test]
fn merge_deck_keeps_other_intact() {
    let mut first = Deck::new(1, 0);
    let second = Deck::new(1, 4);

    first.merge_deck(&second);

    assert_eq!(first.count(), 52 + 56);
    assert_eq!(second.count(), 56);
    assert_eq!(first.cards()[..56], second.cards()[..]);
    assert_eq!(first.cards()[56..], Deck::new(1, 0).cards()[..]);
    // The top is untouched by merging at the bottom.
    assert_eq!(first.peek(), Ok(card(Suit::Spades, 13)));
}

#[test]
fn fresh_deck_draws_from_the_end() {
    let mut deck = Deck::new(1, 4);
    assert_eq!(deck.peek(), Ok(card(Suit::Joker, 14)));
    assert_eq!(deck.draw(), Ok(card(Suit::Joker, 14)));
    assert_eq!(deck.count(), 55);

    let mut plain = Deck::new(1, 0);
    assert_eq!(plain.draw(), Ok(card(Suit::Spades, 13)));
    assert_eq!(plain.draw(), Ok(card(Suit::Spades, 12)));

    let mut stacked: Deck = [card(Suit::Hearts, 2), card(Suit::Hearts, 3)]
        .into_iter()
        .collect();
    assert_eq!(stacked.draw(), Ok(card(Suit::Hearts, 3)));
    assert_eq!(stacked.draw(), Ok(card(Suit::Hearts, 2)));
}

#[test]
fn deal_evenly_without_size() {
    let mut deck = Deck::new(1, 0);
    let original = deck.cards();

    let piles = deck.deal(4, None).unwrap();

    assert_eq!(piles.len(), 4);
    assert!(piles.iter().all(|pile| pile.count() == 13));
    assert!(deck.is_empty());

    let dealt: Vec<Card> = piles.iter().flat_map(Deck::cards).collect();
    assert_eq!(sorted(dealt), sorted(original));
}

#[test]
fn deal_remainder_goes_to_first_recipients() {
    let mut deck = Deck::new(1, 0);
    let piles = deck.deal(5, None).unwrap();
    let sizes: Vec<usize> = piles.iter().map(Deck::count).collect();
    assert_eq!(sizes, vec![11, 11, 10, 10, 10]);
}

#[test]
fn deal_round_robin_with_size() {
    let mut deck: Deck = (1..=6).map(|rank| card(Suit::Spades, rank)).collect();

    let piles = deck.deal(2, Some(2)).unwrap();

    // Draws 6, 5, 4, 3 alternately; each pile keeps its first card on top.
    assert_eq!(piles[0].cards(), vec![card(Suit::Spades, 4), card(Suit::Spades, 6)]);
    assert_eq!(piles[1].cards(), vec![card(Suit::Spades, 3), card(Suit::Spades, 5)]);
    assert_eq!(piles[0].peek(), Ok(card(Suit::Spades, 6)));
    assert_eq!(deck.cards(), vec![card(Suit::Spades, 1), card(Suit::Spades, 2)]);
}

#[test]
fn deal_errors() {
    let mut deck: Deck = (1..=3).map(|rank| card(Suit::Clubs, rank)).collect();

    assert_eq!(deck.deal(0, None).unwrap_err(), DeckError::NoRecipients);
    assert_eq!(deck.deal(2, Some(2)).unwrap_err(), DeckError::Empty);
    assert_eq!(deck.count(), 3);
}

#[test]
fn sort_by_rank_then_suit() {
    let mut deck: Deck = [
        card(Suit::Spades, 5),
        card(Suit::Joker, 14),
        card(Suit::Clubs, 5),
        card(Suit::Hearts, 1),
    ]
    .into_iter()
    .collect();

    deck.sort();

    assert_eq!(
        deck.cards(),
        vec![
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 5),
            card(Suit::Spades, 5),
            card(Suit::Joker, 14),
        ]
    );
}

#[test]
fn render_four_cards_per_row() {
    assert_eq!(Deck::empty().render(), "");

    let deck: Deck = (1..=6).map(|rank| card(Suit::Hearts, rank)).collect();
    let rendered = deck.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], " _____ ".repeat(4));
    assert_eq!(lines[5], " _____ ".repeat(2));
    assert!(rendered.ends_with('\n'));
    assert_eq!(deck.to_string(), rendered);
}
