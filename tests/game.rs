//! Game integration tests.

use std::collections::HashSet;

use chicago_poker::{
    Card, DealError, Deck, DeckError, Game, GameOptions, Hand, Rank, RedrawError, ScoreError, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn stacked_game(players: usize, hand_size: usize, draws: &[Card]) -> Game {
    let options = GameOptions::default()
        .with_players(players)
        .with_hand_size(hand_size);
    let mut game = Game::new(options, 1);
    game.deck = Deck::from(draws.to_vec());
    game
}

#[test]
fn fresh_deck_is_canonical_and_complete() {
    let deck = Deck::new();
    assert_eq!(deck.len(), Deck::SIZE);

    let unique: HashSet<(Rank, Suit)> = deck.cards().iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(unique.len(), Deck::SIZE);

    // Suit-major order, ranks ascending within each suit.
    assert_eq!(deck.cards()[0], card(Rank::Two, Suit::Clubs));
    assert_eq!(deck.cards()[12], card(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.cards()[13], card(Rank::Two, Suit::Spades));
    assert_eq!(deck.cards()[26], card(Rank::Two, Suit::Hearts));
    assert_eq!(deck.cards()[51], card(Rank::Ace, Suit::Diamonds));
}

#[test]
fn dealing_52_cards_empties_the_deck() {
    let mut deck = Deck::new();

    let mut seen = HashSet::new();
    for _ in 0..Deck::SIZE {
        let dealt = deck.deal().unwrap();
        assert!(seen.insert((dealt.rank, dealt.suit)));
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal().unwrap_err(), DeckError::Empty);
}

#[test]
fn deal_removes_the_front_card() {
    let mut deck = Deck::from(vec![
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
    ]);

    assert_eq!(deck.deal().unwrap(), card(Rank::Nine, Suit::Hearts));
    assert_eq!(deck.len(), 1);
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut game = Game::new(GameOptions::default(), 7);

    let key = |c: &Card| (c.rank as u8, c.suit as u8);
    let mut before: Vec<_> = game.deck.cards().iter().map(key).collect();
    before.sort_unstable();

    game.shuffle();

    let mut after: Vec<_> = game.deck.cards().iter().map(key).collect();
    after.sort_unstable();

    assert_eq!(game.deck.len(), Deck::SIZE);
    assert_eq!(before, after);
}

#[test]
fn initial_deal_gives_each_player_a_full_hand() {
    let options = GameOptions::default().with_players(4);
    let mut game = Game::new(options, 42);

    game.shuffle();
    game.initial_deal().unwrap();

    assert_eq!(game.cards_remaining(), 24);
    assert_eq!(game.current_player(), Some(0));

    let mut seen = HashSet::new();
    for player in &game.players {
        assert_eq!(player.hand.len(), 7);
        for held in player.hand.cards() {
            // No two players may hold the same card.
            assert!(seen.insert((held.rank, held.suit)));
        }
    }
}

#[test]
fn initial_deal_twice_is_rejected() {
    let mut game = Game::new(GameOptions::default(), 3);

    game.initial_deal().unwrap();
    assert_eq!(game.initial_deal().unwrap_err(), DealError::AlreadyDealt);
}

#[test]
fn initial_deal_rejects_oversized_roster() {
    let options = GameOptions::default().with_players(8);
    let mut game = Game::new(options, 1);

    assert_eq!(game.initial_deal().unwrap_err(), DealError::NotEnoughCards);
    // Nothing was dealt.
    assert_eq!(game.cards_remaining(), Deck::SIZE);
    assert!(game.players.iter().all(|p| p.hand.is_empty()));
}

#[test]
fn redraw_replaces_the_card_in_place() {
    let mut game = stacked_game(
        1,
        3,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Five, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::King, Suit::Spades),
        ],
    );
    game.initial_deal().unwrap();

    let dealt = game.redraw(0, &[card(Rank::Five, Suit::Hearts)]).unwrap();
    assert_eq!(dealt, vec![card(Rank::King, Suit::Spades)]);

    let hand = game.player(0).unwrap().hand.cards().to_vec();
    assert_eq!(
        hand,
        vec![
            card(Rank::Two, Suit::Clubs),
            card(Rank::King, Suit::Spades),
            card(Rank::Nine, Suit::Diamonds),
        ]
    );
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn redraw_handles_several_cards_in_request_order() {
    let mut game = stacked_game(
        1,
        3,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Five, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::King, Suit::Spades),
            card(Rank::Ace, Suit::Clubs),
        ],
    );
    game.initial_deal().unwrap();

    let dealt = game
        .redraw(
            0,
            &[card(Rank::Nine, Suit::Diamonds), card(Rank::Two, Suit::Clubs)],
        )
        .unwrap();
    assert_eq!(
        dealt,
        vec![card(Rank::King, Suit::Spades), card(Rank::Ace, Suit::Clubs)]
    );

    let hand = game.player(0).unwrap().hand.cards().to_vec();
    assert_eq!(
        hand,
        vec![
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Five, Suit::Hearts),
            card(Rank::King, Suit::Spades),
        ]
    );
}

#[test]
fn redraw_rejects_unknown_player() {
    let mut game = Game::new(GameOptions::default(), 1);
    game.initial_deal().unwrap();

    assert_eq!(
        game.redraw(5, &[]).unwrap_err(),
        RedrawError::PlayerNotFound
    );
}

#[test]
fn redraw_rejects_card_not_in_hand() {
    let mut game = stacked_game(
        1,
        2,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Five, Suit::Hearts),
            card(Rank::King, Suit::Spades),
        ],
    );
    game.initial_deal().unwrap();

    assert_eq!(
        game.redraw(0, &[card(Rank::Ace, Suit::Diamonds)]).unwrap_err(),
        RedrawError::CardNotFound
    );
}

#[test]
fn redraw_rejects_duplicate_requests() {
    let mut game = stacked_game(
        1,
        2,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Five, Suit::Hearts),
            card(Rank::King, Suit::Spades),
            card(Rank::Ace, Suit::Diamonds),
        ],
    );
    game.initial_deal().unwrap();

    // A hand never holds the same card twice, so the second request cannot
    // be matched to a distinct position.
    assert_eq!(
        game.redraw(
            0,
            &[card(Rank::Two, Suit::Clubs), card(Rank::Two, Suit::Clubs)]
        )
        .unwrap_err(),
        RedrawError::CardNotFound
    );
}

#[test]
fn redraw_with_exhausted_deck_leaves_the_hand_untouched() {
    let mut game = stacked_game(
        1,
        2,
        &[card(Rank::Two, Suit::Clubs), card(Rank::Five, Suit::Hearts)],
    );
    game.initial_deal().unwrap();
    assert_eq!(game.cards_remaining(), 0);

    let before = game.player(0).unwrap().hand.cards().to_vec();
    assert_eq!(
        game.redraw(0, &[card(Rank::Two, Suit::Clubs)]).unwrap_err(),
        RedrawError::NotEnoughCards
    );
    assert_eq!(game.player(0).unwrap().hand.cards().to_vec(), before);
}

#[test]
fn turn_starts_at_player_zero_and_wraps() {
    let mut game = Game::new(GameOptions::default().with_players(3), 9);

    assert_eq!(game.current_player(), None);

    game.shuffle();
    game.initial_deal().unwrap();
    assert_eq!(game.current_player(), Some(0));

    assert_eq!(game.advance_turn(), Some(1));
    assert_eq!(game.advance_turn(), Some(2));
    assert_eq!(game.advance_turn(), Some(0));
    assert_eq!(game.current_player(), Some(0));
}

#[test]
fn score_hand_records_the_player_score() {
    let mut game = stacked_game(
        1,
        5,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Two, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Five, Suit::Clubs),
        ],
    );
    game.initial_deal().unwrap();

    assert_eq!(game.score_hand(0).unwrap(), 7);
    assert_eq!(game.player(0).unwrap().score, 7);

    assert_eq!(game.score_hand(9).unwrap_err(), ScoreError::PlayerNotFound);
}

#[test]
fn hand_lookup_is_by_value() {
    let mut hand = Hand::new();
    hand.push(card(Rank::Five, Suit::Hearts));
    hand.push(card(Rank::Nine, Suit::Diamonds));

    assert!(hand.contains(&card(Rank::Five, Suit::Hearts)));
    assert_eq!(hand.position(&card(Rank::Nine, Suit::Diamonds)), Some(1));
    assert_eq!(hand.position(&card(Rank::Ace, Suit::Clubs)), None);
}

#[test]
fn card_equality_ignores_the_face_up_flag() {
    let mut flipped = card(Rank::Queen, Suit::Hearts);
    flipped.flip();

    assert!(!flipped.face_up);
    assert_eq!(flipped, card(Rank::Queen, Suit::Hearts));
}

#[test]
fn card_display_labels() {
    assert_eq!(card(Rank::Ten, Suit::Clubs).to_string(), "10♣");
    assert_eq!(card(Rank::Ace, Suit::Diamonds).to_string(), "A♦");
    assert_eq!(card(Rank::Two, Suit::Spades).to_string(), "2♠");
    assert_eq!(card(Rank::Jack, Suit::Hearts).to_string(), "J♥");
}
