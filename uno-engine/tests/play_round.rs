use uno_engine::{
    card::{Card, CardColor, ColoredKind, PlayedCard},
    error::UnoError,
    game::{Game, Seat},
    rules::CardEffect,
    state::Direction,
    strategy::Difficulty,
    turn::{Decision, TurnRecord},
};

const COLORS: [CardColor; 4] = [
    CardColor::Red,
    CardColor::Blue,
    CardColor::Green,
    CardColor::Yellow,
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn human_game(count: usize) -> Game {
    init_tracing();
    let seats = (0..count)
        .map(|i| Seat::human(format!("Player {}", i + 1)))
        .collect();
    Game::new(seats).unwrap()
}

fn rookie_game(count: usize) -> Game {
    init_tracing();
    let seats = (0..count)
        .map(|i| {
            Seat::bot(
                format!("Computer {}", i + 1),
                Difficulty::Rookie.into_strategy(None),
            )
        })
        .collect();
    Game::new(seats).unwrap()
}

/// A card that shares the current color, so it is always playable.
fn matching_card(game: &Game, kind: ColoredKind) -> Card {
    Card::Colored(game.state().current_color(), kind)
}

/// A card that matches the opening discard by neither color nor kind.
fn illegal_card_against(top: &PlayedCard) -> Card {
    let color = *COLORS
        .iter()
        .find(|color| **color != top.color())
        .expect("three other colors exist");
    let number = match top {
        PlayedCard::Colored(_, ColoredKind::Number(n)) => (n + 1) % 10,
        _ => 0,
    };
    Card::Colored(color, ColoredKind::Number(number))
}

fn play_first(game: &mut Game, card: Card, chosen_color: Option<CardColor>) -> TurnRecord {
    game.player_mut(0).unwrap().hand[0] = card;
    game.play_human_turn(Decision::Play {
        hand_index: 0,
        chosen_color,
    })
    .unwrap()
    .record
}

#[test]
fn round_requires_between_two_and_ten_players() {
    init_tracing();

    let error = Game::new(vec![Seat::human("Solo")]).unwrap_err();
    assert!(matches!(error, UnoError::NotEnoughPlayers));

    let seats = (0..11).map(|i| Seat::human(format!("Player {i}"))).collect();
    let error = Game::new(seats).unwrap_err();
    assert!(matches!(error, UnoError::TooManyPlayers));
}

#[test]
fn every_player_starts_with_seven_cards_and_the_census_holds() {
    let game = human_game(4);

    for player in game.state().players() {
        assert_eq!(player.cards_count(), 7);
    }
    assert_eq!(game.total_cards(), 108);
    // The opening discard is never a wild-family card.
    assert!(!game.state().current_card().is_wild_family());
}

#[test]
fn playing_a_number_card_passes_the_turn() {
    let mut game = human_game(4);
    let color = game.state().current_color();

    let card = matching_card(&game, ColoredKind::Number(5));
    let record = play_first(&mut game, card, None);

    assert_eq!(
        record,
        TurnRecord::Played {
            card: PlayedCard::Colored(color, ColoredKind::Number(5)),
            effect: CardEffect::None,
        }
    );
    assert_eq!(game.current_player().id, 1);
    assert_eq!(game.player(0).unwrap().cards_count(), 6);
}

#[test]
fn skip_bypasses_the_next_player() {
    let mut game = human_game(4);

    let card = matching_card(&game, ColoredKind::Skip);
    let record = play_first(&mut game, card, None);

    assert!(matches!(
        record,
        TurnRecord::Played {
            effect: CardEffect::SkipNext,
            ..
        }
    ));
    assert_eq!(game.current_player().id, 2);
}

#[test]
fn reverse_flips_the_turn_order() {
    let mut game = human_game(4);

    let card = matching_card(&game, ColoredKind::Reverse);
    play_first(&mut game, card, None);

    assert_eq!(game.state().direction(), Direction::CounterClockwise);
    assert_eq!(game.current_player().id, 3);
}

#[test]
fn reverse_with_two_players_returns_the_turn() {
    let mut game = human_game(2);

    let card = matching_card(&game, ColoredKind::Reverse);
    play_first(&mut game, card, None);

    assert_eq!(game.current_player().id, 0);
}

#[test]
fn draw_two_deals_the_penalty_and_bypasses_the_victim() {
    let mut game = human_game(4);

    let card = matching_card(&game, ColoredKind::DrawTwo);
    play_first(&mut game, card, None);

    assert_eq!(game.player(1).unwrap().cards_count(), 9);
    assert_eq!(game.current_player().id, 2);
    assert_eq!(game.total_cards(), 108);
}

#[test]
fn wild_binds_the_chosen_color() {
    let mut game = human_game(4);

    let record = play_first(&mut game, Card::Wild, Some(CardColor::Blue));

    assert_eq!(
        record,
        TurnRecord::Played {
            card: PlayedCard::Wild(CardColor::Blue),
            effect: CardEffect::None,
        }
    );
    assert_eq!(game.state().current_color(), CardColor::Blue);
    assert_eq!(game.current_player().id, 1);
}

#[test]
fn wild_draw_four_deals_four_and_bypasses_the_victim() {
    let mut game = human_game(4);

    play_first(&mut game, Card::WildDrawFour, Some(CardColor::Green));

    assert_eq!(game.state().current_color(), CardColor::Green);
    assert_eq!(game.player(1).unwrap().cards_count(), 11);
    assert_eq!(game.current_player().id, 2);
    assert_eq!(game.total_cards(), 108);
}

#[test]
fn drawing_takes_one_card_and_passes_the_turn() {
    let mut game = human_game(4);

    let outcome = game.play_human_turn(Decision::Draw).unwrap();

    assert_eq!(outcome.record, TurnRecord::Drew);
    assert_eq!(game.player(0).unwrap().cards_count(), 8);
    assert_eq!(game.current_player().id, 1);
    assert_eq!(game.total_cards(), 108);
}

#[test]
fn illegal_play_is_rejected_and_leaves_the_state_alone() {
    let mut game = human_game(4);
    let unplayable = illegal_card_against(game.state().current_card());
    game.player_mut(0).unwrap().hand[0] = unplayable;

    let error = game
        .play_human_turn(Decision::Play {
            hand_index: 0,
            chosen_color: None,
        })
        .unwrap_err();

    assert!(matches!(error, UnoError::IllegalDecision(_)));
    assert_eq!(game.current_player().id, 0);
    assert_eq!(game.player(0).unwrap().cards_count(), 7);
}

#[test]
fn color_choice_must_accompany_exactly_the_wild_family() {
    let mut game = human_game(4);
    game.player_mut(0).unwrap().hand[0] = Card::Wild;

    let error = game
        .play_human_turn(Decision::Play {
            hand_index: 0,
            chosen_color: None,
        })
        .unwrap_err();
    assert!(matches!(error, UnoError::InvalidColorChoice(_)));

    let colored = matching_card(&game, ColoredKind::Number(5));
    game.player_mut(0).unwrap().hand[0] = colored;

    let error = game
        .play_human_turn(Decision::Play {
            hand_index: 0,
            chosen_color: Some(CardColor::Red),
        })
        .unwrap_err();
    assert!(matches!(error, UnoError::InvalidColorChoice(_)));

    assert_eq!(game.current_player().id, 0);
}

#[test]
fn emptying_the_hand_ends_the_round() {
    let mut game = human_game(4);
    let winning_card = matching_card(&game, ColoredKind::Skip);
    let player = game.player_mut(0).unwrap();
    player.hand.truncate(1);
    player.hand[0] = winning_card;

    let outcome = game
        .play_human_turn(Decision::Play {
            hand_index: 0,
            chosen_color: None,
        })
        .unwrap();

    assert!(outcome.round_over);
    assert!(game.is_round_over());
    assert_eq!(game.winner_id(), Some(0));
    assert_eq!(game.player(0).unwrap().cards_count(), 0);

    // No further decisions are accepted.
    let error = game.play_human_turn(Decision::Draw).unwrap_err();
    assert!(matches!(error, UnoError::RoundOver));
}

#[test]
fn winning_with_draw_two_still_deals_the_penalty() {
    let mut game = human_game(4);
    let winning_card = matching_card(&game, ColoredKind::DrawTwo);
    let player = game.player_mut(0).unwrap();
    player.hand.truncate(1);
    player.hand[0] = winning_card;

    let outcome = game
        .play_human_turn(Decision::Play {
            hand_index: 0,
            chosen_color: None,
        })
        .unwrap();

    assert!(outcome.round_over);
    assert_eq!(game.winner_id(), Some(0));
    assert_eq!(game.player(1).unwrap().cards_count(), 9);
}

#[test]
fn one_card_left_declares_uno() {
    let mut game = human_game(4);
    let shed_card = matching_card(&game, ColoredKind::Number(5));
    let player = game.player_mut(0).unwrap();
    player.hand.truncate(2);
    player.hand[0] = shed_card;

    game.play_human_turn(Decision::Play {
        hand_index: 0,
        chosen_color: None,
    })
    .unwrap();

    assert!(game
        .state()
        .recent_actions()
        .any(|entry| entry.contains("declares UNO")));
}

#[test]
fn seats_only_answer_through_their_own_entry_point() {
    init_tracing();
    let mut game = Game::new(vec![
        Seat::human("Dana"),
        Seat::bot("Computer (Rookie)", Difficulty::Rookie.into_strategy(None)),
    ])
    .unwrap();

    assert!(game.needs_human_decision());
    let error = game.play_turn().unwrap_err();
    assert!(matches!(error, UnoError::ExternalSeat));

    game.play_human_turn(Decision::Draw).unwrap();

    assert!(!game.needs_human_decision());
    let error = game.play_human_turn(Decision::Draw).unwrap_err();
    assert!(matches!(error, UnoError::ExternalSeat));
    game.play_turn().unwrap();
}

#[test]
fn legal_hand_indices_reports_the_playable_cards() {
    let mut game = human_game(2);
    let top = *game.state().current_card();
    let playable = matching_card(&game, ColoredKind::Number(5));
    game.player_mut(0).unwrap().hand = vec![illegal_card_against(&top), playable, Card::Wild];

    assert_eq!(game.legal_hand_indices(), vec![1, 2]);
}

#[test]
fn a_full_random_round_conserves_every_card() {
    let mut game = rookie_game(4);

    let mut finished = false;
    for _ in 0..10_000 {
        let outcome = game.play_turn().unwrap();

        assert_eq!(game.total_cards(), 108);
        assert!(game.state().current_player_index() < 4);

        if outcome.round_over {
            finished = true;
            break;
        }
    }

    assert!(finished, "a random round should end well within the cap");
    let winner = game.winner_id().expect("a finished round names a winner");
    assert_eq!(game.player(winner).unwrap().cards_count(), 0);
    assert!(matches!(game.play_turn().unwrap_err(), UnoError::RoundOver));
}
