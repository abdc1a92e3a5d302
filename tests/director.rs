//! Director queries and the table display window.

mod common;

use cartamayor::{
    Card, CardSlot, ConfigError, Director, DirectorError, GameMode, Match, MatchOptions,
    MatchState, Perspective, Pile, PileLocation, Player, Rank, Seating, Suit, Team, TurnError,
    WindowError, build_deck, table_window,
};
use common::{card, init_logging};
use time::macros::datetime;

const M: CardSlot = CardSlot::Masked;

fn shown(card: Card) -> CardSlot {
    CardSlot::Revealed(card)
}

fn full_monty_match() -> Match {
    let players = ["Firas", "Andrei", "Matheus", "Matthieu"].map(Player::new);
    let mut game = Match::new(
        GameMode::FullMonty,
        players,
        build_deck(),
        MatchOptions::default(),
    )
    .unwrap();
    game.table_pile_mut().add_cards([
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
        card(Rank::Six, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
    ]);
    game
}

/// Puts `play` on the table and returns the display for it.
fn play(director: &Director, play: &[Card]) -> (usize, Vec<CardSlot>) {
    director
        .current
        .lock()
        .as_mut()
        .unwrap()
        .table_pile_mut()
        .add_cards(play.iter().copied());
    let view = director.table_display(play).unwrap();
    (view.pile_len, view.slots)
}

fn teams() -> [Team; 2] {
    [
        Team::new("Invictus", Player::new("Firas"), Player::new("Matheus")),
        Team::new("Second", Player::new("Andrei"), Player::new("Matthieu")),
    ]
}

#[test]
fn queries_need_a_match() {
    let director = Director::new(MatchOptions::default(), 1);
    let err = director.next_player().unwrap_err();
    assert_eq!(err, DirectorError::Config(ConfigError::NoMatch));
    assert_eq!(
        err.to_string(),
        "match must be set before using this function"
    );
    assert!(director.table_display(&[]).is_err());
    assert!(director.summary().is_err());
}

#[test]
fn full_monty_match_creation() {
    init_logging();
    let director = Director::new(MatchOptions::default(), 42);
    director
        .start_match_at(
            GameMode::FullMonty,
            Seating::Teams(teams()),
            datetime!(2023-04-12 21:13 UTC),
        )
        .unwrap();

    assert_eq!(director.state(), Some(MatchState::Started));
    assert_eq!(director.next_player().unwrap(), "Firas");

    let game = director.into_match().unwrap();
    assert_eq!(game.game_mode(), GameMode::FullMonty);
    let order: Vec<&str> = game.initiative_queue().iter().map(Player::name).collect();
    assert_eq!(order, ["Firas", "Andrei", "Matheus", "Matthieu"]);
    assert!(game.initiative_queue().iter().all(|p| p.card_count() == 13));
}

#[test]
fn seating_must_fit_mode() {
    let director = Director::new(MatchOptions::default(), 42);
    let at = datetime!(2023-04-12 21:13 UTC);

    let err = director
        .start_match_at(GameMode::FatalThreeWay, Seating::Teams(teams()), at)
        .unwrap_err();
    assert_eq!(
        err,
        DirectorError::Config(ConfigError::SeatingMismatch {
            mode: GameMode::FatalThreeWay,
        })
    );

    let same_name = [
        Team::new("Invictus", Player::new("A"), Player::new("B")),
        Team::new("Invictus", Player::new("C"), Player::new("D")),
    ];
    let err = director
        .start_match_at(GameMode::FullMonty, Seating::Teams(same_name), at)
        .unwrap_err();
    assert_eq!(err, DirectorError::Config(ConfigError::DuplicateName));
    assert!(director.state().is_none());
}

#[test]
fn fatal_three_way_creation_and_player_state() {
    let director = Director::new(MatchOptions::default(), 7);
    let players = ["Test", "Test Duplus", "Test Tertius"].map(Player::new).to_vec();
    director
        .start_match_at(
            GameMode::FatalThreeWay,
            Seating::Solo(players),
            datetime!(2023-04-12 21:13 UTC),
        )
        .unwrap();

    let [open, hidden, private] = director
        .player_state("Test Duplus", Perspective::Owner)
        .unwrap();
    assert_eq!(open.location, PileLocation::Open);
    assert_eq!(open.slots.len(), 5);
    assert!(open.slots.iter().all(|slot| slot.card().is_some()));
    assert_eq!(hidden.slots, vec![M; 5]);
    assert_eq!(private.location, PileLocation::Private);
    assert_eq!(private.slots.len(), 7);

    assert_eq!(
        director
            .player_state("Nobody", Perspective::Opponent)
            .unwrap_err(),
        DirectorError::Config(ConfigError::UnknownPlayer)
    );
    assert!(director.summary().unwrap().starts_with("FATAL THREE WAY started at"));
}

#[test]
fn default_director_does_not_resolve_turns() {
    let director = Director::new(MatchOptions::default(), 3);
    director
        .start_match_at(
            GameMode::FullMonty,
            Seating::Teams(teams()),
            datetime!(2023-04-12 21:13 UTC),
        )
        .unwrap();
    let err = director
        .play_turn_at(
            &[card(Rank::Two, Suit::Clubs)],
            datetime!(2023-04-12 21:14 UTC),
        )
        .unwrap_err();
    assert_eq!(
        err,
        DirectorError::Turn(TurnError::Unsupported("turn resolution"))
    );
    assert_eq!(director.state(), Some(MatchState::AwaitingPlay));
}

#[test]
fn table_pile_display() {
    let director = Director::from_match(full_monty_match(), 1);

    assert_eq!(
        play(
            &director,
            &[card(Rank::Two, Suit::Clubs), card(Rank::Two, Suit::Hearts)]
        ),
        (
            6,
            vec![
                shown(card(Rank::Two, Suit::Hearts)),
                shown(card(Rank::Two, Suit::Clubs)),
                M, M, M, M,
            ]
        )
    );

    director.set_show_previous_play(true).unwrap();
    assert_eq!(
        play(&director, &[card(Rank::Three, Suit::Clubs)]),
        (
            7,
            vec![
                shown(card(Rank::Three, Suit::Clubs)),
                shown(card(Rank::Two, Suit::Hearts)),
                shown(card(Rank::Two, Suit::Clubs)),
                M, M, M,
            ]
        )
    );
    director.set_show_previous_play(false).unwrap();

    assert_eq!(
        play(&director, &[card(Rank::Four, Suit::Hearts)]),
        (8, vec![shown(card(Rank::Four, Suit::Hearts)), M, M, M, M, M])
    );

    assert_eq!(
        play(
            &director,
            &[card(Rank::Ten, Suit::Clubs), card(Rank::Ten, Suit::Diamonds)]
        ),
        (
            10,
            vec![
                shown(card(Rank::Ten, Suit::Diamonds)),
                shown(card(Rank::Ten, Suit::Clubs)),
                M, M, M, M,
            ]
        )
    );

    assert_eq!(
        play(
            &director,
            &[
                card(Rank::Queen, Suit::Clubs),
                card(Rank::Queen, Suit::Spades),
                card(Rank::Queen, Suit::Diamonds),
            ]
        ),
        (
            13,
            vec![
                shown(card(Rank::Queen, Suit::Diamonds)),
                shown(card(Rank::Queen, Suit::Spades)),
                shown(card(Rank::Queen, Suit::Clubs)),
                M, M, M,
            ]
        )
    );

    assert_eq!(
        play(
            &director,
            &[card(Rank::Two, Suit::Spades), card(Rank::Two, Suit::Diamonds)]
        ),
        (
            15,
            vec![
                shown(card(Rank::Two, Suit::Diamonds)),
                shown(card(Rank::Two, Suit::Spades)),
                M, M, M, M,
            ]
        )
    );

    director.set_show_previous_play(true).unwrap();
    assert_eq!(
        play(
            &director,
            &[card(Rank::Nine, Suit::Clubs), card(Rank::Nine, Suit::Hearts)]
        ),
        (
            17,
            vec![
                shown(card(Rank::Nine, Suit::Hearts)),
                shown(card(Rank::Nine, Suit::Clubs)),
                shown(card(Rank::Two, Suit::Diamonds)),
                shown(card(Rank::Two, Suit::Spades)),
                M, M,
            ]
        )
    );
}

#[test]
fn table_pile_display_same_cards() {
    let director = Director::from_match(full_monty_match(), 1);

    assert_eq!(
        play(
            &director,
            &[card(Rank::Ten, Suit::Clubs), card(Rank::Ten, Suit::Diamonds)]
        ),
        (
            6,
            vec![
                shown(card(Rank::Ten, Suit::Diamonds)),
                shown(card(Rank::Ten, Suit::Clubs)),
                M, M, M, M,
            ]
        )
    );

    assert_eq!(
        play(&director, &[card(Rank::Three, Suit::Clubs)]),
        (7, vec![shown(card(Rank::Three, Suit::Clubs)), M, M, M, M, M])
    );

    assert_eq!(
        play(
            &director,
            &[card(Rank::Three, Suit::Hearts), card(Rank::Three, Suit::Diamonds)]
        ),
        (
            9,
            vec![
                shown(card(Rank::Three, Suit::Diamonds)),
                shown(card(Rank::Three, Suit::Hearts)),
                shown(card(Rank::Three, Suit::Clubs)),
                M, M, M,
            ]
        )
    );

    assert_eq!(
        play(
            &director,
            &[card(Rank::Two, Suit::Spades), card(Rank::Two, Suit::Diamonds)]
        ),
        (
            11,
            vec![
                shown(card(Rank::Two, Suit::Diamonds)),
                shown(card(Rank::Two, Suit::Spades)),
                M, M, M, M,
            ]
        )
    );

    director.set_show_previous_play(true).unwrap();
    assert_eq!(
        play(&director, &[card(Rank::Two, Suit::Clubs)]),
        (
            12,
            vec![
                shown(card(Rank::Two, Suit::Clubs)),
                shown(card(Rank::Two, Suit::Diamonds)),
                shown(card(Rank::Two, Suit::Spades)),
                M, M, M,
            ]
        )
    );

    assert_eq!(
        play(
            &director,
            &[
                card(Rank::Nine, Suit::Clubs),
                card(Rank::Nine, Suit::Hearts),
                card(Rank::Nine, Suit::Spades),
            ]
        ),
        (
            15,
            vec![
                shown(card(Rank::Nine, Suit::Spades)),
                shown(card(Rank::Nine, Suit::Hearts)),
                shown(card(Rank::Nine, Suit::Clubs)),
                shown(card(Rank::Two, Suit::Clubs)),
                shown(card(Rank::Two, Suit::Diamonds)),
                shown(card(Rank::Two, Suit::Spades)),
            ]
        )
    );
}

#[test]
fn short_table_pads_only_existing_cards() {
    let table = Pile::from_cards(
        PileLocation::Table,
        [
            card(Rank::Three, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
        ],
    );
    let latest = [card(Rank::Two, Suit::Hearts), card(Rank::Two, Suit::Clubs)];
    let view = table_window(&table, &latest, false, 6, 3).unwrap();

    assert_eq!(view.pile_len, 3);
    assert_eq!(
        view.slots,
        [
            shown(card(Rank::Two, Suit::Clubs)),
            shown(card(Rank::Two, Suit::Hearts)),
            M,
        ]
    );
    assert_eq!(
        view.padded(),
        [
            shown(card(Rank::Two, Suit::Clubs)),
            shown(card(Rank::Two, Suit::Hearts)),
            M, M, M, M,
        ]
    );
}

#[test]
fn wildcard_chain_stops_at_first_other_rank() {
    let table = Pile::from_cards(
        PileLocation::Table,
        [
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Eight, Suit::Clubs),
            card(Rank::Two, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
        ],
    );
    let view = table_window(&table, &[card(Rank::Three, Suit::Clubs)], true, 6, 3).unwrap();
    assert_eq!(
        view.revealed(),
        [
            card(Rank::Three, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Two, Suit::Spades),
        ]
    );
    assert_eq!(view.slots.len(), 5);

    // Without the flag a lone three hides the twos beneath it.
    let view = table_window(&table, &[card(Rank::Three, Suit::Clubs)], false, 6, 3).unwrap();
    assert_eq!(view.revealed(), [card(Rank::Three, Suit::Clubs)]);
}

#[test]
fn lookback_is_bounded() {
    let twos = Suit::ALL.map(|suit| card(Rank::Two, suit));
    let mut table = Pile::new(PileLocation::Table);
    table.add_cards(twos);
    table.add_cards([card(Rank::Five, Suit::Clubs)]);

    let view = table_window(&table, &[card(Rank::Five, Suit::Clubs)], true, 6, 3).unwrap();
    assert_eq!(view.pile_len, 5);
    assert_eq!(view.revealed().len(), 4);
    assert_eq!(view.slots.last(), Some(&M));
}

#[test]
fn display_rejects_play_not_on_table() {
    let director = Director::from_match(full_monty_match(), 1);
    assert_eq!(
        director
            .table_display(&[card(Rank::Ace, Suit::Clubs)])
            .unwrap_err(),
        DirectorError::Window(WindowError::PlayNotOnTable)
    );

    let view = director.table_display(&[]).unwrap();
    assert_eq!(view.pile_len, 4);
    assert_eq!(view.slots, [M, M, M, M]);
}
