//! Shared helpers for integration tests.

#![allow(dead_code)]

use cartamayor::{Card, Pile, PileLocation, Player, Rank, Suit};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a test log subscriber once.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, and defaults to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

pub fn table_pile() -> Pile {
    Pile::from_cards(
        PileLocation::Table,
        [
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Spades),
            card(Rank::Six, Suit::Spades),
            card(Rank::Jack, Suit::Clubs),
            card(Rank::Queen, Suit::Hearts),
            card(Rank::Ten, Suit::Diamonds),
            card(Rank::Five, Suit::Spades),
        ],
    )
}

pub fn private_cards() -> [Card; 5] {
    [
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Four, Suit::Clubs),
    ]
}

pub fn open_cards() -> [Card; 4] {
    [
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
    ]
}

pub fn hidden_cards() -> [Card; 4] {
    [
        card(Rank::Four, Suit::Hearts),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::King, Suit::Spades),
    ]
}

pub fn player_with_cards() -> Player {
    let mut player = Player::new("Player One");
    for (location, cards) in [
        (PileLocation::Private, private_cards().to_vec()),
        (PileLocation::Open, open_cards().to_vec()),
        (PileLocation::Hidden, hidden_cards().to_vec()),
    ] {
        player.pile_mut(location).unwrap().add_cards(cards);
    }
    player
}
