//! Core engine for Carta Mayor, a shedding card game with layered hands.
//!
//! Participants hold three piles (private, open and hidden) and shed cards
//! onto a shared table pile. A card may be played on another when its power
//! reaches the other card's resistance; `2` and `10` are wildcards.
//!
//! The crate provides the card and pile model, the per-mode deal, the
//! match lifecycle, and the [`Director`] that answers rendering queries such
//! as the windowed table display. Turn resolution is supplied by the caller
//! through the [`TurnResolver`] trait.
//!
//! # Example
//!
//! ```no_run
//! use cartamayor::{Director, GameMode, MatchOptions, Player, Seating};
//!
//! let director = Director::new(MatchOptions::default(), 42);
//! let seating = Seating::Solo(vec![
//!     Player::new("Ana"),
//!     Player::new("Bruno"),
//!     Player::new("Carla"),
//! ]);
//! director.start_match(GameMode::FatalThreeWay, seating).unwrap();
//! let view = director.table_display(&[]).unwrap();
//! assert!(view.slots.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod director;
pub mod error;
pub mod game;
pub mod options;
pub mod participant;
pub mod pile;
mod sync;
pub mod text;
pub mod view;

// Re-export main types
pub use card::{Card, CardStats, DECK_SIZE, Rank, Suit, build_deck};
pub use director::{Director, Seating};
pub use error::{
    CardError, ConfigError, DealError, DirectorError, MatchError, PileError, TurnError,
    WindowError,
};
pub use game::{Match, MatchState, TurnResolver, UnsupportedResolver};
pub use options::{DealLayout, GameMode, MatchOptions};
pub use participant::{Perspective, Player, Team};
pub use pile::{MaskedPile, Pile, PileLocation};
pub use text::trim_name;
pub use view::{CardSlot, PileView, TableView, table_window};
