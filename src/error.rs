//! Error types for match operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::MatchState;
use crate::options::GameMode;
use crate::pile::PileLocation;

/// Errors that can occur when reading cards from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Label is not one of the thirteen ranks.
    #[error("unknown card rank")]
    UnknownRank,
}

/// Errors caused by an invalid match setup or missing setup state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Game mode code is not recognized.
    #[error("unknown game mode")]
    UnknownGameMode,
    /// Seating does not match the shape the game mode expects.
    #[error("seating does not fit a {mode} match")]
    SeatingMismatch {
        /// The selected game mode.
        mode: GameMode,
    },
    /// Wrong number of participants for the game mode.
    #[error("a {mode} match needs {expected} participants, got {found}")]
    WrongParticipantCount {
        /// The selected game mode.
        mode: GameMode,
        /// Participants required by the mode.
        expected: usize,
        /// Participants supplied.
        found: usize,
    },
    /// Two participants share a name.
    #[error("participant names must be unique")]
    DuplicateName,
    /// A participant or team name is blank.
    #[error("names cannot be empty")]
    EmptyName,
    /// No participant with the requested name.
    #[error("player not found")]
    UnknownPlayer,
    /// A match must be set before using this function.
    #[error("match must be set before using this function")]
    NoMatch,
}

/// Errors that can occur when moving cards out of a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The card is not in the pile.
    #[error("card {card} not found in {location} pile")]
    CardNotFound {
        /// The missing card.
        card: Card,
        /// Location of the pile that was searched.
        location: PileLocation,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid match state for dealing.
    #[error("invalid match state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck: need {needed}, have {available}")]
    NotEnoughCards {
        /// Cards the layout requires.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Errors that can occur while driving the match lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The operation is not valid in the current state.
    #[error("operation not allowed while match is {state:?}")]
    InvalidState {
        /// State the match was in.
        state: MatchState,
    },
    /// The initiative queue is empty.
    #[error("initiative queue is empty")]
    NoParticipants,
}

/// Errors reported by a turn resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The requested flow is not built.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
    /// The card cannot be played on the current table.
    #[error("card {0} cannot be played on the table")]
    Illegal(Card),
    /// A play was submitted without cards.
    #[error("a play needs at least one card")]
    EmptyPlay,
    /// Moving the cards failed.
    #[error(transparent)]
    Pile(#[from] PileError),
    /// The match rejected the transition.
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Errors that can occur while computing the table window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    /// The latest play is not the top of the table pile.
    #[error("latest play is not on top of the table pile")]
    PlayNotOnTable,
}

/// Errors returned by the [`Director`](crate::Director).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectorError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Lifecycle misuse.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// Turn resolution failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// Table window could not be computed.
    #[error(transparent)]
    Window(#[from] WindowError),
}
