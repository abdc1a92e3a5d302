//! Match state and lifecycle.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use time::OffsetDateTime;

use crate::card::Card;
use crate::error::{ConfigError, WindowError};
use crate::options::{GameMode, MatchOptions};
use crate::participant::Player;
use crate::pile::{Pile, PileLocation};
use crate::view::{TableView, table_window};

mod deal;
pub mod state;
mod turn;

pub use state::MatchState;
pub use turn::{TurnResolver, UnsupportedResolver};

/// A match: participants in initiative order, the deck, and the shared piles.
///
/// The match owns the table and dead piles and the initiative queue; each
/// player owns their own piles. It moves from
/// [`NotStarted`](MatchState::NotStarted) through [`deal`](Self::deal) and
/// [`start`](Self::start) to repeated [`play_turn`](Self::play_turn) calls,
/// and ends once a participant has no cards left.
#[derive(Debug, Clone)]
pub struct Match {
    game_mode: GameMode,
    initiative_queue: VecDeque<Player>,
    deck: Vec<Card>,
    table_pile: Pile,
    dead_pile: Pile,
    started_at: Option<OffsetDateTime>,
    ended_at: Option<OffsetDateTime>,
    options: MatchOptions,
    state: MatchState,
}

impl Match {
    /// Creates a match that has not been dealt yet.
    ///
    /// `players` is the seating order, which becomes the initiative queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of players does not fit the game mode,
    /// or a name is blank or repeated.
    pub fn new(
        game_mode: GameMode,
        players: impl IntoIterator<Item = Player>,
        deck: Vec<Card>,
        options: MatchOptions,
    ) -> Result<Self, ConfigError> {
        let initiative_queue: VecDeque<Player> = players.into_iter().collect();

        let expected = game_mode.participants();
        if initiative_queue.len() != expected {
            return Err(ConfigError::WrongParticipantCount {
                mode: game_mode,
                expected,
                found: initiative_queue.len(),
            });
        }
        for (i, player) in initiative_queue.iter().enumerate() {
            if player.name().trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if initiative_queue
                .iter()
                .skip(i + 1)
                .any(|other| other.name() == player.name())
            {
                return Err(ConfigError::DuplicateName);
            }
        }

        tracing::info!(mode = %game_mode, players = initiative_queue.len(), "created match");

        Ok(Self {
            game_mode,
            initiative_queue,
            deck,
            table_pile: Pile::new(PileLocation::Table),
            dead_pile: Pile::new(PileLocation::Dead),
            started_at: None,
            ended_at: None,
            options,
            state: MatchState::NotStarted,
        })
    }

    /// Returns the game mode.
    #[must_use]
    pub const fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the options and control flags.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns the options and control flags mutably.
    pub const fn options_mut(&mut self) -> &mut MatchOptions {
        &mut self.options
    }

    /// Returns the participants in initiative order.
    #[must_use]
    pub const fn initiative_queue(&self) -> &VecDeque<Player> {
        &self.initiative_queue
    }

    /// Returns the participants in initiative order, mutably.
    pub const fn initiative_queue_mut(&mut self) -> &mut VecDeque<Player> {
        &mut self.initiative_queue
    }

    /// Returns the participant who holds the initiative.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.initiative_queue.front()
    }

    /// Returns the participant with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.initiative_queue.iter().find(|p| p.name() == name)
    }

    /// Returns the participant with the given name, mutably.
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.initiative_queue.iter_mut().find(|p| p.name() == name)
    }

    /// Passes the initiative to the next participant.
    pub fn advance_initiative(&mut self) {
        self.initiative_queue.rotate_left(1);
    }

    /// Reverses the direction of play.
    ///
    /// The current participant keeps the initiative; the rest of the queue
    /// is reversed.
    pub fn reverse_initiative(&mut self) {
        if let Some((_, rest)) = self.initiative_queue.make_contiguous().split_first_mut() {
            rest.reverse();
        }
    }

    /// Returns the undealt cards.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the table pile.
    #[must_use]
    pub const fn table_pile(&self) -> &Pile {
        &self.table_pile
    }

    /// Returns the table pile mutably.
    pub const fn table_pile_mut(&mut self) -> &mut Pile {
        &mut self.table_pile
    }

    /// Returns the dead pile.
    #[must_use]
    pub const fn dead_pile(&self) -> &Pile {
        &self.dead_pile
    }

    /// Returns the dead pile mutably.
    pub const fn dead_pile_mut(&mut self) -> &mut Pile {
        &mut self.dead_pile
    }

    /// Returns when the match started.
    #[must_use]
    pub const fn started_at(&self) -> Option<OffsetDateTime> {
        self.started_at
    }

    /// Returns when the match ended.
    #[must_use]
    pub const fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    /// Computes the table display after `latest_play` using the match options.
    ///
    /// # Errors
    ///
    /// Returns an error if `latest_play` is not on top of the table pile.
    pub fn table_window(&self, latest_play: &[Card]) -> Result<TableView, WindowError> {
        table_window(
            &self.table_pile,
            latest_play,
            self.options.show_previous_play,
            self.options.table_viewport,
            self.options.lookback_depth,
        )
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.game_mode)?;
        match self.started_at {
            Some(at) => write!(
                f,
                "started at {:04}-{:02}-{:02} {:02}h{:02}",
                at.year(),
                u8::from(at.month()),
                at.day(),
                at.hour(),
                at.minute()
            )?,
            None => f.write_str("not started")?,
        }
        f.write_str(" - [")?;
        for (i, player) in self.initiative_queue.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(player.name())?;
        }
        f.write_str("] - Top table card: ")?;
        match self.table_pile.top() {
            Some(card) => write!(f, "{card}")?,
            None => f.write_str("none")?,
        }
        write!(f, " - # Dead: {}", self.dead_pile.len())
    }
}
