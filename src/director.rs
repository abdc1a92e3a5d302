//! Match orchestration and rendering queries.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::OffsetDateTime;

use crate::card::{Card, build_deck};
use crate::error::{ConfigError, DirectorError};
use crate::game::{Match, MatchState, TurnResolver, UnsupportedResolver};
use crate::options::{GameMode, MatchOptions};
use crate::participant::{Perspective, Player, Team};
use crate::sync::Mutex;
use crate::view::{PileView, TableView};

/// How participants are seated for a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seating {
    /// Every player on their own, in seating order.
    Solo(Vec<Player>),
    /// Two teams of two.
    Teams([Team; 2]),
}

impl Seating {
    /// Returns the initiative order for `mode`.
    ///
    /// Teams alternate seats: first of each team, then second of each team.
    fn into_queue(self, mode: GameMode) -> Result<Vec<Player>, ConfigError> {
        match (mode.is_team_based(), self) {
            (false, Self::Solo(players)) => Ok(players),
            (true, Self::Teams([first, second])) => {
                if first.name().trim().is_empty() || second.name().trim().is_empty() {
                    return Err(ConfigError::EmptyName);
                }
                if first.name() == second.name() {
                    return Err(ConfigError::DuplicateName);
                }
                let [a1, a2] = first.into_players();
                let [b1, b2] = second.into_players();
                Ok(alloc::vec![a1, b1, a2, b2])
            }
            _ => Err(ConfigError::SeatingMismatch { mode }),
        }
    }
}

/// Runs a single match at a time and answers queries about it.
///
/// All access to the match goes through one lock, so a shared director has a
/// single writer per match.
pub struct Director {
    /// Options applied to new matches.
    pub options: MatchOptions,
    /// The match in progress, if any.
    pub current: Mutex<Option<Match>>,
    /// Rules for the opening order and for each play.
    resolver: Mutex<Box<dyn TurnResolver + Send>>,
    /// Random number generator used for dealing.
    rng: Mutex<ChaCha8Rng>,
}

impl Director {
    /// Creates a director with the given seed and no match.
    ///
    /// Plays are rejected as unsupported until a resolver is supplied with
    /// [`with_resolver`](Self::with_resolver).
    ///
    /// # Example
    ///
    /// ```
    /// use cartamayor::{Director, MatchOptions};
    ///
    /// let director = Director::new(MatchOptions::default(), 42);
    /// assert!(director.state().is_none());
    /// ```
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        Self {
            options,
            current: Mutex::new(None),
            resolver: Mutex::new(Box::new(UnsupportedResolver)),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a director around an existing match.
    #[must_use]
    pub fn from_match(game: Match, seed: u64) -> Self {
        let director = Self::new(*game.options(), seed);
        *director.current.lock() = Some(game);
        director
    }

    /// Replaces the turn resolver.
    #[must_use]
    pub fn with_resolver(self, resolver: impl TurnResolver + Send + 'static) -> Self {
        *self.resolver.lock() = Box::new(resolver);
        self
    }

    /// Consumes the director and returns its match.
    #[must_use]
    pub fn into_match(self) -> Option<Match> {
        self.current.into_inner()
    }

    fn with_match<T>(
        &self,
        f: impl FnOnce(&mut Match) -> Result<T, DirectorError>,
    ) -> Result<T, DirectorError> {
        let mut current = self.current.lock();
        let game = current.as_mut().ok_or(ConfigError::NoMatch)?;
        f(game)
    }

    /// Creates, deals and starts a match, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the seating does not fit `mode`, or dealing or
    /// starting fails. The previous match is kept on error.
    pub fn start_match_at(
        &self,
        mode: GameMode,
        seating: Seating,
        at: OffsetDateTime,
    ) -> Result<(), DirectorError> {
        let players = seating.into_queue(mode)?;
        let mut game = Match::new(mode, players, build_deck(), self.options)?;
        game.deal(&mut *self.rng.lock())?;
        game.start(&mut **self.resolver.lock(), at)?;

        *self.current.lock() = Some(game);
        Ok(())
    }

    /// Creates, deals and starts a match now.
    ///
    /// # Errors
    ///
    /// See [`start_match_at`](Self::start_match_at).
    #[cfg(feature = "std")]
    pub fn start_match(&self, mode: GameMode, seating: Seating) -> Result<(), DirectorError> {
        self.start_match_at(mode, seating, OffsetDateTime::now_utc())
    }

    /// Returns the state of the current match.
    #[must_use]
    pub fn state(&self) -> Option<MatchState> {
        self.current.lock().as_ref().map(Match::state)
    }

    /// Returns the name of the participant holding the initiative.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is set.
    pub fn next_player(&self) -> Result<String, DirectorError> {
        self.with_match(|game| {
            Ok(game
                .current_player()
                .map(|player| player.name().to_string())
                .unwrap_or_default())
        })
    }

    /// Sets the control flag that reveals a run of `2`s under the latest play.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is set.
    pub fn set_show_previous_play(&self, show: bool) -> Result<(), DirectorError> {
        self.with_match(|game| {
            game.options_mut().show_previous_play = show;
            Ok(())
        })
    }

    /// Returns the table display after `latest_play`.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is set or `latest_play` is not on top
    /// of the table pile.
    pub fn table_display(&self, latest_play: &[Card]) -> Result<TableView, DirectorError> {
        self.with_match(|game| Ok(game.table_window(latest_play)?))
    }

    /// Returns a player's piles as seen from `perspective`.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is set or no player has that name.
    pub fn player_state(
        &self,
        name: &str,
        perspective: Perspective,
    ) -> Result<[PileView; 3], DirectorError> {
        self.with_match(|game| {
            game.player(name)
                .map(|player| player.pile_views(perspective))
                .ok_or_else(|| ConfigError::UnknownPlayer.into())
        })
    }

    /// Returns a one-line summary of the current match.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is set.
    pub fn summary(&self) -> Result<String, DirectorError> {
        self.with_match(|game| Ok(game.to_string()))
    }

    /// Submits a play for the participant holding the initiative.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is set or the play is rejected.
    pub fn play_turn_at(
        &self,
        cards: &[Card],
        at: OffsetDateTime,
    ) -> Result<MatchState, DirectorError> {
        let mut resolver = self.resolver.lock();
        self.with_match(|game| Ok(game.play_turn(&mut **resolver, cards, at)?))
    }

    /// Submits a play now.
    ///
    /// # Errors
    ///
    /// See [`play_turn_at`](Self::play_turn_at).
    #[cfg(feature = "std")]
    pub fn play_turn(&self, cards: &[Card]) -> Result<MatchState, DirectorError> {
        self.play_turn_at(cards, OffsetDateTime::now_utc())
    }
}
