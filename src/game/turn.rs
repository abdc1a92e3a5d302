use alloc::collections::VecDeque;

use time::OffsetDateTime;

use crate::card::Card;
use crate::error::{MatchError, TurnError};
use crate::participant::Player;

use super::{Match, MatchState};

/// Rules that decide the opening order and what a play does to a match.
///
/// The match handles lifecycle bookkeeping around each call; the resolver
/// moves cards and rotates the queue. [`Match::play_from_source`],
/// [`Match::advance_initiative`] and [`Match::reverse_initiative`] are the
/// building blocks a resolver is expected to use.
pub trait TurnResolver {
    /// Orders the initiative queue before the first play.
    ///
    /// The default keeps the seating order.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening order cannot be decided.
    fn resolve_opening(&mut self, queue: &mut VecDeque<Player>) -> Result<(), TurnError> {
        let _ = queue;
        Ok(())
    }

    /// Applies `cards`, chosen by the participant holding the initiative.
    ///
    /// Cards taken from a hidden pile are offered without knowing their
    /// legality, so the resolver must check them once they are revealed.
    ///
    /// # Errors
    ///
    /// Returns an error if the play is not allowed. The resolver should leave
    /// the match untouched in that case.
    fn resolve_play(&mut self, game: &mut Match, cards: &[Card]) -> Result<(), TurnError>;
}

/// Resolver used until real turn rules are plugged in.
///
/// Keeps the seating order and rejects every play as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedResolver;

impl TurnResolver for UnsupportedResolver {
    fn resolve_play(&mut self, _game: &mut Match, _cards: &[Card]) -> Result<(), TurnError> {
        Err(TurnError::Unsupported("turn resolution"))
    }
}

impl Match {
    /// Starts a dealt match at `at` and resolves the opening order.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has not been dealt, was already started,
    /// or the resolver fails.
    pub fn start<R: TurnResolver + ?Sized>(
        &mut self,
        resolver: &mut R,
        at: OffsetDateTime,
    ) -> Result<(), TurnError> {
        if self.state != MatchState::Dealt {
            return Err(MatchError::InvalidState { state: self.state }.into());
        }

        resolver.resolve_opening(&mut self.initiative_queue)?;
        self.started_at = Some(at);
        self.state = MatchState::Started;

        tracing::info!(mode = %self.game_mode, "match started");
        Ok(())
    }

    /// Submits a play for the participant holding the initiative.
    ///
    /// On success the match is in [`PlayApplied`](MatchState::PlayApplied),
    /// or [`Ended`](MatchState::Ended) at `at` if some participant has no
    /// cards left. On failure it waits in
    /// [`AwaitingPlay`](MatchState::AwaitingPlay) for another attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not accepting plays or the resolver
    /// rejects the play.
    pub fn play_turn<R: TurnResolver + ?Sized>(
        &mut self,
        resolver: &mut R,
        cards: &[Card],
        at: OffsetDateTime,
    ) -> Result<MatchState, TurnError> {
        if !self.state.accepts_play() {
            return Err(MatchError::InvalidState { state: self.state }.into());
        }

        self.state = MatchState::AwaitingPlay;
        resolver.resolve_play(self, cards)?;
        if self.state == MatchState::Ended {
            return Ok(self.state);
        }
        self.state = MatchState::PlayApplied;

        if self.initiative_queue.iter().any(Player::is_out) {
            self.end(at)?;
        }
        Ok(self.state)
    }

    /// Ends a started match at `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has not started or already ended.
    pub fn end(&mut self, at: OffsetDateTime) -> Result<(), MatchError> {
        if matches!(
            self.state,
            MatchState::NotStarted | MatchState::Dealt | MatchState::Ended
        ) {
            return Err(MatchError::InvalidState { state: self.state });
        }

        self.ended_at = Some(at);
        self.state = MatchState::Ended;

        let winner = self
            .initiative_queue
            .iter()
            .find(|player| player.is_out())
            .map(Player::name);
        tracing::info!(?winner, "match ended");
        Ok(())
    }

    /// Moves `cards` from the current participant's source pile onto the table.
    ///
    /// Legality is not checked here.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is empty, the queue is empty, or a card is
    /// not in the source pile. The piles are unchanged on error.
    pub fn play_from_source(&mut self, cards: &[Card]) -> Result<(), TurnError> {
        if cards.is_empty() {
            return Err(TurnError::EmptyPlay);
        }
        let player = self
            .initiative_queue
            .front_mut()
            .ok_or(MatchError::NoParticipants)?;
        player.source_mut().remove_cards(cards)?;
        self.table_pile.add_cards(cards.iter().copied());
        Ok(())
    }
}
