use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DealError;
use crate::pile::PileLocation;

use super::{Match, MatchState};

impl Match {
    /// Shuffles the deck and deals it out according to the game mode.
    ///
    /// Each participant, in initiative order, receives the next slice of the
    /// deck into their private pile, then their open pile, then their hidden
    /// pile. The mode's dead allotment is taken next. Dealt cards leave the
    /// deck; anything not dealt stays there.
    ///
    /// # Errors
    ///
    /// Returns an error if the match was already dealt, or the deck is too
    /// small for the layout. Nothing is changed on error.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DealError> {
        if self.state != MatchState::NotStarted {
            return Err(DealError::InvalidState);
        }

        let layout = self.game_mode.layout();
        let needed = layout.cards_needed(self.initiative_queue.len());
        if self.deck.len() < needed {
            return Err(DealError::NotEnoughCards {
                needed,
                available: self.deck.len(),
            });
        }

        self.deck.shuffle(rng);
        tracing::debug!(deck = ?self.deck, "shuffled deck");

        let mut dealt = self.deck.drain(..needed);
        for player in &mut self.initiative_queue {
            for location in [PileLocation::Private, PileLocation::Open, PileLocation::Hidden] {
                if let Some(pile) = player.pile_mut(location) {
                    pile.add_cards(dealt.by_ref().take(layout.size(location)));
                }
            }
            tracing::debug!(
                player = player.name(),
                private = player.private().len(),
                open = player.open().len(),
                hidden = player.hidden().len(),
                "dealt cards"
            );
        }
        self.dead_pile.add_cards(dealt.by_ref().take(layout.dead));
        drop(dealt);

        self.state = MatchState::Dealt;
        Ok(())
    }
}
