//! Players and teams.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::pile::{Pile, PileLocation};
use crate::view::PileView;

/// Who is looking at a player's piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// The player themselves: private cards are visible.
    Owner,
    /// Anyone else: only open cards are visible.
    Opponent,
}

/// A participant in a match.
///
/// The name identifies the player and never changes; the three piles are
/// filled by the deal and emptied by play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    private: Pile,
    open: Pile,
    hidden: Pile,
}

impl Player {
    /// Creates a player with three empty piles.
    ///
    /// The private pile is kept sorted by power.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            private: Pile::sorted(PileLocation::Private),
            open: Pile::new(PileLocation::Open),
            hidden: Pile::new(PileLocation::Hidden),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the private pile.
    #[must_use]
    pub const fn private(&self) -> &Pile {
        &self.private
    }

    /// Returns the open pile.
    #[must_use]
    pub const fn open(&self) -> &Pile {
        &self.open
    }

    /// Returns the hidden pile.
    #[must_use]
    pub const fn hidden(&self) -> &Pile {
        &self.hidden
    }

    /// Returns the pile at `location`, if the player has one there.
    #[must_use]
    pub const fn pile(&self, location: PileLocation) -> Option<&Pile> {
        match location {
            PileLocation::Private => Some(&self.private),
            PileLocation::Open => Some(&self.open),
            PileLocation::Hidden => Some(&self.hidden),
            PileLocation::Table | PileLocation::Dead => None,
        }
    }

    /// Returns the pile at `location` mutably, if the player has one there.
    pub const fn pile_mut(&mut self, location: PileLocation) -> Option<&mut Pile> {
        match location {
            PileLocation::Private => Some(&mut self.private),
            PileLocation::Open => Some(&mut self.open),
            PileLocation::Hidden => Some(&mut self.hidden),
            PileLocation::Table | PileLocation::Dead => None,
        }
    }

    /// Returns the location the player must play from next.
    ///
    /// That is the first non-empty pile among private, open and hidden; an
    /// empty-handed player is pointed at the hidden pile.
    #[must_use]
    pub fn source_location(&self) -> PileLocation {
        if !self.private.is_empty() {
            PileLocation::Private
        } else if !self.open.is_empty() {
            PileLocation::Open
        } else {
            PileLocation::Hidden
        }
    }

    /// Returns the pile the player must play from next.
    #[must_use]
    pub fn source(&self) -> &Pile {
        match self.source_location() {
            PileLocation::Private => &self.private,
            PileLocation::Open => &self.open,
            _ => &self.hidden,
        }
    }

    /// Returns the pile the player must play from next, mutably.
    pub fn source_mut(&mut self) -> &mut Pile {
        match self.source_location() {
            PileLocation::Private => &mut self.private,
            PileLocation::Open => &mut self.open,
            _ => &mut self.hidden,
        }
    }

    /// Returns the cards the player may offer as a play on `table`.
    ///
    /// Hidden cards cannot be judged before they are flipped, so when the
    /// source is the hidden pile every card in it is offered. Whoever resolves
    /// the turn must check legality once the card is revealed.
    #[must_use]
    pub fn playable_cards(&self, table: &Pile) -> Vec<Card> {
        let source = self.source();
        if source.location() == PileLocation::Hidden {
            source.cards().to_vec()
        } else {
            source.playable_cards(table)
        }
    }

    /// Returns whether the source pile really holds a card playable on `table`.
    #[must_use]
    pub fn has_playable_cards(&self, table: &Pile) -> bool {
        self.source().contains_playable_card(table)
    }

    /// Returns the number of cards the player still holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.private.len() + self.open.len() + self.hidden.len()
    }

    /// Returns whether the player has shed every card.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.card_count() == 0
    }

    /// Returns the player's piles as seen from `perspective`.
    ///
    /// The order is open, hidden, private. Hidden cards are always masked;
    /// private cards are masked for opponents.
    #[must_use]
    pub fn pile_views(&self, perspective: Perspective) -> [PileView; 3] {
        [
            PileView::revealed(&self.open),
            PileView::masked(&self.hidden),
            match perspective {
                Perspective::Owner => PileView::revealed(&self.private),
                Perspective::Opponent => PileView::masked(&self.private),
            },
        ]
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}, {}",
            self.name, self.private, self.open, self.hidden
        )
    }
}

/// Two players sharing a name, used to seat a team match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    players: [Player; 2],
}

impl Team {
    /// Creates a team.
    #[must_use]
    pub fn new(name: impl Into<String>, first: Player, second: Player) -> Self {
        Self {
            name: name.into(),
            players: [first, second],
        }
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the two members.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Consumes the team and returns its members.
    #[must_use]
    pub fn into_players(self) -> [Player; 2] {
        self.players
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = &self.players;
        write!(f, "{}: {} | {}", self.name, first.name(), second.name())
    }
}
