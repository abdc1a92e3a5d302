//! Location-tagged card piles.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::PileError;

/// Placeholder printed in place of a card that must stay secret.
pub const MASK: char = '▇';

/// Where a pile sits in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileLocation {
    /// A participant's hand, seen only by its owner.
    Private,
    /// A participant's face-up cards.
    Open,
    /// A participant's face-down cards.
    Hidden,
    /// The shared pile cards are played onto.
    Table,
    /// Cards removed from play.
    Dead,
}

impl PileLocation {
    /// Returns the upper-case name of the location.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Private => "PRIVATE",
            Self::Open => "OPEN",
            Self::Hidden => "HIDDEN",
            Self::Table => "TABLE",
            Self::Dead => "DEAD",
        }
    }
}

impl fmt::Display for PileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes `(LOCATION)` padded so pile contents line up across locations.
fn write_tag(f: &mut fmt::Formatter<'_>, location: PileLocation) -> fmt::Result {
    let tag = location.name();
    write!(f, "({tag}){:pad$} ", "", pad = 7usize.saturating_sub(tag.len()))
}

/// An ordered pile of cards at a fixed location.
///
/// The location is chosen at construction and never changes. A sorted pile
/// keeps its cards in ascending power after every insertion.
#[derive(Debug, Clone)]
pub struct Pile {
    location: PileLocation,
    cards: Vec<Card>,
    sorted: bool,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new(location: PileLocation) -> Self {
        Self {
            location,
            cards: Vec::new(),
            sorted: false,
        }
    }

    /// Creates an empty pile that keeps its cards ordered by power.
    #[must_use]
    pub const fn sorted(location: PileLocation) -> Self {
        Self {
            location,
            cards: Vec::new(),
            sorted: true,
        }
    }

    /// Creates an unsorted pile holding `cards` in the given order.
    #[must_use]
    pub fn from_cards(location: PileLocation, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            location,
            cards: cards.into_iter().collect(),
            sorted: false,
        }
    }

    /// Returns the location of the pile.
    #[must_use]
    pub const fn location(&self) -> PileLocation {
        self.location
    }

    /// Returns whether the pile keeps its cards ordered by power.
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns whether any card here can be played on `table`.
    ///
    /// Anything is playable on an empty table. An empty pile has nothing to
    /// play and returns `false`.
    #[must_use]
    pub fn contains_playable_card(&self, table: &Self) -> bool {
        let Some(top) = table.top() else {
            return true;
        };
        self.cards
            .iter()
            .map(Card::power)
            .reduce(f64::max)
            .is_some_and(|power| power >= top.resistance())
    }

    /// Returns the cards that can each be played on `table`, in pile order.
    #[must_use]
    pub fn playable_cards(&self, table: &Self) -> Vec<Card> {
        match table.top() {
            None => self.cards.clone(),
            Some(top) => self
                .cards
                .iter()
                .filter(|card| card.is_playable_on(top))
                .copied()
                .collect(),
        }
    }

    /// Adds cards to the pile.
    ///
    /// An unsorted pile appends them in the given order. A sorted pile
    /// inserts the new cards, weakest first, after every card of equal or
    /// lower power already present.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        if !self.sorted {
            self.cards.extend(cards);
            return;
        }

        let mut incoming: Vec<Card> = cards.into_iter().collect();
        incoming.sort_by(|a, b| a.power().total_cmp(&b.power()));
        for card in incoming {
            let at = self.cards.partition_point(|held| held.power() <= card.power());
            self.cards.insert(at, card);
        }
    }

    /// Removes one copy of each given card.
    ///
    /// Removal is all-or-nothing: if any card is missing the pile is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::CardNotFound`] naming the first card that is not
    /// in the pile.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<(), PileError> {
        let mut remaining = self.cards.clone();
        for card in cards {
            let Some(index) = remaining.iter().position(|held| held == card) else {
                tracing::warn!(%card, location = %self.location, "card not found, removal rolled back");
                return Err(PileError::CardNotFound {
                    card: *card,
                    location: self.location,
                });
            };
            remaining.remove(index);
        }
        self.cards = remaining;
        Ok(())
    }

    /// Removes and returns every card, bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns a view of the pile that keeps its location and size only.
    #[must_use]
    pub fn masked(&self) -> MaskedPile {
        MaskedPile {
            location: self.location,
            len: self.cards.len(),
        }
    }
}

impl PartialEq for Pile {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.cards == other.cards
    }
}

impl Eq for Pile {}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, self.location)?;
        f.write_str("Pile[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// A pile with its card faces hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskedPile {
    /// Location of the pile it was taken from.
    pub location: PileLocation,
    /// Number of cards in that pile.
    pub len: usize,
}

impl fmt::Display for MaskedPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, self.location)?;
        f.write_str("Pile[")?;
        for i in 0..self.len {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{MASK}")?;
        }
        f.write_str("]")
    }
}
