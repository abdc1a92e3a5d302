//! Renderer-facing views of piles and of the table.
//!
//! Views never borrow the match: they copy out the revealed cards and replace
//! everything the viewer may not see with [`CardSlot::Masked`].

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};
use crate::error::WindowError;
use crate::pile::{MASK, Pile, PileLocation};

/// One position in a view: a face-up card or a face-down placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    /// A card the viewer may see.
    Revealed(Card),
    /// A card the viewer may not see.
    Masked,
}

impl CardSlot {
    /// Returns the card, if revealed.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Revealed(card) => Some(*card),
            Self::Masked => None,
        }
    }
}

impl From<Card> for CardSlot {
    fn from(card: Card) -> Self {
        Self::Revealed(card)
    }
}

impl fmt::Display for CardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revealed(card) => write!(f, "{card}"),
            Self::Masked => write!(f, "{MASK}"),
        }
    }
}

/// A participant pile as a renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PileView {
    /// Location of the pile.
    pub location: PileLocation,
    /// One slot per card, bottom first.
    pub slots: Vec<CardSlot>,
}

impl PileView {
    /// Shows every card of `pile`.
    #[must_use]
    pub fn revealed(pile: &Pile) -> Self {
        Self {
            location: pile.location(),
            slots: pile.cards().iter().copied().map(CardSlot::Revealed).collect(),
        }
    }

    /// Hides every card of `pile`, keeping its size.
    #[must_use]
    pub fn masked(pile: &Pile) -> Self {
        let masked = pile.masked();
        Self {
            location: masked.location,
            slots: alloc::vec![CardSlot::Masked; masked.len],
        }
    }
}

/// The bounded table display produced by [`table_window`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Number of cards on the table, including the latest play.
    pub pile_len: usize,
    /// Slots from the top of the table down, never more than `viewport`.
    pub slots: Vec<CardSlot>,
    /// Size of the display the window was computed for.
    pub viewport: usize,
}

impl TableView {
    /// Returns the revealed cards, top first.
    #[must_use]
    pub fn revealed(&self) -> Vec<Card> {
        self.slots.iter().filter_map(CardSlot::card).collect()
    }

    /// Returns the slots filled out to the full viewport with placeholders.
    #[must_use]
    pub fn padded(&self) -> Vec<CardSlot> {
        let mut slots = self.slots.clone();
        slots.resize(self.viewport.max(slots.len()), CardSlot::Masked);
        slots
    }
}

/// Computes what a viewer may see of the table after `latest_play`.
///
/// `table` must already hold the latest play on top. The play itself is
/// always shown, most recent card first. Below it, up to `lookback` older
/// cards are revealed while they continue the run on top: cards of the
/// same rank as the last card played, or, when `reveal_chained_wildcards` is
/// set, `2`s. Older cards are masked and the result holds at most `viewport`
/// slots.
///
/// # Errors
///
/// Returns [`WindowError::PlayNotOnTable`] if the top of `table` is not
/// `latest_play`.
pub fn table_window(
    table: &Pile,
    latest_play: &[Card],
    reveal_chained_wildcards: bool,
    viewport: usize,
    lookback: usize,
) -> Result<TableView, WindowError> {
    let cards = table.cards();
    let split = cards
        .len()
        .checked_sub(latest_play.len())
        .ok_or(WindowError::PlayNotOnTable)?;
    let (history, on_top) = cards.split_at(split);
    if on_top != latest_play {
        return Err(WindowError::PlayNotOnTable);
    }

    let mut slots: Vec<CardSlot> = latest_play
        .iter()
        .rev()
        .copied()
        .map(CardSlot::Revealed)
        .collect();

    let anchor = latest_play.last().map(Card::rank);
    let continues_run = |card: &Card| {
        if reveal_chained_wildcards {
            card.rank() == Rank::Two
        } else {
            anchor == Some(card.rank())
        }
    };

    let mut revealed_history = 0;
    for card in history.iter().rev().take(lookback) {
        if !continues_run(card) {
            break;
        }
        slots.push(CardSlot::Revealed(*card));
        revealed_history += 1;
    }

    let older = history.len() - revealed_history;
    let padding = viewport.saturating_sub(slots.len()).min(older);
    slots.extend(core::iter::repeat_n(CardSlot::Masked, padding));
    slots.truncate(viewport);

    Ok(TableView {
        pile_len: cards.len(),
        slots,
        viewport,
    })
}
