//! Match state types.

/// Match lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    /// Created, cards still in the deck.
    NotStarted,
    /// Cards dealt to participants.
    Dealt,
    /// Opening initiative resolved, no play made yet.
    Started,
    /// A play is being resolved.
    AwaitingPlay,
    /// The last play was applied.
    PlayApplied,
    /// A participant has shed every card.
    Ended,
}

impl MatchState {
    /// Returns whether a play may be submitted in this state.
    #[must_use]
    pub const fn accepts_play(self) -> bool {
        matches!(self, Self::Started | Self::AwaitingPlay | Self::PlayApplied)
    }
}
