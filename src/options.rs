//! Game modes and match configuration options.

use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;
use crate::pile::PileLocation;

/// Cards dealt to each pile at the start of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealLayout {
    /// Cards dealt to each participant's private pile.
    pub private: usize,
    /// Cards dealt to each participant's open pile.
    pub open: usize,
    /// Cards dealt to each participant's hidden pile.
    pub hidden: usize,
    /// Cards sent to the dead pile after every participant is served.
    pub dead: usize,
}

impl DealLayout {
    /// Returns the number of cards dealt to `location`.
    ///
    /// Per-participant locations give the size for a single participant.
    #[must_use]
    pub const fn size(&self, location: PileLocation) -> usize {
        match location {
            PileLocation::Private => self.private,
            PileLocation::Open => self.open,
            PileLocation::Hidden => self.hidden,
            PileLocation::Dead => self.dead,
            PileLocation::Table => 0,
        }
    }

    /// Returns the cards a single participant receives.
    #[must_use]
    pub const fn per_participant(&self) -> usize {
        self.private + self.open + self.hidden
    }

    /// Returns the cards needed to deal to `participants` participants.
    #[must_use]
    pub const fn cards_needed(&self, participants: usize) -> usize {
        participants * self.per_participant() + self.dead
    }
}

/// The two supported match configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Three players, each on their own.
    FatalThreeWay,
    /// Two teams of two players.
    FullMonty,
}

impl GameMode {
    /// Returns the short code players type to pick the mode.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FatalThreeWay => "FTW",
            Self::FullMonty => "FM",
        }
    }

    /// Returns the number of participants in the initiative queue.
    #[must_use]
    pub const fn participants(self) -> usize {
        match self {
            Self::FatalThreeWay => 3,
            Self::FullMonty => 4,
        }
    }

    /// Returns whether participants are seated in teams.
    #[must_use]
    pub const fn is_team_based(self) -> bool {
        matches!(self, Self::FullMonty)
    }

    /// Returns the deal layout for the mode.
    ///
    /// Fatal Three Way deals 7 private, 5 open and 5 hidden cards and buries
    /// the one card left over. Full Monty deals 5, 4 and 4, using the whole deck.
    #[must_use]
    pub const fn layout(self) -> DealLayout {
        match self {
            Self::FatalThreeWay => DealLayout {
                private: 7,
                open: 5,
                hidden: 5,
                dead: 1,
            },
            Self::FullMonty => DealLayout {
                private: 5,
                open: 4,
                hidden: 4,
                dead: 0,
            },
        }
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "FTW" => Ok(Self::FatalThreeWay),
            "FM" => Ok(Self::FullMonty),
            _ => Err(ConfigError::UnknownGameMode),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FatalThreeWay => "FATAL THREE WAY",
            Self::FullMonty => "FULL MONTY",
        })
    }
}

/// Number of slots in the table display.
pub const TABLE_VIEWPORT: usize = 6;

/// Cards below the latest play that may be revealed.
pub const LOOKBACK_DEPTH: usize = 3;

/// Configuration options and control flags for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cartamayor::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_show_previous_play(true)
///     .with_table_viewport(8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Whether a run of `2`s under the latest play is revealed.
    pub show_previous_play: bool,
    /// Number of slots in the table display.
    pub table_viewport: usize,
    /// Maximum number of cards under the latest play that may be revealed.
    pub lookback_depth: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            show_previous_play: false,
            table_viewport: TABLE_VIEWPORT,
            lookback_depth: LOOKBACK_DEPTH,
        }
    }
}

impl MatchOptions {
    /// Sets whether a run of `2`s under the latest play is revealed.
    ///
    /// # Example
    ///
    /// ```
    /// use cartamayor::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_show_previous_play(true);
    /// assert!(options.show_previous_play);
    /// ```
    #[must_use]
    pub const fn with_show_previous_play(mut self, show: bool) -> Self {
        self.show_previous_play = show;
        self
    }

    /// Sets the number of slots in the table display.
    ///
    /// # Example
    ///
    /// ```
    /// use cartamayor::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_table_viewport(4);
    /// assert_eq!(options.table_viewport, 4);
    /// ```
    #[must_use]
    pub const fn with_table_viewport(mut self, slots: usize) -> Self {
        self.table_viewport = slots;
        self
    }

    /// Sets how many cards under the latest play may be revealed.
    ///
    /// # Example
    ///
    /// ```
    /// use cartamayor::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_lookback_depth(1);
    /// assert_eq!(options.lookback_depth, 1);
    /// ```
    #[must_use]
    pub const fn with_lookback_depth(mut self, depth: usize) -> Self {
        self.lookback_depth = depth;
        self
    }
}
