//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the symbol used when printing cards of this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Hearts => '♡',
            Self::Spades => '♠',
            Self::Diamonds => '♢',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two (wildcard).
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten (wildcard).
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, in deck-building order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the printed label of the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the power and resistance of the rank.
    #[must_use]
    pub const fn stats(self) -> CardStats {
        let value = match self {
            Self::Two | Self::Ten => return CardStats::WILDCARD,
            Self::Three => 3.0,
            Self::Four => 4.0,
            Self::Five => 5.0,
            Self::Six => 6.0,
            Self::Seven => 7.0,
            Self::Eight => 8.0,
            Self::Nine => 9.0,
            Self::Jack => 11.0,
            Self::Queen => 12.0,
            Self::King => 13.0,
            Self::Ace => 14.0,
        };
        CardStats {
            power: value,
            resistance: value,
        }
    }

    /// Returns whether the rank can be played on anything and takes anything.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Two | Self::Ten)
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or(CardError::UnknownRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Power and resistance derived from a rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStats {
    /// Highest resistance this card can be played on.
    pub power: f64,
    /// Lowest power a card needs to be played on this one.
    pub resistance: f64,
}

impl CardStats {
    /// Stats shared by the wildcard ranks.
    pub const WILDCARD: Self = Self {
        power: f64::INFINITY,
        resistance: 0.0,
    };
}

/// A playing card.
///
/// Identity is the rank and suit; power and resistance are always derived
/// from the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the power of the card.
    #[must_use]
    pub const fn power(&self) -> f64 {
        self.rank.stats().power
    }

    /// Returns the resistance of the card.
    #[must_use]
    pub const fn resistance(&self) -> f64 {
        self.rank.stats().resistance
    }

    /// Returns whether this card may be played on top of `other`.
    ///
    /// A card is playable when its power reaches the other card's resistance.
    /// The relation is not symmetric: a king is playable on a queen but not
    /// the other way around.
    #[must_use]
    pub fn is_playable_on(&self, other: &Self) -> bool {
        self.power() >= other.resistance()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.label())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds a full, unshuffled deck: every rank of every suit.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    tracing::info!(cards = deck.len(), "generated deck");
    deck
}
