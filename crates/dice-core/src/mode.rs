//! Outcome domains and the values they can take.
//!
//! A [`Mode`] picks the active domain: a six-faced die or a two-sided coin.
//! An [`Outcome`] is always tagged with the domain it belongs to so callers
//! can check it against the active mode before committing it.

use crate::cue::CueKind;
use std::fmt;

/// Active outcome domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Six discrete faces, 1..=6.
    Die,
    /// Two discrete sides, heads or tails.
    Coin,
}

impl Mode {
    pub fn all() -> [Mode; 2] {
        [Mode::Die, Mode::Coin]
    }

    /// Number of equally likely outcomes in this domain.
    pub fn cardinality(self) -> usize {
        match self {
            Mode::Die => DieFace::COUNT as usize,
            Mode::Coin => 2,
        }
    }

    /// Resting value shown before the first toss and after a mode switch.
    pub fn default_outcome(self) -> Outcome {
        match self {
            Mode::Die => Outcome::Die(DieFace::ONE),
            Mode::Coin => Outcome::Coin(CoinSide::Heads),
        }
    }

    /// Map a 0-based index onto the domain; `None` when out of range.
    pub fn outcome_at(self, index: usize) -> Option<Outcome> {
        match self {
            Mode::Die => index
                .checked_add(1)
                .and_then(|v| u8::try_from(v).ok())
                .and_then(DieFace::new)
                .map(Outcome::Die),
            Mode::Coin => match index {
                0 => Some(Outcome::Coin(CoinSide::Heads)),
                1 => Some(Outcome::Coin(CoinSide::Tails)),
                _ => None,
            },
        }
    }

    /// Feedback cue played when this mode is triggered.
    pub fn cue(self) -> CueKind {
        match self {
            Mode::Die => CueKind::Roll,
            Mode::Coin => CueKind::Flip,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Die => f.write_str("die"),
            Mode::Coin => f.write_str("coin"),
        }
    }
}

/// A die face, guaranteed to be in 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieFace(u8);

impl DieFace {
    pub const COUNT: u8 = 6;
    pub const ONE: DieFace = DieFace(1);

    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::COUNT).contains(&value).then_some(DieFace(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn label(self) -> &'static str {
        match self {
            CoinSide::Heads => "heads",
            CoinSide::Tails => "tails",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Die(DieFace),
    Coin(CoinSide),
}

impl Outcome {
    /// Domain this value belongs to.
    pub fn mode(self) -> Mode {
        match self {
            Outcome::Die(_) => Mode::Die,
            Outcome::Coin(_) => Mode::Coin,
        }
    }

    /// 0-based position inside the domain; inverse of [`Mode::outcome_at`].
    pub fn index(self) -> usize {
        match self {
            Outcome::Die(face) => face.value() as usize - 1,
            Outcome::Coin(CoinSide::Heads) => 0,
            Outcome::Coin(CoinSide::Tails) => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Die(face) => write!(f, "{}", face.value()),
            Outcome::Coin(side) => f.write_str(side.label()),
        }
    }
}
