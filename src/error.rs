use std::fmt;

use super::fictitious_play::Phase;

#[derive(Debug)]
pub enum Error {
    /// The bid grid `[0, x)` is empty.
    InvalidBidSpace(usize),
    TooFewPlayers(usize),
    /// Tie coefficients `C(n - 1, j)` would overflow.
    TooManyPlayers(usize),
    /// `(slot, players)`
    InvalidStrongSlot(usize, usize),
    /// `(weak_upper, bid_space)`
    InvalidWeakUpper(usize, usize),
    /// A valuation vector whose length differs from the player count.
    /// `(expected, actual)`
    ValueCount(usize, usize),
    /// A lifecycle operation was attempted in the wrong phase.
    Phase { expected: Phase, actual: Phase },
    UnknownPreset(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBidSpace(x) => write!(f, "bid space must be positive, got {}", x),
            Error::TooFewPlayers(n) => write!(f, "at least 2 players are required, got {}", n),
            Error::TooManyPlayers(n) => write!(
                f,
                "at most {} players are supported, got {}",
                super::rule::MAX_PLAYERS,
                n
            ),
            Error::InvalidStrongSlot(slot, n) => {
                write!(f, "strong bidder slot {} is out of range for {} players", slot, n)
            }
            Error::InvalidWeakUpper(upper, x) => {
                write!(f, "weak bidder upper bound {} exceeds bid space {}", upper, x)
            }
            Error::ValueCount(expected, actual) => {
                write!(f, "expected {} valuations, got {}", expected, actual)
            }
            Error::Phase { expected, actual } => {
                write!(f, "engine is {:?}, operation requires {:?}", actual, expected)
            }
            Error::UnknownPreset(name) => write!(f, "unknown preset: {}", name),
            Error::Io(e) => write!(f, "failed to read file: {}", e),
            Error::Json(e) => write!(f, "failed to deserialize json: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
