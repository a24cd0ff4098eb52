//! Move tokens, algorithms, and their inverses.
//!
//! Grammar: a move is a face letter (`U D F B L R`) optionally followed by
//! `'` (counter-clockwise) or `2` (half turn). An algorithm is a
//! whitespace-separated list of moves.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::facelet::Face;

/// How far a face is turned, in clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    Double,
    CounterClockwise,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::Double, Turn::CounterClockwise];

    /// Number of clockwise quarter turns (1, 2 or 3).
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Double => Turn::Double,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::CounterClockwise => "'",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move")]
    Empty,
    #[error("Unknown face in move {token:?}, expected one of U D F B L R")]
    UnknownFace { token: String },
    #[error("Unknown suffix in move {token:?}, expected nothing, ' or 2")]
    UnknownSuffix { token: String },
    #[error("A multiple of four quarter turns of {face:?} is not a move")]
    IdentityTurn { face: Face },
}

/// A single face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Builds a move from a clockwise quarter-turn count, taken modulo 4.
    ///
    /// # Errors
    ///
    /// Returns `MoveParseError::IdentityTurn` when the count is a multiple of
    /// four, since that leaves the cube unchanged and has no notation.
    pub fn from_quarter_turns(face: Face, quarter_turns: u32) -> Result<Self, MoveParseError> {
        let turn = match quarter_turns % 4 {
            1 => Turn::Clockwise,
            2 => Turn::Double,
            3 => Turn::CounterClockwise,
            _ => return Err(MoveParseError::IdentityTurn { face }),
        };
        Ok(Self { face, turn })
    }

    /// The move that undoes this one: `X -> X'`, `X' -> X`, `X2 -> X2`.
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(MoveParseError::Empty)?;
        let face = Face::from_letter(letter).ok_or_else(|| MoveParseError::UnknownFace {
            token: token.to_string(),
        })?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" => Turn::Double,
            "'" => Turn::CounterClockwise,
            _ => {
                return Err(MoveParseError::UnknownSuffix {
                    token: token.to_string(),
                })
            }
        };
        Ok(Self { face, turn })
    }
}

/// Returns the notation of the inverse of a single move token.
///
/// # Errors
///
/// Returns the parse error if `token` is not a valid move.
pub fn inverse_notation(token: &str) -> Result<String, MoveParseError> {
    Ok(token.trim().parse::<Move>()?.inverse().to_string())
}

/// Reverses a move log and inverts every move in it.
///
/// Applying the result undoes exactly the permutation the log produced. It is
/// not a solver: it only restores the solved state when the log covers every
/// move made since the cube was last solved.
pub fn history_inverse(log: &[Move]) -> Algorithm {
    Algorithm(log.iter().rev().map(|mv| mv.inverse()).collect())
}

/// An ordered sequence of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Algorithm(pub Vec<Move>);

impl Algorithm {
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The algorithm that undoes this one.
    pub fn inverse(&self) -> Algorithm {
        history_inverse(&self.0)
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Algorithm {
    type Err = MoveParseError;

    /// Parses every token, failing on the first malformed one.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Move>, _>>()
            .map(Algorithm)
    }
}
