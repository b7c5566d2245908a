use crate::face::Face;
use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The 18 face turns of the 3x3 cube. The discriminant is the move's index
/// into dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    L,
    LPrime,
    L2,
    R,
    RPrime,
    R2,
    U,
    UPrime,
    U2,
    D,
    DPrime,
    D2,
    F,
    FPrime,
    F2,
    B,
    BPrime,
    B2,
}

/// How far a move turns its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Unknown move {0:?}, expected one of L R U D F B optionally followed by ' or 2")]
    UnknownMove(String),
}

impl Turn {
    /// The number of clockwise quarter turns this turn amounts to.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }
}

impl Move {
    pub const COUNT: usize = 18;

    /// All moves in index order.
    pub const ALL: [Move; Move::COUNT] = [
        Move::L,
        Move::LPrime,
        Move::L2,
        Move::R,
        Move::RPrime,
        Move::R2,
        Move::U,
        Move::UPrime,
        Move::U2,
        Move::D,
        Move::DPrime,
        Move::D2,
        Move::F,
        Move::FPrime,
        Move::F2,
        Move::B,
        Move::BPrime,
        Move::B2,
    ];

    // Faces in the order their move groups appear in `Move::ALL`.
    const FACES: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The move turning `face` by `turn`.
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Move {
        let group = match face {
            Face::Left => 0,
            Face::Right => 1,
            Face::Up => 2,
            Face::Down => 3,
            Face::Front => 4,
            Face::Back => 5,
        };
        let offset = match turn {
            Turn::Clockwise => 0,
            Turn::CounterClockwise => 1,
            Turn::Half => 2,
        };
        Move::ALL[group * 3 + offset]
    }

    #[must_use]
    pub const fn face(self) -> Face {
        Move::FACES[self.index() / 3]
    }

    #[must_use]
    pub const fn turn(self) -> Turn {
        match self.index() % 3 {
            0 => Turn::Clockwise,
            1 => Turn::CounterClockwise,
            _ => Turn::Half,
        }
    }

    /// The move undoing this one. Half turns are their own inverse.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::new(self.face(), self.turn().inverse())
    }

    /// The canonical token of the move, eg. `"L'"` for `Move::LPrime`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::L => "L",
            Move::LPrime => "L'",
            Move::L2 => "L2",
            Move::R => "R",
            Move::RPrime => "R'",
            Move::R2 => "R2",
            Move::U => "U",
            Move::UPrime => "U'",
            Move::U2 => "U2",
            Move::D => "D",
            Move::DPrime => "D'",
            Move::D2 => "D2",
            Move::F => "F",
            Move::FPrime => "F'",
            Move::F2 => "F2",
            Move::B => "B",
            Move::BPrime => "B'",
            Move::B2 => "B2",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|move_| move_.name() == s)
            .ok_or_else(|| MoveParseError::UnknownMove(s.to_owned()))
    }
}

/// Parse a whitespace separated move sequence such as `"R U R' U'"`.
///
/// # Errors
///
/// If any token is not one of the 18 canonical move names.
pub fn parse_moves(moves: &str) -> Result<Vec<Move>, MoveParseError> {
    moves.split_whitespace().map(str::parse).collect()
}

/// Render a move sequence as space separated tokens.
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
