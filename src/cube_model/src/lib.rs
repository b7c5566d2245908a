//! A representation-agnostic model of the 3x3 Rubik's Cube.
//!
//! [`RubiksCube`] is the contract every cube representation implements.
//! Representations only supply facelet lookup and the 18 face turns; the
//! move algebra, solved check, printing, and the [`CornerEncoding`] used to
//! key corner pattern databases are shared. Two representations are
//! provided, [`FaceletCube`] and [`BitboardCube`].

#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]

pub mod corner;
pub mod face;
pub mod geometry;
pub mod moves;
pub mod puzzle;

pub use corner::CornerEncoding;
pub use face::{Color, Face};
pub use moves::{Move, MoveParseError, Turn, format_moves, parse_moves};
pub use puzzle::{CubeError, RubiksCube, bitboard::BitboardCube, facelet::FaceletCube};

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}
