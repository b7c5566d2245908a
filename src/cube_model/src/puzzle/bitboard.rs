//! A cube packed into six 64 bit words.
//!
//! Each face keeps its eight outer stickers as one-hot color bytes, starting
//! at the top-left cell and going clockwise around the face:
//!
//! ```text
//! 0 1 2
//! 7 . 3
//! 6 5 4
//! ```
//!
//! so a clockwise quarter turn of the face itself is a 16 bit rotate. The
//! center never moves and is not stored.

use super::RubiksCube;
use crate::{
    face::{Color, Face},
    geometry::{BOUNDARY_STRIPS, Facelet},
};
use std::fmt;

const CENTER: usize = 8;

// Byte index of each (row, col) cell
const CELL_BYTE: [[usize; 3]; 3] = [[0, 1, 2], [7, CENTER, 3], [6, 5, 4]];

// Bits to rotate a face word by for 0..4 clockwise quarter turns
const ROTATIONS: [u32; 4] = [0, 16, 32, 48];

const fn solved_face(face: Face) -> u64 {
    face.solved_color().bit() as u64 * 0x0101_0101_0101_0101
}

const SOLVED_FACES: [u64; 6] = [
    solved_face(Face::Up),
    solved_face(Face::Left),
    solved_face(Face::Front),
    solved_face(Face::Right),
    solved_face(Face::Back),
    solved_face(Face::Down),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitboardCube {
    faces: [u64; 6],
}

impl BitboardCube {
    fn sticker(faces: &[u64; 6], facelet: Facelet) -> u8 {
        faces[facelet.face.index()].to_le_bytes()[CELL_BYTE[facelet.row][facelet.col]]
    }

    fn set_sticker(&mut self, facelet: Facelet, byte: u8) {
        let shift = CELL_BYTE[facelet.row][facelet.col] * 8;
        let face = &mut self.faces[facelet.face.index()];
        *face = (*face & !(0xff_u64 << shift)) | (u64::from(byte) << shift);
    }

    /// Turn `face` by `quarter_turns` clockwise quarter turns.
    fn turn(&mut self, face: Face, quarter_turns: usize) -> &mut Self {
        let old = self.faces;
        let face_index = face.index();
        self.faces[face_index] = old[face_index].rotate_left(ROTATIONS[quarter_turns % 4]);

        let strips = &BOUNDARY_STRIPS[face_index];
        for (k, strip) in strips.iter().enumerate() {
            let target = &strips[(k + quarter_turns) % 4];
            for (&from, &to) in strip.iter().zip(target) {
                self.set_sticker(to, Self::sticker(&old, from));
            }
        }
        self
    }
}

impl RubiksCube for BitboardCube {
    fn solved() -> Self {
        BitboardCube {
            faces: SOLVED_FACES,
        }
    }

    fn color_at(&self, face: Face, row: usize, col: usize) -> Color {
        if CELL_BYTE[row][col] == CENTER {
            return face.solved_color();
        }
        let byte = Self::sticker(&self.faces, Facelet { face, row, col });
        Color::ALL[byte.trailing_zeros() as usize]
    }

    fn is_solved(&self) -> bool {
        self.faces == SOLVED_FACES
    }

    quarter_turn_primitives!(turn);
}

impl Default for BitboardCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl<C: RubiksCube> From<&C> for BitboardCube {
    fn from(cube: &C) -> Self {
        let mut bitboard = BitboardCube { faces: [0; 6] };
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    if CELL_BYTE[row][col] != CENTER {
                        let facelet = Facelet { face, row, col };
                        bitboard.set_sticker(facelet, cube.color_at(face, row, col).bit());
                    }
                }
            }
        }
        bitboard
    }
}

impl fmt::Display for BitboardCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_net(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{moves::parse_moves, puzzle::facelet::FaceletCube};

    #[test]
    fn test_solved_layout() {
        let cube = BitboardCube::solved();
        assert_eq!(cube.faces[Face::Up.index()], 0x0101_0101_0101_0101);
        assert_eq!(cube.faces[Face::Down.index()], 0x2020_2020_2020_2020);
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(cube.color_at(face, row, col), face.solved_color());
                }
            }
        }
    }

    #[test]
    fn test_face_rotation_is_a_rotate() {
        let mut cube = BitboardCube::solved();
        cube.l();
        let front_before = cube.faces[Face::Front.index()];
        cube.f();
        assert_eq!(cube.faces[Face::Front.index()], front_before.rotate_left(16));
        cube.f_prime();
        assert_eq!(cube.faces[Face::Front.index()], front_before);
    }

    #[test]
    fn test_matches_facelet_cube() {
        let moves = parse_moves("R U2 D' B D' L F2 R' U B2 D L'").unwrap();
        let mut facelet = FaceletCube::solved();
        let mut bitboard = BitboardCube::solved();
        for &move_ in &moves {
            facelet.apply_move(move_);
            bitboard.apply_move(move_);
            assert_eq!(facelet.facelets(), bitboard.facelets());
        }
        assert_eq!(BitboardCube::from(&facelet), bitboard);
        assert_eq!(FaceletCube::from(&bitboard), facelet);
    }
}
