//! A cube stored as a plain `[face][row][col]` array of colors.

use super::RubiksCube;
use crate::{
    face::{Color, Face},
    geometry::{BOUNDARY_STRIPS, rotate_cell},
};
use std::fmt;

/// The most direct representation: all 54 facelets, centers included, in
/// the (face, row, column) frame the contract is defined in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    facelets: [[[Color; 3]; 3]; 6],
}

impl FaceletCube {
    /// Turn `face` by `quarter_turns` clockwise quarter turns.
    fn turn(&mut self, face: Face, quarter_turns: usize) -> &mut Self {
        let old = self.facelets;
        let face_index = face.index();

        for row in 0..3 {
            for col in 0..3 {
                let (new_row, new_col) = rotate_cell(row, col, quarter_turns);
                self.facelets[face_index][new_row][new_col] = old[face_index][row][col];
            }
        }

        let strips = &BOUNDARY_STRIPS[face_index];
        for (k, strip) in strips.iter().enumerate() {
            let target = &strips[(k + quarter_turns) % 4];
            for (from, to) in strip.iter().zip(target) {
                self.facelets[to.face.index()][to.row][to.col] =
                    old[from.face.index()][from.row][from.col];
            }
        }
        self
    }
}

impl RubiksCube for FaceletCube {
    fn solved() -> Self {
        FaceletCube {
            facelets: Face::ALL.map(|face| [[face.solved_color(); 3]; 3]),
        }
    }

    fn color_at(&self, face: Face, row: usize, col: usize) -> Color {
        self.facelets[face.index()][row][col]
    }

    fn facelets(&self) -> [[[Color; 3]; 3]; 6] {
        self.facelets
    }

    quarter_turn_primitives!(turn);
}

impl Default for FaceletCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl<C: RubiksCube> From<&C> for FaceletCube {
    fn from(cube: &C) -> Self {
        FaceletCube {
            facelets: cube.facelets(),
        }
    }
}

impl fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_net(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_moves;

    #[test]
    fn test_u_cycles_top_rows() {
        let mut cube = FaceletCube::solved();
        cube.u();
        for col in 0..3 {
            assert_eq!(cube.color_at(Face::Left, 0, col), Color::Red);
            assert_eq!(cube.color_at(Face::Front, 0, col), Color::Blue);
            assert_eq!(cube.color_at(Face::Right, 0, col), Color::Orange);
            assert_eq!(cube.color_at(Face::Back, 0, col), Color::Green);
            assert_eq!(cube.color_at(Face::Front, 1, col), Color::Red);
        }
    }

    #[test]
    fn test_r_moves_front_column_up() {
        let mut cube = FaceletCube::solved();
        cube.r();
        for row in 0..3 {
            assert_eq!(cube.color_at(Face::Up, row, 2), Color::Red);
            assert_eq!(cube.color_at(Face::Back, row, 0), Color::White);
            assert_eq!(cube.color_at(Face::Down, row, 2), Color::Orange);
            assert_eq!(cube.color_at(Face::Front, row, 2), Color::Yellow);
            assert_eq!(cube.color_at(Face::Up, row, 1), Color::White);
        }
    }

    #[test]
    fn test_face_rotation_follows_stickers() {
        // After F, the U sticker of UFL sits on R at UFR.
        let mut cube = FaceletCube::solved();
        cube.l();
        assert_eq!(cube.color_at(Face::Front, 0, 0), Color::White);
        cube.f();
        assert_eq!(cube.color_at(Face::Right, 0, 0), Color::Orange);
        assert_eq!(cube.color_at(Face::Front, 0, 2), Color::White);
        assert_eq!(cube.color_at(Face::Front, 2, 2), Color::Red);
    }

    #[test]
    fn test_conversion_keeps_state() {
        let mut cube = FaceletCube::solved();
        cube.apply_moves(&parse_moves("R U2 D' B D'").unwrap());
        let copy = FaceletCube::from(&cube);
        assert_eq!(copy, cube);
        assert_eq!(copy.to_string(), cube.net());
    }
}
