use crate::{
    face::{Color, Face},
    moves::{Move, format_moves},
};
use itertools::Itertools;
use log::{debug, trace};
use std::fmt::{self, Debug};
use thiserror::Error;

/// Implements the 18 face turn primitives of `RubiksCube` in terms of a
/// `fn(&mut self, Face, usize) -> &mut Self` method turning a face by some
/// number of clockwise quarter turns.
macro_rules! quarter_turn_primitives {
    ($turn:ident) => {
        fn l(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Left, 1)
        }

        fn l_prime(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Left, 3)
        }

        fn l2(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Left, 2)
        }

        fn r(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Right, 1)
        }

        fn r_prime(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Right, 3)
        }

        fn r2(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Right, 2)
        }

        fn u(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Up, 1)
        }

        fn u_prime(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Up, 3)
        }

        fn u2(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Up, 2)
        }

        fn d(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Down, 1)
        }

        fn d_prime(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Down, 3)
        }

        fn d2(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Down, 2)
        }

        fn f(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Front, 1)
        }

        fn f_prime(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Front, 3)
        }

        fn f2(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Front, 2)
        }

        fn b(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Back, 1)
        }

        fn b_prime(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Back, 3)
        }

        fn b2(&mut self) -> &mut Self {
            self.$turn($crate::face::Face::Back, 2)
        }
    };
}

pub mod bitboard;
pub mod facelet;

const NET_INDENT: &str = "        ";
const NET_GAP: &str = "   ";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("Facelet ({row}, {col}) is out of range, expected a row and column between 0 and 2")]
    FaceletOutOfRange { row: usize, col: usize },
    #[error("Corner slot out of range, expected a value between 0 and 7 but got {0}")]
    SlotOutOfRange(usize),
    #[error("Corner slot {slot} shows the colors {colors}, which match no corner cubie")]
    InvalidCorner { slot: usize, colors: String },
}

/// The cube state interface shared by every cube representation.
///
/// A representation supplies a solved constructor, facelet lookup, and the
/// 18 face turn primitives. Move dispatch, inversion, shuffling, the solved
/// check and printing are written once here in terms of that surface, and
/// corner encoding is provided for every implementor by
/// [`CornerEncoding`](crate::corner::CornerEncoding).
///
/// Each clockwise primitive rotates the face's nine cells 90° clockwise as
/// seen head-on and cycles the twelve bordering cells of the four
/// neighbouring faces along with it. The primed primitives are the inverse
/// permutation and the half turn primitives are two quarter turns.
pub trait RubiksCube: Clone + PartialEq + Debug {
    /// A cube in the solved configuration.
    fn solved() -> Self;

    /// The color at `(row, col)` of `face`. Callers guarantee that `row` and
    /// `col` are less than 3; implementors may panic otherwise. Use
    /// [`RubiksCube::color`] for a checked lookup.
    fn color_at(&self, face: Face, row: usize, col: usize) -> Color;

    fn l(&mut self) -> &mut Self;
    fn l_prime(&mut self) -> &mut Self;
    fn l2(&mut self) -> &mut Self;
    fn r(&mut self) -> &mut Self;
    fn r_prime(&mut self) -> &mut Self;
    fn r2(&mut self) -> &mut Self;
    fn u(&mut self) -> &mut Self;
    fn u_prime(&mut self) -> &mut Self;
    fn u2(&mut self) -> &mut Self;
    fn d(&mut self) -> &mut Self;
    fn d_prime(&mut self) -> &mut Self;
    fn d2(&mut self) -> &mut Self;
    fn f(&mut self) -> &mut Self;
    fn f_prime(&mut self) -> &mut Self;
    fn f2(&mut self) -> &mut Self;
    fn b(&mut self) -> &mut Self;
    fn b_prime(&mut self) -> &mut Self;
    fn b2(&mut self) -> &mut Self;

    /// The color at `(row, col)` of `face`, where row 0 is the top row and
    /// column 0 the left column when the face is viewed head-on.
    ///
    /// # Errors
    ///
    /// If `row` or `col` is not in `0..3`.
    fn color(&self, face: Face, row: usize, col: usize) -> Result<Color, CubeError> {
        if row >= 3 || col >= 3 {
            return Err(CubeError::FaceletOutOfRange { row, col });
        }
        Ok(self.color_at(face, row, col))
    }

    /// Whether every face shows only its solved color.
    fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            (0..3).all(|row| (0..3).all(|col| self.color_at(face, row, col) == face.solved_color()))
        })
    }

    /// A copy of all 54 facelets indexed by (face, row, column), independent
    /// of the representation.
    fn facelets(&self) -> [[[Color; 3]; 3]; 6] {
        Face::ALL.map(|face| {
            [0, 1, 2].map(|row| [0, 1, 2].map(|col| self.color_at(face, row, col)))
        })
    }

    /// Write the cube as an unfolded net:
    ///
    /// ```text
    ///         W W W
    ///         W W W
    ///         W W W
    ///
    /// G G G   R R R   B B B   O O O
    /// G G G   R R R   B B B   O O O
    /// G G G   R R R   B B B   O O O
    ///
    ///         Y Y Y
    ///         Y Y Y
    ///         Y Y Y
    /// ```
    ///
    /// # Errors
    ///
    /// If writing to `out` fails.
    fn write_net(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let face_row = |face: Face, row: usize| {
            (0..3)
                .map(|col| self.color_at(face, row, col).letter())
                .join(" ")
        };

        for row in 0..3 {
            writeln!(out, "{NET_INDENT}{}", face_row(Face::Up, row))?;
        }
        writeln!(out)?;
        for row in 0..3 {
            let belt = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| face_row(face, row))
                .join(NET_GAP);
            writeln!(out, "{belt}")?;
        }
        writeln!(out)?;
        for row in 0..3 {
            writeln!(out, "{NET_INDENT}{}", face_row(Face::Down, row))?;
        }
        Ok(())
    }

    /// The unfolded net described in [`RubiksCube::write_net`].
    fn net(&self) -> String {
        let mut net = String::new();
        // Writing to a String cannot fail
        let _ = self.write_net(&mut net);
        net
    }

    /// Print the unfolded net to stdout.
    fn print(&self) {
        print!("{}", self.net());
    }

    /// Apply a move in place.
    fn apply_move(&mut self, move_: Move) -> &mut Self {
        let primitives: [fn(&mut Self) -> &mut Self; Move::COUNT] = [
            Self::l,
            Self::l_prime,
            Self::l2,
            Self::r,
            Self::r_prime,
            Self::r2,
            Self::u,
            Self::u_prime,
            Self::u2,
            Self::d,
            Self::d_prime,
            Self::d2,
            Self::f,
            Self::f_prime,
            Self::f2,
            Self::b,
            Self::b_prime,
            Self::b2,
        ];
        primitives[move_.index()](self)
    }

    /// Apply the inverse of `move_`, undoing `apply_move(move_)`.
    fn invert(&mut self, move_: Move) -> &mut Self {
        self.apply_move(move_.inverse())
    }

    /// Apply a move sequence in order.
    fn apply_moves(&mut self, moves: &[Move]) -> &mut Self {
        for &move_ in moves {
            self.apply_move(move_);
        }
        self
    }

    /// Undo `apply_moves(moves)` by inverting the moves in reverse order.
    fn invert_moves(&mut self, moves: &[Move]) -> &mut Self {
        for &move_ in moves.iter().rev() {
            self.invert(move_);
        }
        self
    }

    /// Apply `times` uniformly random moves and return them in the order
    /// they were applied.
    fn random_shuffle_cube(&mut self, times: u32) -> Vec<Move> {
        self.random_shuffle_cube_with(&mut fastrand::Rng::new(), times)
    }

    /// Like [`RubiksCube::random_shuffle_cube`], drawing moves from `rng`.
    /// A seeded `rng` reproduces the same shuffle.
    fn random_shuffle_cube_with(&mut self, rng: &mut fastrand::Rng, times: u32) -> Vec<Move> {
        debug!(crate::working!("Shuffling cube with {} random moves"), times);
        let moves = (0..times)
            .map(|_| Move::ALL[rng.usize(..Move::COUNT)])
            .collect_vec();
        self.apply_moves(&moves);
        trace!("Shuffle sequence: {}", format_moves(&moves));
        moves
    }
}
