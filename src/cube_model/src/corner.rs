//! Corner cubie identification and the corner coordinates used as pattern
//! database keys.
//!
//! Slots follow [`CORNER_SLOTS`]: UFR, UFL, UBR, UBL, DFR, DFL, DBR, DBL.
//! The cubie whose solved home is slot `i` has index `i`, so a solved cube
//! has the identity permutation and every orientation is 0.

use crate::{
    face::Color,
    geometry::CORNER_SLOTS,
    puzzle::{CubeError, RubiksCube},
};
use log::debug;

pub const CORNER_COUNT: usize = 8;

/// Number of distinct corner permutations, 8!.
pub const CORNER_PERMUTATIONS: u32 = 40_320;

/// Number of distinct corner orientation indices. The orientation of the
/// last slot is determined by the other seven, so only seven are encoded.
pub const CORNER_ORIENTATIONS: u32 = 2_187;

// Factorials 0! through 7!
const FACT_UNTIL_7: [u32; CORNER_COUNT] = {
    let mut arr = [0; CORNER_COUNT];
    arr[0] = 1;
    let mut i = 1;
    while i < arr.len() {
        arr[i] = arr[i - 1] * i as u32;
        i += 1;
    }
    arr
};

/// The color set of each corner cubie, indexed by cubie.
fn cubie_color_bits(cubie: usize) -> u8 {
    CORNER_SLOTS[cubie]
        .iter()
        .fold(0, |bits, facelet| bits | facelet.face.solved_color().bit())
}

/// Corner encoding for any cube representation, derived purely from facelet
/// colors.
pub trait CornerEncoding: RubiksCube {
    /// The colors of the three facelets of `slot`: the UP or DOWN facelet
    /// first, then the other two clockwise around the corner.
    ///
    /// # Errors
    ///
    /// If `slot` is not in `0..8`.
    fn corner_colors(&self, slot: usize) -> Result<[Color; 3], CubeError> {
        let facelets = CORNER_SLOTS
            .get(slot)
            .ok_or(CubeError::SlotOutOfRange(slot))?;
        Ok(facelets.map(|facelet| self.color_at(facelet.face, facelet.row, facelet.col)))
    }

    /// The color letters of `slot` in the order of
    /// [`CornerEncoding::corner_colors`], eg. `"WBR"` for the solved UFR
    /// slot.
    ///
    /// # Errors
    ///
    /// If `slot` is not in `0..8`.
    fn corner_color_string(&self, slot: usize) -> Result<String, CubeError> {
        Ok(self
            .corner_colors(slot)?
            .iter()
            .map(|color| color.letter())
            .collect())
    }

    /// Which corner cubie currently sits in `slot`, identified by its set of
    /// colors.
    ///
    /// # Errors
    ///
    /// If `slot` is not in `0..8`, or if its colors do not belong to any
    /// corner cubie, which never happens for a state reached by moves.
    fn corner_index(&self, slot: usize) -> Result<u8, CubeError> {
        let colors = self.corner_colors(slot)?;
        let bits = colors.iter().fold(0, |bits, color| bits | color.bit());
        match (0..8).find(|&cubie| cubie_color_bits(usize::from(cubie)) == bits) {
            Some(cubie) => Ok(cubie),
            None => {
                let colors: String = colors.iter().map(|color| color.letter()).collect();
                debug!("Corner slot {slot} holds no known cubie: {colors}");
                Err(CubeError::InvalidCorner { slot, colors })
            }
        }
    }

    /// How many clockwise twists the cubie in `slot` is away from sitting
    /// with its WHITE or YELLOW facelet on the UP or DOWN face.
    ///
    /// # Errors
    ///
    /// See [`CornerEncoding::corner_index`].
    fn corner_orientation(&self, slot: usize) -> Result<u8, CubeError> {
        self.corner_index(slot)?;
        let colors = self.corner_colors(slot)?;
        Ok((0..)
            .zip(colors)
            .find(|&(_, color)| matches!(color, Color::White | Color::Yellow))
            .map(|(twist, _)| twist)
            .unwrap_or_default())
    }

    /// The cubie index of every slot.
    ///
    /// # Errors
    ///
    /// See [`CornerEncoding::corner_index`].
    fn corner_indices(&self) -> Result<[u8; CORNER_COUNT], CubeError> {
        let mut indices = [0; CORNER_COUNT];
        for (slot, index) in indices.iter_mut().enumerate() {
            *index = self.corner_index(slot)?;
        }
        Ok(indices)
    }

    /// The orientation of every slot.
    ///
    /// # Errors
    ///
    /// See [`CornerEncoding::corner_index`].
    fn corner_orientations(&self) -> Result<[u8; CORNER_COUNT], CubeError> {
        let mut orientations = [0; CORNER_COUNT];
        for (slot, orientation) in orientations.iter_mut().enumerate() {
            *orientation = self.corner_orientation(slot)?;
        }
        Ok(orientations)
    }

    /// The lexicographic rank of the corner permutation, in
    /// `0..CORNER_PERMUTATIONS`. The solved cube has rank 0.
    ///
    /// # Errors
    ///
    /// See [`CornerEncoding::corner_index`].
    fn corner_permutation_rank(&self) -> Result<u32, CubeError> {
        let perm = self.corner_indices()?;
        let mut rank = 0;
        for i in 0..CORNER_COUNT - 1 {
            let smaller_after = perm[i + 1..].iter().filter(|&&later| later < perm[i]).count();
            // At most 7
            #[allow(clippy::cast_possible_truncation)]
            let smaller_after = smaller_after as u32;
            rank += smaller_after * FACT_UNTIL_7[CORNER_COUNT - i - 1];
        }
        Ok(rank)
    }

    /// The orientations of the first seven slots read as a base 3 number, in
    /// `0..CORNER_ORIENTATIONS`.
    ///
    /// # Errors
    ///
    /// See [`CornerEncoding::corner_index`].
    fn corner_orientation_index(&self) -> Result<u32, CubeError> {
        let orientations = self.corner_orientations()?;
        Ok(orientations[..CORNER_COUNT - 1]
            .iter()
            .fold(0, |index, &orientation| index * 3 + u32::from(orientation)))
    }

    /// A dense key combining the permutation rank and orientation index, in
    /// `0..CORNER_PERMUTATIONS * CORNER_ORIENTATIONS`.
    ///
    /// # Errors
    ///
    /// See [`CornerEncoding::corner_index`].
    fn corner_coordinate(&self) -> Result<u32, CubeError> {
        Ok(self.corner_permutation_rank()? * CORNER_ORIENTATIONS
            + self.corner_orientation_index()?)
    }
}

impl<C: RubiksCube> CornerEncoding for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        face::Face,
        moves::{Move, parse_moves},
        puzzle::{bitboard::BitboardCube, facelet::FaceletCube},
    };

    fn solved_encoding<C: RubiksCube>() {
        let cube = C::solved();
        assert_eq!(cube.corner_indices(), Ok([0, 1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(cube.corner_orientations(), Ok([0; 8]));
        assert_eq!(cube.corner_permutation_rank(), Ok(0));
        assert_eq!(cube.corner_orientation_index(), Ok(0));
        assert_eq!(cube.corner_coordinate(), Ok(0));
        assert_eq!(cube.corner_color_string(0).unwrap(), "WBR");
        assert_eq!(cube.corner_color_string(3).unwrap(), "WGO");
        assert_eq!(cube.corner_color_string(7).unwrap(), "YOG");
    }

    #[test]
    fn test_solved_encoding() {
        solved_encoding::<FaceletCube>();
        solved_encoding::<BitboardCube>();
    }

    fn single_move_encoding<C: RubiksCube>() {
        let mut cube = C::solved();
        cube.apply_move(Move::R);
        assert_eq!(cube.corner_indices(), Ok([4, 1, 0, 3, 6, 5, 2, 7]));
        assert_eq!(cube.corner_orientations(), Ok([2, 0, 1, 0, 1, 0, 2, 0]));
        assert_eq!(cube.corner_color_string(0).unwrap(), "RBY");

        let mut cube = C::solved();
        cube.apply_move(Move::F);
        assert_eq!(cube.corner_indices(), Ok([1, 5, 2, 3, 0, 4, 6, 7]));
        assert_eq!(cube.corner_orientations(), Ok([1, 2, 0, 0, 2, 1, 0, 0]));

        let mut cube = C::solved();
        cube.apply_move(Move::U);
        assert_eq!(cube.corner_indices(), Ok([2, 0, 3, 1, 4, 5, 6, 7]));
        assert_eq!(cube.corner_orientations(), Ok([0; 8]));
        assert_eq!(cube.corner_permutation_rank(), Ok(10_200));
        assert_eq!(cube.corner_coordinate(), Ok(10_200 * CORNER_ORIENTATIONS));
    }

    #[test]
    fn test_single_move_encoding() {
        single_move_encoding::<FaceletCube>();
        single_move_encoding::<BitboardCube>();
    }

    #[test]
    fn test_slot_out_of_range() {
        let cube = FaceletCube::solved();
        assert_eq!(cube.corner_colors(8), Err(CubeError::SlotOutOfRange(8)));
        assert_eq!(cube.corner_index(100), Err(CubeError::SlotOutOfRange(100)));
        assert_eq!(cube.corner_orientation(8), Err(CubeError::SlotOutOfRange(8)));
    }

    #[test]
    fn test_permutation_rank_bounds() {
        // U2 D2 swaps corners pairwise in both layers
        let mut cube = BitboardCube::solved();
        cube.apply_moves(&parse_moves("U2 D2").unwrap());
        assert_eq!(cube.corner_indices(), Ok([3, 2, 1, 0, 7, 6, 5, 4]));
        let rank = cube.corner_permutation_rank().unwrap();
        assert_eq!(rank, 3 * 5040 + 2 * 720 + 120 + 3 * 6 + 2 * 2 + 1);
        assert!(rank < CORNER_PERMUTATIONS);
    }

    /// A cube with arbitrary stickers, for exercising the invariant check.
    #[derive(Debug, Clone, PartialEq)]
    struct Stickers(FaceletCube, Option<(Face, usize, usize, Color)>);

    impl RubiksCube for Stickers {
        fn solved() -> Self {
            Stickers(FaceletCube::solved(), None)
        }

        fn color_at(&self, face: Face, row: usize, col: usize) -> Color {
            match self.1 {
                Some((f, r, c, color)) if (f, r, c) == (face, row, col) => color,
                _ => self.0.color_at(face, row, col),
            }
        }

        fn l(&mut self) -> &mut Self {
            self.0.l();
            self
        }
        fn l_prime(&mut self) -> &mut Self {
            self.0.l_prime();
            self
        }
        fn l2(&mut self) -> &mut Self {
            self.0.l2();
            self
        }
        fn r(&mut self) -> &mut Self {
            self.0.r();
            self
        }
        fn r_prime(&mut self) -> &mut Self {
            self.0.r_prime();
            self
        }
        fn r2(&mut self) -> &mut Self {
            self.0.r2();
            self
        }
        fn u(&mut self) -> &mut Self {
            self.0.u();
            self
        }
        fn u_prime(&mut self) -> &mut Self {
            self.0.u_prime();
            self
        }
        fn u2(&mut self) -> &mut Self {
            self.0.u2();
            self
        }
        fn d(&mut self) -> &mut Self {
            self.0.d();
            self
        }
        fn d_prime(&mut self) -> &mut Self {
            self.0.d_prime();
            self
        }
        fn d2(&mut self) -> &mut Self {
            self.0.d2();
            self
        }
        fn f(&mut self) -> &mut Self {
            self.0.f();
            self
        }
        fn f_prime(&mut self) -> &mut Self {
            self.0.f_prime();
            self
        }
        fn f2(&mut self) -> &mut Self {
            self.0.f2();
            self
        }
        fn b(&mut self) -> &mut Self {
            self.0.b();
            self
        }
        fn b_prime(&mut self) -> &mut Self {
            self.0.b_prime();
            self
        }
        fn b2(&mut self) -> &mut Self {
            self.0.b2();
            self
        }
    }

    #[test_log::test]
    fn test_invalid_corner_is_reported() {
        // Red and orange never share a cubie
        let cube = Stickers(
            FaceletCube::solved(),
            Some((Face::Up, 2, 2, Color::Orange)),
        );
        assert_eq!(
            cube.corner_index(0),
            Err(CubeError::InvalidCorner {
                slot: 0,
                colors: "OBR".to_owned()
            })
        );
        assert!(matches!(
            cube.corner_orientation(0),
            Err(CubeError::InvalidCorner { slot: 0, .. })
        ));
        assert!(cube.corner_coordinate().is_err());
        assert_eq!(cube.corner_index(1), Ok(1));
    }
}
