//! Sticker coordinates and the fixed tables describing how face turns move
//! them.
//!
//! Every face is addressed head-on: row 0 is the top row and column 0 the
//! left column when looking straight at the face, with UP viewed with BACK
//! at the top and DOWN viewed with FRONT at the top.

use crate::face::Face::{self, Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// A sticker position in the (face, row, column) frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

const fn fl(face: Face, row: usize, col: usize) -> Facelet {
    Facelet { face, row, col }
}

/// Where the cell at `(row, col)` ends up after rotating its face
/// `quarter_turns` times clockwise.
#[must_use]
pub const fn rotate_cell(row: usize, col: usize, quarter_turns: usize) -> (usize, usize) {
    let (mut row, mut col) = (row, col);
    let mut i = 0;
    while i < quarter_turns % 4 {
        (row, col) = (col, 2 - row);
        i += 1;
    }
    (row, col)
}

/// The twelve stickers bordering each face, indexed by face, as four strips
/// of three. A clockwise quarter turn of the face moves the sticker at
/// `strips[k][i]` to `strips[(k + 1) % 4][i]`.
pub const BOUNDARY_STRIPS: [[[Facelet; 3]; 4]; 6] = [
    // Up
    [
        [fl(F, 0, 0), fl(F, 0, 1), fl(F, 0, 2)],
        [fl(L, 0, 0), fl(L, 0, 1), fl(L, 0, 2)],
        [fl(B, 0, 0), fl(B, 0, 1), fl(B, 0, 2)],
        [fl(R, 0, 0), fl(R, 0, 1), fl(R, 0, 2)],
    ],
    // Left
    [
        [fl(U, 0, 0), fl(U, 1, 0), fl(U, 2, 0)],
        [fl(F, 0, 0), fl(F, 1, 0), fl(F, 2, 0)],
        [fl(D, 0, 0), fl(D, 1, 0), fl(D, 2, 0)],
        [fl(B, 2, 2), fl(B, 1, 2), fl(B, 0, 2)],
    ],
    // Front
    [
        [fl(U, 2, 0), fl(U, 2, 1), fl(U, 2, 2)],
        [fl(R, 0, 0), fl(R, 1, 0), fl(R, 2, 0)],
        [fl(D, 0, 2), fl(D, 0, 1), fl(D, 0, 0)],
        [fl(L, 2, 2), fl(L, 1, 2), fl(L, 0, 2)],
    ],
    // Right
    [
        [fl(F, 0, 2), fl(F, 1, 2), fl(F, 2, 2)],
        [fl(U, 0, 2), fl(U, 1, 2), fl(U, 2, 2)],
        [fl(B, 2, 0), fl(B, 1, 0), fl(B, 0, 0)],
        [fl(D, 0, 2), fl(D, 1, 2), fl(D, 2, 2)],
    ],
    // Back
    [
        [fl(U, 0, 2), fl(U, 0, 1), fl(U, 0, 0)],
        [fl(L, 0, 0), fl(L, 1, 0), fl(L, 2, 0)],
        [fl(D, 2, 0), fl(D, 2, 1), fl(D, 2, 2)],
        [fl(R, 2, 2), fl(R, 1, 2), fl(R, 0, 2)],
    ],
    // Down
    [
        [fl(F, 2, 0), fl(F, 2, 1), fl(F, 2, 2)],
        [fl(R, 2, 0), fl(R, 2, 1), fl(R, 2, 2)],
        [fl(B, 2, 0), fl(B, 2, 1), fl(B, 2, 2)],
        [fl(L, 2, 0), fl(L, 2, 1), fl(L, 2, 2)],
    ],
];

/// The three stickers of each corner slot. Slots are UFR, UFL, UBR, UBL,
/// DFR, DFL, DBR, DBL. Each slot lists its UP or DOWN sticker first,
/// followed by the other two clockwise around the corner as seen from
/// outside the cube.
pub const CORNER_SLOTS: [[Facelet; 3]; 8] = [
    [fl(U, 2, 2), fl(R, 0, 0), fl(F, 0, 2)],
    [fl(U, 2, 0), fl(F, 0, 0), fl(L, 0, 2)],
    [fl(U, 0, 2), fl(B, 0, 0), fl(R, 0, 2)],
    [fl(U, 0, 0), fl(L, 0, 0), fl(B, 0, 2)],
    [fl(D, 0, 2), fl(F, 2, 2), fl(R, 2, 0)],
    [fl(D, 0, 0), fl(L, 2, 2), fl(F, 2, 0)],
    [fl(D, 2, 2), fl(R, 2, 2), fl(B, 2, 0)],
    [fl(D, 2, 0), fl(B, 2, 2), fl(L, 2, 0)],
];
