//! The face and color vocabulary shared by every cube representation.

use std::fmt;

/// One of the six faces of the cube. The discriminant is the face's index
/// into per-face tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

/// One of the six sticker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Orange,
    Yellow,
}

impl Face {
    /// All faces in index order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color every facelet of this face has when the cube is solved.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Left => Color::Green,
            Face::Front => Color::Red,
            Face::Right => Color::Blue,
            Face::Back => Color::Orange,
            Face::Down => Color::Yellow,
        }
    }

    /// The letter used for this face in move notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        }
    }
}

impl Color {
    /// All colors in index order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the first letter of the color, eg. `'G'` for
    /// `Color::Green`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
        }
    }

    /// A single bit identifying this color, used to compare color sets.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
