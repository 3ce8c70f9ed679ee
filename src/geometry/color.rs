// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face colors.
//!
//! Every triangular face is either RED or BLUE. The color is not stored: it is
//! read off the orientation of the face's sides (see [`crate::triangulation::Frame`]).
//!
//! - A RED face is consumed through its long side and produces its two short
//!   sides. Its dual node is a coproduct.
//! - A BLUE face consumes its two short sides and produces its long side. Its
//!   dual node is a product.

use std::fmt;

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCountMacro)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// The other color. Reversing every edge of a face swaps its color.
    pub fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Number of sides of a face of this color that the face consumes.
    pub fn inputs(self) -> usize {
        match self {
            Color::Red => 1,
            Color::Blue => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_opposite_is_involutive() {
        for color in Color::iter() {
            assert_ne!(color.opposite(), color);
            assert_eq!(color.opposite().opposite(), color);
        }
    }

    #[test]
    fn test_inputs() {
        assert_eq!(Color::Red.inputs(), 1);
        assert_eq!(Color::Blue.inputs(), 2);
        assert_eq!(Color::COUNT, 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Red.to_string(), "red");
        assert_eq!(Color::Blue.to_string(), "blue");
    }
}
