// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ports: the role a side plays for the face it bounds.
//!
//! Seen from the dual prograph, each face is a node with three ports and each
//! triangulation edge is a wire from an output port of one node to an input
//! port of the other. A BLUE face (product) has ports `[LeftInput, RightInput,
//! Output]`; a RED face (coproduct) has ports `[Input, LeftOutput, RightOutput]`.
//! Those arrays fix the slot numbering used throughout the crate.

use std::fmt;

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::geometry::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCountMacro)]
pub enum Port {
    LeftInput,
    RightInput,
    Output,
    Input,
    LeftOutput,
    RightOutput,
}

impl Port {
    /// Ports of a face of the given color, in slot order.
    pub fn of(color: Color) -> [Port; 3] {
        match color {
            Color::Blue => [Port::LeftInput, Port::RightInput, Port::Output],
            Color::Red => [Port::Input, Port::LeftOutput, Port::RightOutput],
        }
    }

    /// Color of the faces that carry this port.
    pub fn color(self) -> Color {
        match self {
            Port::LeftInput | Port::RightInput | Port::Output => Color::Blue,
            Port::Input | Port::LeftOutput | Port::RightOutput => Color::Red,
        }
    }

    /// Position of this port in [`Port::of`].
    pub fn slot(self) -> usize {
        match self {
            Port::LeftInput | Port::Input => 0,
            Port::RightInput | Port::LeftOutput => 1,
            Port::Output | Port::RightOutput => 2,
        }
    }

    pub fn is_input(self) -> bool {
        matches!(self, Port::LeftInput | Port::RightInput | Port::Input)
    }

    pub fn is_output(self) -> bool {
        !self.is_input()
    }

    /// The port this one becomes when every edge is reversed.
    ///
    /// Reversal turns a product into a coproduct and reads its ports backwards,
    /// so the slot `i` maps to slot `2 - i`.
    pub fn mirror(self) -> Port {
        match self {
            Port::LeftInput => Port::RightOutput,
            Port::RightInput => Port::LeftOutput,
            Port::Output => Port::Input,
            Port::Input => Port::Output,
            Port::LeftOutput => Port::RightInput,
            Port::RightOutput => Port::LeftInput,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Port::LeftInput => "left input",
            Port::RightInput => "right input",
            Port::Output => "output",
            Port::Input => "input",
            Port::LeftOutput => "left output",
            Port::RightOutput => "right output",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_slots_match_port_arrays() {
        for color in [Color::Red, Color::Blue] {
            for (slot, port) in Port::of(color).into_iter().enumerate() {
                assert_eq!(port.slot(), slot);
                assert_eq!(port.color(), color);
            }
        }
    }

    #[test]
    fn test_mirror() {
        for port in Port::iter() {
            assert_eq!(port.mirror().mirror(), port);
            assert_eq!(port.mirror().slot(), 2 - port.slot());
            assert_eq!(port.mirror().color(), port.color().opposite());
            assert_ne!(port.mirror().is_input(), port.is_input());
        }
    }

    #[test]
    fn test_inputs_per_color() {
        let blue_inputs = Port::of(Color::Blue).iter().filter(|p| p.is_input()).count();
        let red_inputs = Port::of(Color::Red).iter().filter(|p| p.is_input()).count();
        assert_eq!(blue_inputs, Color::Blue.inputs());
        assert_eq!(red_inputs, Color::Red.inputs());
    }
}
