//! The fixed 8-color palette and its two probe partitions
//!
//! Color order is significant: the first four colors form partition one and
//! the last four partition two, each probed as a fixed 5-slot arrangement.

use std::fmt;

/// One of the eight peg colors, in the game's fixed enumeration order.
///
/// The discriminants double as the 3-bit wire encoding (0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    Beige = 0,
    DarkBlue = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
    Black = 5,
    Violet = 6,
    White = 7,
}

impl Color {
    /// All eight colors in enumeration order.
    pub const ALL: [Self; 8] = [
        Self::Beige,
        Self::DarkBlue,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Black,
        Self::Violet,
        Self::White,
    ];

    /// Index of this color in the enumeration (0-7).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decode a 3-bit wire field into a color.
    ///
    /// Only the low three bits are inspected, so any byte maps to a valid
    /// color.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x7 {
            0 => Self::Beige,
            1 => Self::DarkBlue,
            2 => Self::Green,
            3 => Self::Orange,
            4 => Self::Red,
            5 => Self::Black,
            6 => Self::Violet,
            _ => Self::White,
        }
    }

    /// The partition this color belongs to.
    #[inline]
    #[must_use]
    pub const fn partition(self) -> Partition {
        if (self as u8) < 4 {
            Partition::First
        } else {
            Partition::Second
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beige => "beige",
            Self::DarkBlue => "darkblue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Black => "black",
            Self::Violet => "violet",
            Self::White => "white",
        };
        f.pad(name)
    }
}

/// One of the two fixed halves of the color palette.
///
/// Each partition is probed once as a uniform 5-slot guess built from its
/// representative arrangement: the partition's first color doubled, then the
/// remaining three colors in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    First,
    Second,
}

impl Partition {
    /// Both partitions, in probe order.
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// Index of this partition (0 or 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The complementary partition.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// The four colors making up this partition, in enumeration order.
    #[must_use]
    pub const fn colors(self) -> [Color; 4] {
        match self {
            Self::First => [Color::Beige, Color::DarkBlue, Color::Green, Color::Orange],
            Self::Second => [Color::Red, Color::Black, Color::Violet, Color::White],
        }
    }

    /// The partition's 4th color, the one left unprobed by the counting
    /// phase and resolved by remainder arithmetic.
    #[inline]
    #[must_use]
    pub const fn fourth(self) -> Color {
        match self {
            Self::First => Color::Orange,
            Self::Second => Color::White,
        }
    }

    /// The fixed 5-slot arrangement submitted as this partition's probe.
    #[must_use]
    pub const fn arrangement(self) -> [Color; 5] {
        match self {
            Self::First => [
                Color::Beige,
                Color::Beige,
                Color::DarkBlue,
                Color::Green,
                Color::Orange,
            ],
            Self::Second => [
                Color::Red,
                Color::Red,
                Color::Black,
                Color::Violet,
                Color::White,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_order_matches_wire_encoding() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_bits(i as u8), *color);
        }
    }

    #[test]
    fn from_bits_ignores_high_bits() {
        assert_eq!(Color::from_bits(0b1111_1010), Color::Green);
        assert_eq!(Color::from_bits(8), Color::Beige);
    }

    #[test]
    fn partitions_split_the_palette() {
        for color in Partition::First.colors() {
            assert_eq!(color.partition(), Partition::First);
        }
        for color in Partition::Second.colors() {
            assert_eq!(color.partition(), Partition::Second);
        }
    }

    #[test]
    fn arrangement_doubles_the_representative() {
        for partition in Partition::BOTH {
            let arrangement = partition.arrangement();
            let colors = partition.colors();
            assert_eq!(arrangement[0], colors[0]);
            assert_eq!(arrangement[1], colors[0]);
            assert_eq!(&arrangement[2..], &colors[1..]);
        }
    }

    #[test]
    fn fourth_color_closes_each_partition() {
        assert_eq!(Partition::First.fourth(), Color::Orange);
        assert_eq!(Partition::Second.fourth(), Color::White);
        assert_eq!(Partition::First.other(), Partition::Second);
    }
}
