//! Guess/secret code representation and wire packing
//!
//! A [`Code`] is an ordered sequence of five colors. On the wire it is a
//! 16-bit little-endian word: bits 0-2 hold slot 0, bits 3-5 slot 1, and so
//! on through bit 14; bit 15 carries even parity over bits 0-14.

use super::color::Color;
use super::slots::SLOTS;
use std::fmt;

const COLOR_WIDTH: u32 = 3;
const PARITY_BIT: u16 = 15;

/// An ordered assignment of one color to each of the five slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; 5]);

impl Code {
    /// Build a code from an explicit slot assignment.
    #[inline]
    #[must_use]
    pub const fn new(slots: [Color; 5]) -> Self {
        Self(slots)
    }

    /// The uniform code repeating one color in every slot.
    #[inline]
    #[must_use]
    pub const fn monochrome(color: Color) -> Self {
        Self([color; 5])
    }

    /// The color occupying `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= 5`.
    #[inline]
    #[must_use]
    pub const fn slot(&self, slot: usize) -> Color {
        self.0[slot]
    }

    /// All five slots in order.
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Color; 5] {
        &self.0
    }

    /// Count the slots where `self` and `other` hold the same color.
    ///
    /// This is the exact-position comparison the constraint filter applies
    /// against every processed guess; red marks from the arbiter report the
    /// same quantity against the secret.
    #[must_use]
    pub fn exact_matches(&self, other: &Self) -> u8 {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a == b)
            .count() as u8
    }

    /// Pack the five 3-bit color fields into bits 0-14, slot 0 lowest.
    #[must_use]
    pub fn pack(&self) -> u16 {
        self.0
            .iter()
            .enumerate()
            .fold(0u16, |word, (slot, color)| {
                word | (color.index() as u16) << (slot as u32 * COLOR_WIDTH)
            })
    }

    /// Decode a packed word back into a code; bit 15 and beyond-range bits
    /// are ignored.
    #[must_use]
    pub fn unpack(word: u16) -> Self {
        let mut slots = [Color::Beige; 5];
        for (slot, color) in slots.iter_mut().enumerate() {
            *color = Color::from_bits((word >> (slot as u32 * COLOR_WIDTH)) as u8);
        }
        Self(slots)
    }

    /// The full 16-bit wire word: packed colors plus the parity bit, an XOR
    /// over bits 0-14 making overall parity even.
    #[must_use]
    pub fn to_wire(&self) -> u16 {
        let packed = self.pack();
        let mut parity = 0u16;
        for bit in 0..(SLOTS as u32 * COLOR_WIDTH) {
            parity ^= (packed >> bit) & 0x1;
        }
        packed | parity << PARITY_BIT
    }

    /// The wire word framed as two bytes, low byte first.
    #[must_use]
    pub fn wire_bytes(&self) -> [u8; 2] {
        let wire = self.to_wire();
        [(wire & 0x00FF) as u8, (wire >> 8) as u8]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots = self.0.iter();
        if let Some(first) = slots.next() {
            write!(f, "{first}")?;
        }
        for color in slots {
            write!(f, " {color}")?;
        }
        Ok(())
    }
}
