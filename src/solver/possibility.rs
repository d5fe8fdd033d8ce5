//! Per-color possibility tracking
//!
//! One entry per color records which slot positions the color might still
//! occupy and, once a monochrome probe (or remainder arithmetic) has
//! determined it, how many slots it occupies. An excluded color holds an
//! empty position set and an occurrence count of zero.

use crate::core::{Color, SlotSet};
use std::fmt;
use std::ops::Index;

/// What is known about a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PossibilityInfo {
    positions: SlotSet,
    occurrences: u8,
}

impl PossibilityInfo {
    /// Initial state: any position possible, occurrence count unknown.
    const OPEN: Self = Self {
        positions: SlotSet::ALL,
        occurrences: 0,
    };

    /// Positions this color might still occupy.
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> SlotSet {
        self.positions
    }

    /// Known occurrence count (0 until determined or excluded).
    #[inline]
    #[must_use]
    pub const fn occurrences(&self) -> u8 {
        self.occurrences
    }

    /// True once the color is known to appear at least once.
    #[inline]
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.occurrences > 0
    }

    /// True once the color is known to be absent from the secret.
    #[inline]
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        self.occurrences == 0 && self.positions.is_empty()
    }
}

/// The 8-entry possibility table threaded through every deduction phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibilityTable([PossibilityInfo; 8]);

impl Default for PossibilityTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PossibilityTable {
    /// Fresh table with every color open at every position.
    #[must_use]
    pub const fn new() -> Self {
        Self([PossibilityInfo::OPEN; 8])
    }

    /// Rule the color out entirely: no occurrences, no positions.
    pub fn exclude(&mut self, color: Color) {
        self.0[color.index()] = PossibilityInfo {
            positions: SlotSet::EMPTY,
            occurrences: 0,
        };
    }

    /// Record the color's exact occurrence count. A count of zero is an
    /// exclusion, keeping the count-zero/empty-mask invariant intact.
    pub fn set_occurrences(&mut self, color: Color, count: u8) {
        debug_assert!(count <= 5);
        if count == 0 {
            self.exclude(color);
        } else {
            self.0[color.index()].occurrences = count;
        }
    }

    /// Remove one slot from the color's possible positions.
    pub fn clear_position(&mut self, color: Color, slot: usize) {
        let entry = &mut self.0[color.index()];
        entry.positions = entry.positions.without(slot);
    }

    /// Collapse the color's possible positions to exactly `positions`.
    /// Excluded colors stay excluded.
    pub fn collapse_positions(&mut self, color: Color, positions: SlotSet) {
        let entry = &mut self.0[color.index()];
        if entry.is_live() {
            entry.positions = positions;
        }
    }

    /// The lowest-indexed live color at or after `from`, if any.
    #[must_use]
    pub fn first_live_from(&self, from: usize) -> Option<Color> {
        Color::ALL[from.min(8)..]
            .iter()
            .copied()
            .find(|color| self[*color].is_live())
    }

    /// Sum of known occurrence counts across all colors; 5 once the
    /// counting phase has fully resolved the table.
    #[must_use]
    pub fn total_occurrences(&self) -> u8 {
        self.0.iter().map(|entry| entry.occurrences).sum()
    }
}

impl Index<Color> for PossibilityTable {
    type Output = PossibilityInfo;

    #[inline]
    fn index(&self, color: Color) -> &PossibilityInfo {
        &self.0[color.index()]
    }
}

impl fmt::Display for PossibilityTable {
    /// One line per color: position mask and occurrence count. Used by the
    /// phase trace logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in Color::ALL {
            let entry = self[color];
            writeln!(
                f,
                "{color:>8}: positions {} occurrences {}",
                entry.positions(),
                entry.occurrences()
            )?;
        }
        Ok(())
    }
}
