//! Position refinement from the partition probe results
//!
//! Two deduction rules, applied per partition once all occurrence counts
//! are known. With zero reds, no color of the partition sat at its probed
//! slot, so those slots are struck from the colors' position sets. With as
//! many reds as confirmed occurrences, every occurrence sat exactly where
//! it was probed, so each color's position set collapses to the slots it
//! held in the arrangement. Anything in between stays open and is resolved
//! by the combination search.

use crate::core::{Partition, SlotSet};
use crate::solver::possibility::PossibilityTable;
use crate::solver::session::PartitionReport;
use log::debug;

pub(crate) fn refine_positions(
    reports: &[PartitionReport; 2],
    possibilities: &mut PossibilityTable,
) {
    for partition in Partition::BOTH {
        let report = reports[partition.index()];
        let arrangement = partition.arrangement();

        if report.red == 0 {
            for (slot, color) in arrangement.iter().copied().enumerate() {
                possibilities.clear_position(color, slot);
            }
        } else if report.red == report.confirmed {
            for color in partition.colors() {
                let held = arrangement
                    .iter()
                    .enumerate()
                    .filter(|(_, probed)| **probed == color)
                    .fold(SlotSet::EMPTY, |set, (slot, _)| set | SlotSet::single(slot));
                possibilities.collapse_positions(color, held);
            }
        }
    }

    debug!("positions refined:\n{possibilities}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, GuessResult};

    fn counted(table: &mut PossibilityTable, counts: [(Color, u8); 8]) {
        for (color, count) in counts {
            table.set_occurrences(color, count);
        }
    }

    #[test]
    fn zero_reds_strike_the_probed_slots() {
        let mut table = PossibilityTable::new();
        counted(
            &mut table,
            [
                (Color::Beige, 2),
                (Color::DarkBlue, 1),
                (Color::Green, 1),
                (Color::Orange, 1),
                (Color::Red, 0),
                (Color::Black, 0),
                (Color::Violet, 0),
                (Color::White, 0),
            ],
        );
        let mut reports = [PartitionReport::default(); 2];
        reports[0] = PartitionReport {
            red: 0,
            white: 5,
            total: 5,
            confirmed: 5,
        };
        reports[1] = PartitionReport::ABSENT;

        refine_positions(&reports, &mut table);

        // beige was probed at slots 0 and 1, both now impossible
        assert_eq!(
            table[Color::Beige].positions(),
            SlotSet::from_bits(0b1_1100)
        );
        assert_eq!(
            table[Color::DarkBlue].positions(),
            SlotSet::from_bits(0b1_1011)
        );
        assert_eq!(table[Color::Green].positions(), SlotSet::from_bits(0b1_0111));
        assert_eq!(
            table[Color::Orange].positions(),
            SlotSet::from_bits(0b0_1111)
        );
    }

    #[test]
    fn all_reds_confirmed_collapse_to_probed_slots() {
        let mut table = PossibilityTable::new();
        counted(
            &mut table,
            [
                (Color::Beige, 2),
                (Color::DarkBlue, 1),
                (Color::Green, 1),
                (Color::Orange, 1),
                (Color::Red, 0),
                (Color::Black, 0),
                (Color::Violet, 0),
                (Color::White, 0),
            ],
        );
        let mut reports = [PartitionReport::default(); 2];
        reports[0] = PartitionReport {
            red: 5,
            white: 0,
            total: 5,
            confirmed: 5,
        };
        reports[1] = PartitionReport::ABSENT;

        refine_positions(&reports, &mut table);

        assert_eq!(table[Color::Beige].positions(), SlotSet::from_bits(0b0_0011));
        assert_eq!(
            table[Color::DarkBlue].positions(),
            SlotSet::single(2)
        );
        assert_eq!(table[Color::Green].positions(), SlotSet::single(3));
        assert_eq!(table[Color::Orange].positions(), SlotSet::single(4));
        // excluded colors stay excluded
        assert!(table[Color::Red].is_excluded());
    }

    #[test]
    fn partial_reds_leave_positions_open() {
        let mut table = PossibilityTable::new();
        counted(
            &mut table,
            [
                (Color::Beige, 3),
                (Color::DarkBlue, 0),
                (Color::Green, 2),
                (Color::Orange, 0),
                (Color::Red, 0),
                (Color::Black, 0),
                (Color::Violet, 0),
                (Color::White, 0),
            ],
        );
        let mut reports = [PartitionReport::default(); 2];
        reports[0] = PartitionReport {
            red: 3,
            white: 2,
            total: 5,
            confirmed: 5,
        };
        reports[1] = PartitionReport::ABSENT;

        refine_positions(&reports, &mut table);

        // 3 reds != 5 confirmed: neither rule applies, everything stays open
        assert_eq!(table[Color::Beige].positions(), SlotSet::ALL);
        assert_eq!(table[Color::Green].positions(), SlotSet::ALL);
        assert!(table[Color::DarkBlue].is_excluded());
    }

    #[test]
    fn forced_sentinel_partition_is_left_alone() {
        let mut table = PossibilityTable::new();
        counted(
            &mut table,
            [
                (Color::Beige, 0),
                (Color::DarkBlue, 0),
                (Color::Green, 0),
                (Color::Orange, 0),
                (Color::Red, 2),
                (Color::Black, 1),
                (Color::Violet, 1),
                (Color::White, 1),
            ],
        );
        let mut reports = [PartitionReport::default(); 2];
        // measured zero-mark probe on the first partition
        reports[0] = PartitionReport::measured(GuessResult::new(0, 0));
        // sentinel: red 1 matches neither rule (confirmed is 5)
        reports[1] = PartitionReport {
            confirmed: 5,
            ..PartitionReport::ALL_PRESENT
        };

        refine_positions(&reports, &mut table);

        for color in Partition::Second.colors() {
            assert_eq!(
                table[color].positions(),
                SlotSet::ALL,
                "{color} must keep all positions open"
            );
        }
    }
}
