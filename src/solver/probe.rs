//! Partition and per-color occurrence probing
//!
//! The first deduction phase submits the two fixed partition arrangements
//! to bound where colors of each half occur; the second probes individual
//! colors as monochrome guesses until every occurrence count is pinned
//! down, cutting probes short as soon as the arithmetic closes.

use crate::core::{Code, GuessResult, Partition, SLOTS};
use crate::solver::driver::Outcome;
use crate::solver::session::{ClientError, GameSession, PartitionReport, RoundStatus};
use crate::transport::Channel;
use log::debug;

/// A probe round either yields marks or ends the game on the spot.
fn settle(status: RoundStatus) -> Result<GuessResult, Outcome> {
    match status {
        RoundStatus::Continue(result) => Ok(result),
        RoundStatus::Won { rounds } => Err(Outcome::Won { rounds }),
        RoundStatus::Ended(error) => Err(Outcome::Ended(error)),
    }
}

/// Probe the two partitions and apply the degeneracy rules.
///
/// A partition scoring all five marks pins every occurrence to itself: the
/// complement is excluded outright and never probed. A partition scoring
/// zero pins them all to the complement, whose report is forced to the
/// all-present sentinel while the empty half is excluded.
pub(crate) fn probe_partitions<C: Channel>(
    session: &mut GameSession,
    channel: &mut C,
) -> Result<Option<Outcome>, ClientError> {
    for partition in Partition::BOTH {
        let code = Code::new(partition.arrangement());
        let result = match settle(session.submit(channel, code)?) {
            Ok(result) => result,
            Err(outcome) => return Ok(Some(outcome)),
        };
        session.reports[partition.index()] = PartitionReport::measured(result);

        let other = partition.other();
        if result.total() as usize == SLOTS {
            debug!("partition {partition:?} holds the whole secret");
            session.reports[other.index()] = PartitionReport::ABSENT;
            exclude_partition(session, other);
            break;
        }
        if result.total() == 0 {
            debug!("partition {partition:?} is absent from the secret");
            session.reports[other.index()] = PartitionReport::ALL_PRESENT;
            exclude_partition(session, partition);
            break;
        }
    }
    Ok(None)
}

fn exclude_partition(session: &mut GameSession, partition: Partition) {
    for color in partition.colors() {
        session.possibilities.exclude(color);
    }
}

/// Probe individual colors until all eight occurrence counts are known.
///
/// Each partition with marks gets at most three monochrome probes; the
/// termination conditions are checked after every hit, and whatever a
/// partition's first three colors leave unaccounted is pushed onto its 4th
/// color. When both 4th colors are still open, one extra probe of the
/// second partition's designated representative resolves the split.
pub(crate) fn probe_colors<C: Channel>(
    session: &mut GameSession,
    channel: &mut C,
) -> Result<Option<Outcome>, ClientError> {
    let mut total = 0u8;
    let mut fourth_unresolved = [false; 2];

    for partition in Partition::BOTH {
        let report_total = session.reports[partition.index()].total;
        if report_total == 0 {
            continue;
        }

        let mut found = 0u8;
        let colors = partition.colors();
        for (probed, color) in colors[..3].iter().copied().enumerate() {
            let result = match settle(session.submit(channel, Code::monochrome(color))?) {
                Ok(result) => result,
                Err(outcome) => return Ok(Some(outcome)),
            };

            if result.total() == 0 {
                session.possibilities.exclude(color);
                continue;
            }

            total += result.total();
            session.reports[partition.index()].confirmed += result.total();
            session.possibilities.set_occurrences(color, result.total());
            found += 1;

            // All of this partition's marks accounted for, or all five
            // occurrences placed, or (on the first partition) the second
            // partition's marks already cover the rest.
            let second_total = session.reports[Partition::Second.index()].total;
            let closed = found == report_total
                || total as usize == SLOTS
                || (partition == Partition::First && (total + second_total) as usize == SLOTS);
            if closed {
                for &rest in &colors[probed + 1..] {
                    session.possibilities.exclude(rest);
                }
                break;
            }
        }

        if found < report_total {
            fourth_unresolved[partition.index()] = true;
        }
    }

    if (total as usize) < SLOTS {
        let mut absorber = Partition::Second;
        if fourth_unresolved[Partition::First.index()] {
            if fourth_unresolved[Partition::Second.index()] {
                // One probe of partition two's designated 4th color splits
                // the remainder between the two open colors.
                let color = Partition::Second.fourth();
                let result = match settle(session.submit(channel, Code::monochrome(color))?) {
                    Ok(result) => result,
                    Err(outcome) => return Ok(Some(outcome)),
                };
                total += result.total();
                session.reports[Partition::Second.index()].confirmed += result.total();
                session.possibilities.set_occurrences(color, result.total());
            }
            absorber = Partition::First;
        }

        let fourth = absorber.fourth();
        let remainder = SLOTS as u8 - total;
        session.possibilities.set_occurrences(fourth, remainder);
        session.reports[absorber.index()].confirmed += remainder;
    } else {
        session.possibilities.exclude(Partition::First.fourth());
        session.possibilities.exclude(Partition::Second.fourth());
    }

    debug!(
        "occurrence counts settled:\n{}",
        session.possibilities
    );
    Ok(None)
}
