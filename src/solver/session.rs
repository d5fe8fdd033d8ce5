//! Game session state and guess bookkeeping
//!
//! A [`GameSession`] aggregates everything the deduction phases own: the
//! round counter, both partition reports, the possibility table, the
//! combination tree, and the candidate and processed lists. Every guess
//! funnels through [`GameSession::submit`], which frames the code, performs
//! the round-trip, records the result, and classifies the round.

use crate::core::{ArbiterError, Code, GuessResult, Response, SLOTS};
use crate::solver::candidates::{CandidateList, ProcessedGuess};
use crate::solver::possibility::PossibilityTable;
use crate::solver::tree::CombinationTree;
use crate::transport::Channel;
use log::debug;
use std::fmt;
use std::io;

/// Fatal faults that abort the session.
#[derive(Debug)]
pub enum ClientError {
    /// Channel read or write failure; surfaced immediately, never retried.
    Transport(io::Error),
    /// The guess selector found no consistent candidate although candidates
    /// remain — a defect upstream in tree construction or refinement.
    NoConsistentCandidate,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport fault: {err}"),
            Self::NoConsistentCandidate => {
                write!(f, "no remaining candidate is consistent with the results")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::NoConsistentCandidate => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        Self::Transport(err)
    }
}

/// What one submitted guess meant for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Marks received, game still open.
    Continue(GuessResult),
    /// All five reds: the secret was hit on this round.
    Won { rounds: u32 },
    /// The arbiter flagged a game-ending condition.
    Ended(ArbiterError),
}

/// One partition probe's interpretation, shared by the counting and
/// refinement phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionReport {
    /// Exact-position marks from the partition probe (possibly a forced
    /// sentinel, see the degeneracy rules).
    pub red: u8,
    pub white: u8,
    /// Aggregate marks attributed to this partition; forced to 0 or 5 when
    /// the other partition's probe already settles it.
    pub total: u8,
    /// Occurrences of this partition's colors confirmed so far by color
    /// probes and remainder arithmetic.
    pub confirmed: u8,
}

impl PartitionReport {
    /// Report as measured by the partition's own probe.
    #[must_use]
    pub const fn measured(result: GuessResult) -> Self {
        Self {
            red: result.red,
            white: result.white,
            total: result.red + result.white,
            confirmed: 0,
        }
    }

    /// Forced report for a partition known to contribute nothing.
    pub const ABSENT: Self = Self {
        red: 0,
        white: 0,
        total: 0,
        confirmed: 0,
    };

    /// Forced report for a partition known to supply all five occurrences.
    /// The red field is a sentinel keeping both refinement rules off a
    /// partition that was never actually probed.
    pub const ALL_PRESENT: Self = Self {
        red: 1,
        white: 0,
        total: 5,
        confirmed: 0,
    };
}

/// All state owned by one game against the arbiter.
#[derive(Debug, Default)]
pub struct GameSession {
    round: u32,
    pub(crate) reports: [PartitionReport; 2],
    pub(crate) possibilities: PossibilityTable,
    pub(crate) tree: Option<CombinationTree>,
    pub(crate) candidates: CandidateList,
    pub(crate) processed: Vec<ProcessedGuess>,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds played so far.
    #[inline]
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Play one round: frame and send `code`, decode the response, append
    /// the processed record, and classify the result. Game-ending flags are
    /// checked before the win condition, matching the wire contract.
    pub(crate) fn submit<C: Channel>(
        &mut self,
        channel: &mut C,
        code: Code,
    ) -> Result<RoundStatus, ClientError> {
        self.round += 1;
        let byte = channel.exchange(code.wire_bytes())?;
        let Response { result, error } = Response::decode(byte);

        debug!(
            "round {}: [{code}] -> red {} white {}",
            self.round, result.red, result.white
        );

        self.processed.push(ProcessedGuess {
            code,
            red: result.red,
        });

        if let Some(error) = error {
            return Ok(RoundStatus::Ended(error));
        }
        if result.red as usize == SLOTS {
            return Ok(RoundStatus::Won {
                rounds: self.round,
            });
        }
        Ok(RoundStatus::Continue(result))
    }

    /// Release every owned structure. Idempotent and safe at any phase
    /// boundary, including before any phase has produced structures.
    pub fn release(&mut self) {
        self.tree = None;
        self.candidates.clear();
        self.processed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::testing::ScriptedChannel;

    #[test]
    fn submit_records_processed_guess() {
        // red 1, white 2, no error
        let mut channel = ScriptedChannel::new(vec![0b00_010_001]);
        let mut session = GameSession::new();

        let status = session
            .submit(&mut channel, Code::monochrome(Color::Red))
            .unwrap();
        assert_eq!(
            status,
            RoundStatus::Continue(GuessResult::new(1, 2))
        );
        assert_eq!(session.round(), 1);
        assert_eq!(session.processed.len(), 1);
        assert_eq!(session.processed[0].red, 1);
    }

    #[test]
    fn submit_reports_win() {
        let mut channel = ScriptedChannel::new(vec![0b00_000_101]);
        let mut session = GameSession::new();

        let status = session
            .submit(&mut channel, Code::monochrome(Color::Red))
            .unwrap();
        assert_eq!(status, RoundStatus::Won { rounds: 1 });
    }

    #[test]
    fn error_flag_wins_over_red_count() {
        // red bits say 5, but the error code says the game is over
        let mut channel = ScriptedChannel::new(vec![0b10_000_101]);
        let mut session = GameSession::new();

        let status = session
            .submit(&mut channel, Code::monochrome(Color::Red))
            .unwrap();
        assert_eq!(status, RoundStatus::Ended(ArbiterError::GameLost));
    }

    #[test]
    fn release_is_idempotent() {
        let mut session = GameSession::new();
        // before any phase has produced structures
        session.release();

        session.candidates.push(Code::monochrome(Color::Beige));
        session.processed.push(ProcessedGuess {
            code: Code::monochrome(Color::Beige),
            red: 0,
        });
        session.release();
        assert!(session.candidates.is_empty());
        assert!(session.processed.is_empty());
        assert!(session.tree.is_none());

        session.release();
        assert!(session.candidates.is_empty());
    }
}
