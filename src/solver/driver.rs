//! Game driver state machine
//!
//! Sequences the deduction phases once each, then loops on the guess
//! selector until the secret is confirmed or the arbiter ends the game:
//! partition probe, color probe, position refinement, tree build, round
//! loop. Terminal states release every structure the session owns.

use crate::core::ArbiterError;
use crate::solver::candidates::{CandidateList, select_next};
use crate::solver::probe::{probe_colors, probe_partitions};
use crate::solver::refine::refine_positions;
use crate::solver::session::{ClientError, GameSession, RoundStatus};
use crate::solver::tree::CombinationTree;
use crate::transport::Channel;
use log::debug;
use std::fmt;

/// How a session ended, short of a fatal fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The secret was confirmed on the given 1-based round.
    Won { rounds: u32 },
    /// The arbiter flagged a game-ending condition.
    Ended(ArbiterError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won { rounds } => write!(f, "won after {rounds} rounds"),
            Self::Ended(error) => write!(f, "{error}"),
        }
    }
}

/// The driver's phases, run once each in order; the round loop repeats
/// until a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    PartitionProbe,
    ColorProbe,
    PositionRefine,
    TreeBuild,
    RoundLoop,
}

impl GameSession {
    /// Play one full game over `channel`.
    ///
    /// All owned structures are released before returning, whatever the
    /// result.
    ///
    /// # Errors
    /// [`ClientError::Transport`] on any channel fault;
    /// [`ClientError::NoConsistentCandidate`] if the selector runs dry,
    /// which with a well-behaved arbiter indicates a solver defect.
    pub fn run<C: Channel>(&mut self, channel: &mut C) -> Result<Outcome, ClientError> {
        let outcome = self.drive(channel);
        self.release();
        outcome
    }

    fn drive<C: Channel>(&mut self, channel: &mut C) -> Result<Outcome, ClientError> {
        let mut phase = Phase::PartitionProbe;
        loop {
            debug!("phase: {phase:?}");
            phase = match phase {
                Phase::PartitionProbe => match probe_partitions(self, channel)? {
                    Some(outcome) => return Ok(outcome),
                    None => Phase::ColorProbe,
                },
                Phase::ColorProbe => match probe_colors(self, channel)? {
                    Some(outcome) => return Ok(outcome),
                    None => Phase::PositionRefine,
                },
                Phase::PositionRefine => {
                    refine_positions(&self.reports, &mut self.possibilities);
                    Phase::TreeBuild
                }
                Phase::TreeBuild => {
                    self.tree = Some(CombinationTree::build(&self.possibilities));
                    let mut candidates = CandidateList::new();
                    if let Some(tree) = &self.tree {
                        tree.generate(&mut candidates);
                    }
                    self.candidates = candidates;
                    // the tree has served its purpose once the list exists
                    self.tree = None;
                    Phase::RoundLoop
                }
                Phase::RoundLoop => return self.round_loop(channel),
            };
        }
    }

    /// Submit constraint-consistent candidates until one scores five reds
    /// or the arbiter calls the game.
    fn round_loop<C: Channel>(&mut self, channel: &mut C) -> Result<Outcome, ClientError> {
        loop {
            let (handle, candidate) = select_next(&self.candidates, &self.processed)
                .ok_or(ClientError::NoConsistentCandidate)?;
            let candidate = *candidate;

            match self.submit(channel, candidate)? {
                RoundStatus::Won { rounds } => return Ok(Outcome::Won { rounds }),
                RoundStatus::Ended(error) => return Ok(Outcome::Ended(error)),
                RoundStatus::Continue(_) => {
                    self.candidates.remove(handle);
                }
            }
        }
    }
}
