//! Deduction engine
//!
//! The solver plays in phases: partition probing bounds where colors occur,
//! monochrome color probes pin down occurrence counts, refinement narrows
//! position sets, the combination tree enumerates every assignment still
//! possible, and the round loop submits constraint-consistent candidates
//! until the secret is confirmed.

pub mod candidates;
mod driver;
pub mod possibility;
mod probe;
mod refine;
mod session;
mod tree;

pub use driver::Outcome;
pub use session::{ClientError, GameSession, PartitionReport, RoundStatus};
pub use tree::CombinationTree;
