//! Mastermind Client
//!
//! An automated solver for an 8-color / 5-slot Mastermind game played
//! against a remote arbiter, deducing the secret code by pure deduction:
//! partition probes, per-color occurrence counting, position refinement,
//! and an exhaustive combination search filtered by every result received.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_client::solver::GameSession;
//! use mastermind_client::transport::TcpChannel;
//!
//! let mut channel = TcpChannel::connect(("localhost", 1280)).unwrap();
//! let mut session = GameSession::new();
//! let outcome = session.run(&mut channel).unwrap();
//! println!("{outcome}");
//! ```

// Core domain types
pub mod core;

// Deduction phases and the game driver
pub mod solver;

// Wire transport to the arbiter
pub mod transport;

// Terminal outcome reporting
pub mod output;

// Arbiter test doubles
pub mod testing;
