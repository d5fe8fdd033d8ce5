//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies: the color palette and its probe partitions, slot position
//! sets, the packed code representation, and arbiter response decoding.

mod code;
mod color;
mod response;
mod slots;

pub use code::Code;
pub use color::{Color, Partition};
pub use response::{ArbiterError, GuessResult, Response};
pub use slots::{Placements, SLOTS, SlotSet};
