//! Terminal outcome reporting
//!
//! Colored console report of how the game ended, mirroring the arbiter's
//! verdict onto stdout/stderr.

use crate::core::ArbiterError;
use crate::solver::Outcome;
use colored::Colorize;

/// Print the final outcome: wins to stdout, arbiter-flagged endings to
/// stderr.
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Won { rounds } => {
            println!(
                "{}",
                format!("Code found in {rounds} rounds").green().bold()
            );
        }
        Outcome::Ended(error) => {
            let message = match error {
                ArbiterError::Parity => "Parity error".to_string(),
                ArbiterError::GameLost => "Game lost".to_string(),
                ArbiterError::Multiple => "Parity error and game lost".to_string(),
            };
            eprintln!("{}", message.red().bold());
        }
    }
}
