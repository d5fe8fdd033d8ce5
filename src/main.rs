//! Mastermind Client - CLI
//!
//! Connects to an arbiter server over TCP and plays one game to the end,
//! reporting the outcome on the console and through the exit code.

use anyhow::{Context, Result};
use clap::Parser;
use mastermind_client::core::ArbiterError;
use mastermind_client::output::print_outcome;
use mastermind_client::solver::{GameSession, Outcome};
use mastermind_client::transport::TcpChannel;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mastermind_client",
    about = "Deductive Mastermind client (8 colors, 5 slots) for a remote arbiter",
    version,
    author
)]
struct Cli {
    /// Arbiter host name or address
    host: String,

    /// Arbiter TCP port
    port: u16,

    /// Increase log detail (-v: solver phases, -vv: tree and candidates)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match play(&cli) {
        Ok(outcome) => {
            print_outcome(&outcome);
            exit_code(&outcome)
        }
        Err(err) => {
            eprintln!("mastermind_client: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Connect and run a single session to its terminal state.
fn play(cli: &Cli) -> Result<Outcome> {
    let mut channel = TcpChannel::connect((cli.host.as_str(), cli.port))
        .with_context(|| format!("connecting to {}:{}", cli.host, cli.port))?;

    let mut session = GameSession::new();
    session.run(&mut channel).context("game aborted")
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Exit codes mirror the arbiter's verdict: 0 win, 2 parity rejection,
/// 3 game lost, 4 both.
fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Won { .. } => ExitCode::SUCCESS,
        Outcome::Ended(ArbiterError::Parity) => ExitCode::from(2),
        Outcome::Ended(ArbiterError::GameLost) => ExitCode::from(3),
        Outcome::Ended(ArbiterError::Multiple) => ExitCode::from(4),
    }
}
