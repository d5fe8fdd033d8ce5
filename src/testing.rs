//! Test doubles for the arbiter side of the wire protocol.
//!
//! [`StubArbiter`] is a reference arbiter: it decodes each guess frame,
//! verifies the parity bit, and scores the guess against a fixed secret
//! exactly as the remote does, so full games can be driven in-process.
//! [`ScriptedChannel`] replays a canned byte sequence for unit tests that
//! pin down a single phase.

use crate::core::{Code, Color, SLOTS};
use crate::transport::Channel;
use std::collections::VecDeque;
use std::io;

/// Replays a fixed list of result bytes, one per exchange.
#[derive(Debug)]
pub struct ScriptedChannel {
    responses: VecDeque<u8>,
    requests: Vec<[u8; 2]>,
}

impl ScriptedChannel {
    #[must_use]
    pub fn new(responses: Vec<u8>) -> Self {
        Self {
            responses: responses.into(),
            requests: Vec::new(),
        }
    }

    /// Number of exchanges performed so far.
    #[must_use]
    pub fn exchanges(&self) -> usize {
        self.requests.len()
    }

    /// The guess frames received, in order.
    #[must_use]
    pub fn requests(&self) -> &[[u8; 2]] {
        &self.requests
    }
}

impl Channel for ScriptedChannel {
    fn exchange(&mut self, request: [u8; 2]) -> io::Result<u8> {
        self.requests.push(request);
        self.responses.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}

/// In-process arbiter holding a secret code and scoring every guess.
#[derive(Debug)]
pub struct StubArbiter {
    secret: Code,
    rounds: u32,
    /// Error code (1-3) injected into the response of the given 1-based
    /// round, for driving the game-ending paths.
    fail_on: Option<(u32, u8)>,
}

impl StubArbiter {
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self {
            secret,
            rounds: 0,
            fail_on: None,
        }
    }

    /// Respond with `error_code` in bits 6-7 on round `round`.
    #[must_use]
    pub fn failing_at(mut self, round: u32, error_code: u8) -> Self {
        self.fail_on = Some((round, error_code));
        self
    }

    /// Rounds played against this arbiter.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Score `guess` against `secret`: red marks for matching slots, white
    /// marks for surplus color matches at other positions.
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> (u8, u8) {
        let red = guess.exact_matches(secret);

        let mut secret_counts = [0u8; 8];
        let mut guess_counts = [0u8; 8];
        for slot in 0..SLOTS {
            secret_counts[secret.slot(slot).index()] += 1;
            guess_counts[guess.slot(slot).index()] += 1;
        }
        let matched: u8 = Color::ALL
            .iter()
            .map(|color| secret_counts[color.index()].min(guess_counts[color.index()]))
            .sum();

        (red, matched - red)
    }
}

impl Channel for StubArbiter {
    fn exchange(&mut self, request: [u8; 2]) -> io::Result<u8> {
        self.rounds += 1;

        if let Some((round, code)) = self.fail_on
            && self.rounds == round
        {
            return Ok(code << 6);
        }

        let word = u16::from(request[0]) | u16::from(request[1]) << 8;
        let parity = (0..16).fold(0u16, |acc, bit| acc ^ (word >> bit) & 0x1);
        if parity != 0 {
            // parity rejection
            return Ok(1 << 6);
        }

        let guess = Code::unpack(word);
        let (red, white) = Self::score(&self.secret, &guess);
        Ok(red | white << 3)
    }
}
