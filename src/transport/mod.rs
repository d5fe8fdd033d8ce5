//! Request/response transport to the remote arbiter
//!
//! The solver core builds the 2-byte guess frame (colors plus parity) and
//! decodes the result byte; a [`Channel`] only moves those bytes. Exactly
//! one round-trip per guess, blocking until the arbiter answers.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

/// One blocking guess/response round-trip over a reliable byte channel.
///
/// Implementations fail only with a transport-level fault; the game driver
/// treats any error as fatal and does not retry.
pub trait Channel {
    /// Send the framed guess and read back the single result byte.
    fn exchange(&mut self, request: [u8; 2]) -> io::Result<u8>;
}

/// TCP transport to the arbiter server.
pub struct TcpChannel {
    stream: TcpStream,
}

impl TcpChannel {
    /// Connect to the arbiter at `addr`.
    ///
    /// # Errors
    /// Returns the underlying I/O error if resolution or connection fails.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        let stream = TcpStream::connect(addr)?;
        Ok(Self { stream })
    }
}

impl Channel for TcpChannel {
    fn exchange(&mut self, request: [u8; 2]) -> io::Result<u8> {
        self.stream.write_all(&request)?;
        let mut response = [0u8; 1];
        self.stream.read_exact(&mut response)?;
        Ok(response[0])
    }
}
