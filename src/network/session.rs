//! Session
//!
//! Serves one client connection: greet, then read a line, dispatch it and
//! answer with a batch until the client exits or disappears.
//!
//! ## States
//! ```text
//! Open ──greeting──▶ AwaitingCommand ──frame──▶ Dispatching ──batch──┐
//!                         │  ▲                       │               │
//!                read fails  └───────────────────────┼───────────────┘
//!                         ▼                          │ exit
//!                       Closed ◀────END_CONNECTION───┘
//! ```

use std::io::{BufReader, BufWriter, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::Arc;

use crate::error::{Result, SchedulerError};
use crate::protocol::{parse, read_frame, response, write_frame, Frame};
use crate::store::Store;

use super::dispatch::{execute, Reply};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepted, greeting not yet sent
    Open,

    /// Blocked reading the next client frame
    AwaitingCommand,

    /// Parsing, executing and answering one line
    Dispatching,

    /// Terminal
    Closed,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The client sent `exit`; `END_CONNECTION` was delivered
    Exited,

    /// The peer went away; nothing more was sent
    Disconnected,
}

/// Handles a single client connection
pub struct Session<R: Read, W: Write> {
    reader: R,
    writer: W,

    /// Shared read access to the data
    store: Arc<dyn Store>,

    /// Peer address for logging
    peer_addr: String,

    state: SessionState,

    /// Socket handle shut down on exit (TCP sessions only)
    socket: Option<TcpStream>,
}

impl Session<BufReader<TcpStream>, BufWriter<TcpStream>> {
    /// Create a session over an accepted TCP connection
    pub fn from_tcp(stream: TcpStream, store: Arc<dyn Store>, nodelay: bool) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_nodelay(nodelay)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream.try_clone()?;

        let mut session = Session::new(
            BufReader::new(read_stream),
            BufWriter::new(write_stream),
            store,
            peer_addr,
        );
        session.socket = Some(stream);
        Ok(session)
    }
}

impl<R: Read, W: Write> Session<R, W> {
    /// Create a session over arbitrary streams
    pub fn new(reader: R, writer: W, store: Arc<dyn Store>, peer_addr: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            store,
            peer_addr: peer_addr.into(),
            state: SessionState::Open,
            socket: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Give back the write half (for inspecting output in tests)
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run the session to completion (blocking)
    ///
    /// Returns `Ok` for both a graceful exit and a vanished peer. `Err` is
    /// reserved for write failures that are not disconnects.
    pub fn run(&mut self) -> Result<SessionEnd> {
        if self.state == SessionState::Closed {
            return Ok(SessionEnd::Disconnected);
        }

        tracing::debug!("Session opened for {}", self.peer_addr);

        let outcome = self.serve();
        self.state = SessionState::Closed;

        match outcome {
            Ok(end) => {
                tracing::debug!("Session for {} ended: {:?}", self.peer_addr, end);
                Ok(end)
            }
            Err(e) if e.is_disconnect() => {
                tracing::debug!(
                    "Client {} disconnected before response could be sent: {}",
                    self.peer_addr,
                    e
                );
                Ok(SessionEnd::Disconnected)
            }
            Err(e) => {
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                Err(e)
            }
        }
    }

    fn serve(&mut self) -> Result<SessionEnd> {
        self.send_batch(&response::greeting(), Frame::EndTransmission)?;

        loop {
            self.state = SessionState::AwaitingCommand;

            let line = match read_frame(&mut self.reader) {
                Ok(line) => line,
                Err(SchedulerError::Protocol(msg)) => {
                    tracing::warn!("Unreadable frame from {}: {}", self.peer_addr, msg);
                    self.send_batch(&[], Frame::EndTransmission)?;
                    continue;
                }
                Err(e) => {
                    tracing::debug!("Client {} is gone: {}", self.peer_addr, e);
                    return Ok(SessionEnd::Disconnected);
                }
            };

            self.state = SessionState::Dispatching;
            tracing::trace!("Received line from {}: {:?}", self.peer_addr, line);

            let Some(command) = parse(&line) else {
                self.send_batch(&[], Frame::EndTransmission)?;
                continue;
            };

            match execute(self.store.as_ref(), &command) {
                Reply::Batch(lines) => self.send_batch(&lines, Frame::EndTransmission)?,
                Reply::Close(lines) => {
                    self.send_batch(&lines, Frame::EndConnection)?;
                    self.close();
                    return Ok(SessionEnd::Exited);
                }
            }
        }
    }

    /// Write display lines plus a terminating sentinel, then flush
    ///
    /// A line too long for one frame is dropped; the batch is still
    /// terminated.
    fn send_batch(&mut self, lines: &[String], terminator: Frame) -> Result<()> {
        for line in lines {
            match write_frame(&mut self.writer, line) {
                Ok(()) => {}
                Err(SchedulerError::FrameTooLarge(len)) => {
                    tracing::warn!(
                        "Dropping {}-byte line for {}: exceeds frame limit",
                        len,
                        self.peer_addr
                    );
                }
                Err(e) => return Err(e),
            }
        }
        write_frame(&mut self.writer, terminator.body())?;
        self.writer.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if let Some(socket) = self.socket.take() {
            if let Err(e) = socket.shutdown(Shutdown::Both) {
                tracing::debug!("Shutdown of {} failed: {}", self.peer_addr, e);
            }
        }
    }
}
