//! Frame definitions
//!
//! Classifies frame bodies into display lines and control sentinels, and
//! collects batches on the receiving side.

use std::io::Read;

use crate::error::Result;
use super::codec::read_frame;

/// Terminates every response batch
pub const END_TRANSMISSION: &str = "END_TRANSMISSION";

/// Sent once, right before the server closes the socket after `exit`
pub const END_CONNECTION: &str = "END_CONNECTION";

/// One received frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Display text (may contain markup)
    Line(String),

    /// End of the current batch
    EndTransmission,

    /// The server is closing the connection
    EndConnection,
}

impl Frame {
    /// Classify a frame body
    pub fn from_body(body: String) -> Self {
        match body.as_str() {
            END_TRANSMISSION => Frame::EndTransmission,
            END_CONNECTION => Frame::EndConnection,
            _ => Frame::Line(body),
        }
    }

    /// The body as it goes on the wire
    pub fn body(&self) -> &str {
        match self {
            Frame::Line(text) => text,
            Frame::EndTransmission => END_TRANSMISSION,
            Frame::EndConnection => END_CONNECTION,
        }
    }
}

/// How a batch was terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchEnd {
    /// `END_TRANSMISSION`: the peer may send its next line
    Transmission,

    /// `END_CONNECTION`: the session ended gracefully
    Connection,
}

/// Display lines of one response, plus its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub lines: Vec<String>,
    pub end: BatchEnd,
}

/// Read frames until a sentinel ends the batch
pub fn read_batch<R: Read>(reader: &mut R) -> Result<Batch> {
    let mut lines = Vec::new();

    loop {
        match Frame::from_body(read_frame(reader)?) {
            Frame::Line(text) => lines.push(text),
            Frame::EndTransmission => {
                return Ok(Batch {
                    lines,
                    end: BatchEnd::Transmission,
                })
            }
            Frame::EndConnection => {
                return Ok(Batch {
                    lines,
                    end: BatchEnd::Connection,
                })
            }
        }
    }
}
