//! Client
//!
//! The receiving side of the protocol: send one line, collect one batch.

use std::io::{BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::Result;
use crate::protocol::{read_batch, write_frame, Batch};

/// A connection to a scheduler server
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to a server
    ///
    /// The server speaks first: call [`Client::receive_batch`] to read the
    /// greeting before sending anything.
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
        })
    }

    /// Send one line
    pub fn send(&mut self, line: &str) -> Result<()> {
        write_frame(&mut self.writer, line)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read frames up to the next sentinel
    pub fn receive_batch(&mut self) -> Result<Batch> {
        read_batch(&mut self.reader)
    }

    /// Send one line and read its response batch
    pub fn request(&mut self, line: &str) -> Result<Batch> {
        self.send(line)?;
        self.receive_batch()
    }
}
