//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (2)  │         Body                │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! `Len` is a big-endian `u16`. The body is text in *modified UTF-8*: it is
//! encoded per UTF-16 code unit, so U+0000 becomes `C0 80` and characters
//! outside the BMP become two 3-byte surrogate sequences. This is the layout
//! used by `DataOutputStream.writeUTF`-style peers.

use std::io::{Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, SchedulerError};

/// Header size: 2 bytes body length
pub const HEADER_SIZE: usize = 2;

/// Maximum encoded body size
pub const MAX_BODY_SIZE: usize = u16::MAX as usize;

// =============================================================================
// Modified UTF-8
// =============================================================================

/// Encode text as modified UTF-8
pub fn encode_modified_utf8(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());

    for unit in text.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            // U+0000 lands here too and becomes C0 80
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }

    out
}

/// Decode modified UTF-8 into a `String`
///
/// Rejects truncated or malformed sequences and unpaired surrogates.
pub fn decode_modified_utf8(bytes: &[u8]) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().enumerate();

    while let Some((pos, lead)) = iter.next() {
        let unit = if lead & 0x80 == 0 {
            u16::from(lead)
        } else if lead & 0xE0 == 0xC0 {
            let b2 = continuation(iter.next(), pos)?;
            (u16::from(lead & 0x1F) << 6) | u16::from(b2)
        } else if lead & 0xF0 == 0xE0 {
            let b2 = continuation(iter.next(), pos)?;
            let b3 = continuation(iter.next(), pos)?;
            (u16::from(lead & 0x0F) << 12) | (u16::from(b2) << 6) | u16::from(b3)
        } else {
            return Err(SchedulerError::Protocol(format!(
                "Malformed input around byte {}",
                pos
            )));
        };
        units.push(unit);
    }

    String::from_utf16(&units)
        .map_err(|_| SchedulerError::Protocol("Unpaired surrogate in frame body".to_string()))
}

/// Take one continuation byte, returning its 6 payload bits
fn continuation(next: Option<(usize, u8)>, lead_pos: usize) -> Result<u8> {
    match next {
        Some((_, byte)) if byte & 0xC0 == 0x80 => Ok(byte & 0x3F),
        Some((pos, _)) => Err(SchedulerError::Protocol(format!(
            "Malformed input around byte {}",
            pos
        ))),
        None => Err(SchedulerError::Protocol(format!(
            "Partial character at end of input (lead byte at {})",
            lead_pos
        ))),
    }
}

// =============================================================================
// Frame Encoding/Decoding
// =============================================================================

/// Encode one frame
///
/// Format: body_len (2) + body
pub fn encode_frame(text: &str) -> Result<Bytes> {
    let body = encode_modified_utf8(text);
    if body.len() > MAX_BODY_SIZE {
        return Err(SchedulerError::FrameTooLarge(body.len()));
    }

    let mut frame = BytesMut::with_capacity(HEADER_SIZE + body.len());
    frame.put_u16(body.len() as u16);
    frame.put_slice(&body);

    Ok(frame.freeze())
}

/// Decode one complete frame from bytes
pub fn decode_frame(bytes: &[u8]) -> Result<String> {
    let (header, rest) = match bytes {
        [hi, lo, rest @ ..] => ([*hi, *lo], rest),
        _ => {
            return Err(SchedulerError::Protocol(format!(
                "Incomplete header: expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )))
        }
    };

    let body_len = u16::from_be_bytes(header) as usize;
    let body = rest.get(..body_len).ok_or_else(|| {
        SchedulerError::Protocol(format!(
            "Incomplete body: expected {} bytes, got {}",
            body_len,
            rest.len()
        ))
    })?;

    decode_modified_utf8(body)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one frame from a stream
///
/// Blocks until a complete frame is received. A transport failure is
/// reported as `SchedulerError::Io`; a complete frame whose body is not
/// valid modified UTF-8 as `SchedulerError::Protocol` (the stream stays in
/// sync in that case).
pub fn read_frame<R: Read>(reader: &mut R) -> Result<String> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let body_len = u16::from_be_bytes(header) as usize;
    let mut body = vec![0u8; body_len];
    if body_len > 0 {
        reader.read_exact(&mut body)?;
    }

    decode_modified_utf8(&body)
}

/// Write one frame to a stream
///
/// Does not flush; callers flush once per batch.
pub fn write_frame<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    let frame = encode_frame(text)?;
    writer.write_all(&frame)?;
    Ok(())
}
