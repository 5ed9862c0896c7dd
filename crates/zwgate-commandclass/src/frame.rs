//! Wire frame splitting and stream reassembly.
//!
//! An application frame is a 2-byte code header followed by the payload:
//!
//! ```text
//! +----------+------------+-------------------+
//! | class id | command id | payload bytes ... |
//! +----------+------------+-------------------+
//! ```
//!
//! Serial links deliver a byte stream, not frames, so [`FrameBuffer`]
//! additionally reassembles link frames of the form
//! `[SOF][len][frame bytes ...]`, discarding garbage between frames.

use bytes::{Buf, BytesMut};

use crate::{CommandCode, DispatchError, FRAME_HEADER_SIZE, MAX_FRAME_SIZE};

/// Start-of-frame marker on the serial link.
pub const SOF: u8 = 0x01;

/// One application frame: code header plus payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The `(class, command)` code from the header.
    pub code: CommandCode,
    /// Payload bytes after the header.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Parse a frame, copying the payload.
    pub fn parse(bytes: &[u8]) -> Result<Self, DispatchError> {
        let (code, payload) = split_frame(bytes)?;
        Ok(Frame {
            code,
            payload: payload.to_vec(),
        })
    }

    /// Encode the frame back to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(FRAME_HEADER_SIZE + self.payload.len());
        buf.push(self.code.class_id);
        buf.push(self.code.command_id);
        buf.extend_from_slice(&self.payload);
        buf
    }
}

/// Split a frame into its code and a borrowed payload slice.
pub fn split_frame(bytes: &[u8]) -> Result<(CommandCode, &[u8]), DispatchError> {
    if bytes.len() < FRAME_HEADER_SIZE {
        return Err(DispatchError::FrameTooShort {
            actual: bytes.len(),
        });
    }
    let code = CommandCode::new(bytes[0], bytes[1]);
    Ok((code, &bytes[FRAME_HEADER_SIZE..]))
}

/// Reassembles application frames from a raw link byte stream.
///
/// Link format: `SOF` marker, one length byte, then `len` frame bytes.
/// Bytes before a `SOF` marker are discarded as line noise.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl FrameBuffer {
    /// Create an empty frame buffer.
    pub fn new() -> Self {
        FrameBuffer {
            buffer: BytesMut::with_capacity(MAX_FRAME_SIZE),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to extract a complete application frame from the buffer.
    ///
    /// Returns `Some(frame_bytes)` if a complete frame is available, or
    /// `None` if more data is needed.
    pub fn next_frame(&mut self) -> Option<Vec<u8>> {
        loop {
            // Scan for the SOF marker, discarding any preceding garbage
            while !self.buffer.is_empty() && self.buffer[0] != SOF {
                self.buffer.advance(1);
            }

            // Need at least SOF + length byte
            if self.buffer.len() < 2 {
                return None;
            }

            let len = self.buffer[1] as usize;

            // A frame shorter than the code header is not a real frame;
            // treat the marker as noise and rescan.
            if len < FRAME_HEADER_SIZE {
                self.buffer.advance(1);
                continue;
            }

            if self.buffer.len() < 2 + len {
                return None;
            }

            self.buffer.advance(2);
            return Some(self.buffer.split_to(len).to_vec());
        }
    }

    /// Wrap an application frame for link transmission.
    pub fn encode_link(frame: &[u8]) -> Vec<u8> {
        debug_assert!(frame.len() <= u8::MAX as usize);
        let mut buf = Vec::with_capacity(2 + frame.len());
        buf.push(SOF);
        buf.push(frame.len() as u8);
        buf.extend_from_slice(frame);
        buf
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
