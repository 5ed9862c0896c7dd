//! Outbound command contract.

use crate::{CommandClassVersion, CommandCode, FRAME_HEADER_SIZE};

/// An outbound command: a fixed code plus command-specific payload fields.
///
/// Implemented by one enum per command class. Fields added by later protocol
/// versions are present only when the command was built through a
/// version-aware constructor; presence is decided at construction time, not
/// at encode time.
pub trait Command: std::fmt::Debug + Send + Sync {
    /// The `(class, command)` code of this command.
    fn code(&self) -> CommandCode;

    /// Minimum command-class version the populated fields require. Advisory
    /// metadata for tooling and diagnostics; never consulted when decoding.
    fn min_version(&self) -> CommandClassVersion;

    /// Append the payload bytes, in the command's fixed field order.
    fn encode_payload(&self, buf: &mut Vec<u8>);

    /// Encode the full wire frame: code header, then payload.
    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(FRAME_HEADER_SIZE + 4);
        let code = self.code();
        buf.push(code.class_id);
        buf.push(code.command_id);
        self.encode_payload(&mut buf);
        buf
    }
}

/// A command ready for transmission, tagged with the channel it must use.
///
/// The secure flag is opaque to this crate: it tells the transport to send
/// the frame through the encrypted channel, nothing more.
#[derive(Debug)]
pub struct OutboundCommand {
    /// The command to encode and send.
    pub command: Box<dyn Command>,
    /// Whether the frame must go out on the secure channel.
    pub secure: bool,
}

impl OutboundCommand {
    /// Wrap a command for transmission.
    pub fn new(command: impl Command + 'static, secure: bool) -> Self {
        OutboundCommand {
            command: Box::new(command),
            secure,
        }
    }

    /// Encode the wrapped command's wire frame.
    pub fn encode(&self) -> Vec<u8> {
        self.command.encode()
    }
}
