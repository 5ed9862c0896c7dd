//! Framework error types.

use thiserror::Error;

use zwgate_points::PointType;

use crate::CommandCode;

/// Errors that can occur when decoding an inbound payload into a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload too short for the mandatory fields.
    #[error("payload too short: expected at least {expected} bytes, got {actual}")]
    PayloadTooShort {
        /// Minimum payload length for the mandatory fields.
        expected: usize,
        /// Actual payload length received.
        actual: usize,
    },

    /// Payload longer than any known variant of the report.
    ///
    /// Decoding fails closed rather than ignoring the tail: extra bytes mean
    /// either a framing bug or a protocol revision this driver does not
    /// understand.
    #[error("payload has trailing bytes: longest known variant is {max} bytes, got {actual}")]
    TrailingBytes {
        /// Longest payload length of any known variant.
        max: usize,
        /// Actual payload length received.
        actual: usize,
    },

    /// The code is one this processor claims but does not decode inbound
    /// (e.g. a Set or Get arriving at the controller).
    #[error("command {0} is not decodable as a report")]
    UnexpectedCommand(CommandCode),
}

/// Errors raised while building the dispatch registry at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two processors claimed the same command code. Fatal: the gateway must
    /// not start with ambiguous dispatch.
    #[error("command code {0} registered twice")]
    DuplicateCode(CommandCode),
}

/// Errors surfaced when classifying and decoding one inbound frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Frame shorter than the 2-byte code header.
    #[error("frame too short for code header: got {actual} bytes")]
    FrameTooShort {
        /// Actual frame length received.
        actual: usize,
    },

    /// No processor registered for the frame's code.
    #[error("no processor registered for {0}")]
    UnknownCode(CommandCode),

    /// The owning processor failed to decode the payload.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors failing one external point-write request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The targeted point name is not one this command class exposes.
    #[error("no writable point named {0:?}")]
    UnknownPoint(String),

    /// The value's shape does not match the targeted point's declared type.
    #[error("type mismatch writing point {point:?}: expected {expected}")]
    TypeMismatch {
        /// Targeted point name.
        point: String,
        /// Declared type of the point.
        expected: PointType,
    },
}
