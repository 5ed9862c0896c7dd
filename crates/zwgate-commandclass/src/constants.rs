//! Protocol constants
//!
//! Command class identifiers and the per-class command identifiers, as
//! assigned by the device protocol. Codes are grouped by command class;
//! the registry validates at startup that no two processors claim the same
//! `(class, command)` pair.

// ============================================================================
// Command class identifiers
// ============================================================================

/// Binary switch command class.
pub const CLASS_SWITCH_BINARY: u8 = 0x25;

// ============================================================================
// SwitchBinary commands (class 0x25)
// ============================================================================

/// Set the switch state.
pub const SWITCH_BINARY_SET: u8 = 0x01;
/// Request the current switch state.
pub const SWITCH_BINARY_GET: u8 = 0x02;
/// Report of the current switch state.
pub const SWITCH_BINARY_REPORT: u8 = 0x03;

// ============================================================================
// Framing
// ============================================================================

/// Bytes of code header on every frame: `[class id][command id]`.
pub const FRAME_HEADER_SIZE: usize = 2;

/// Maximum application frame size accepted by the stream reassembler.
pub const MAX_FRAME_SIZE: usize = 256;
