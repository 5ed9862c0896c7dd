//! SwitchBinary command class (0x25): on/off switching.
//!
//! V1 carries a single value byte (0x00 off, 0xFF on). V2 appends a duration
//! byte to Set and target-value/duration bytes to Report; a V1 device simply
//! omits them, so the report decoder branches on payload length alone.

use zwgate_points::{
    PointBridge, PointDeclaration, PointError, PointPath, PointType, PointValue,
};

use crate::processor::target_point_name;
use crate::{
    Command, CommandArgument, CommandClassProcessor, CommandClassVersion, CommandCode,
    DecodeError, OutboundCommand, Report, WriteError, CLASS_SWITCH_BINARY, SWITCH_BINARY_GET,
    SWITCH_BINARY_REPORT, SWITCH_BINARY_SET,
};

/// Set command code.
pub const SET: CommandCode = CommandCode::new(CLASS_SWITCH_BINARY, SWITCH_BINARY_SET);
/// Get command code.
pub const GET: CommandCode = CommandCode::new(CLASS_SWITCH_BINARY, SWITCH_BINARY_GET);
/// Report command code.
pub const REPORT: CommandCode = CommandCode::new(CLASS_SWITCH_BINARY, SWITCH_BINARY_REPORT);

/// Point name for the derived boolean switch state.
pub const POINT_ON: &str = "On";
/// Point name for the raw value byte.
pub const POINT_VALUE: &str = "Value";

/// Outbound SwitchBinary commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchBinaryCommand {
    /// Request the current switch state.
    Get,
    /// Set the switch state, optionally over a transition duration (V2).
    Set {
        /// Target value: 0x00 off, 0xFF on, other bytes device-defined.
        value: u8,
        /// Transition duration in seconds; V2 only.
        duration: Option<u8>,
    },
}

impl SwitchBinaryCommand {
    /// Set on/off. V1.
    pub fn on_off(on: bool) -> Self {
        SwitchBinaryCommand::Set {
            value: if on { 0xFF } else { 0x00 },
            duration: None,
        }
    }

    /// Set a raw value byte. V1.
    pub fn with_value(value: u8) -> Self {
        SwitchBinaryCommand::Set {
            value,
            duration: None,
        }
    }

    /// Set on/off over a transition duration. V2.
    pub fn on_off_with_duration(on: bool, duration: u8) -> Self {
        Self::with_value_and_duration(if on { 0xFF } else { 0x00 }, duration)
    }

    /// Set a raw value byte over a transition duration. V2.
    pub fn with_value_and_duration(value: u8, duration: u8) -> Self {
        SwitchBinaryCommand::Set {
            value,
            duration: Some(duration),
        }
    }
}

impl Command for SwitchBinaryCommand {
    fn code(&self) -> CommandCode {
        match self {
            SwitchBinaryCommand::Get => GET,
            SwitchBinaryCommand::Set { .. } => SET,
        }
    }

    fn min_version(&self) -> CommandClassVersion {
        match self {
            SwitchBinaryCommand::Set {
                duration: Some(_), ..
            } => CommandClassVersion::V2,
            _ => CommandClassVersion::V1,
        }
    }

    fn encode_payload(&self, buf: &mut Vec<u8>) {
        match self {
            SwitchBinaryCommand::Get => {}
            SwitchBinaryCommand::Set { value, duration } => {
                buf.push(*value);
                if let Some(duration) = duration {
                    // Version 2
                    buf.push(*duration);
                }
            }
        }
    }
}

/// Decoded SwitchBinary report.
///
/// Payload is `[value]` (V1) or `[value, target_value, duration]` (V2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchBinaryReport {
    /// Current value: 0x00 off, nonzero on.
    pub value: u8,
    /// Value the device is transitioning toward. V2 only.
    pub target_value: Option<u8>,
    /// Remaining transition duration in seconds. V2 only.
    pub duration: Option<u8>,
}

impl SwitchBinaryReport {
    /// Longest known payload variant, in bytes.
    const MAX_PAYLOAD: usize = 3;

    /// Decode a report payload.
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.is_empty() {
            return Err(DecodeError::PayloadTooShort {
                expected: 1,
                actual: 0,
            });
        }
        if payload.len() > Self::MAX_PAYLOAD {
            return Err(DecodeError::TrailingBytes {
                max: Self::MAX_PAYLOAD,
                actual: payload.len(),
            });
        }

        let value = payload[0];

        // The V2 block is all-or-nothing: two more bytes or none.
        let (target_value, duration) = match payload.len() {
            1 => (None, None),
            3 => (Some(payload[1]), Some(payload[2])),
            len => {
                return Err(DecodeError::PayloadTooShort {
                    expected: 3,
                    actual: len,
                })
            }
        };

        Ok(SwitchBinaryReport {
            value,
            target_value,
            duration,
        })
    }

    /// Whether the switch is on (any nonzero value).
    pub fn is_on(&self) -> bool {
        self.value != 0
    }
}

impl Report for SwitchBinaryReport {
    fn update(
        &self,
        path: &PointPath,
        _version: CommandClassVersion,
        _secure: bool,
        bridge: &mut dyn PointBridge,
    ) {
        bridge.update_point(&path.point(POINT_ON), PointValue::Bool(self.is_on()));
        bridge.update_point(&path.point(POINT_VALUE), PointValue::Byte(self.value));
    }
}

/// Processor for the SwitchBinary command class.
pub struct SwitchBinaryProcessor;

impl CommandClassProcessor for SwitchBinaryProcessor {
    fn supported_codes(&self) -> &'static [CommandCode] {
        &[SET, GET, REPORT]
    }

    fn decode(
        &self,
        code: CommandCode,
        _argument: &CommandArgument,
        payload: &[u8],
    ) -> Result<Box<dyn Report>, DecodeError> {
        if code != REPORT {
            return Err(DecodeError::UnexpectedCommand(code));
        }
        Ok(Box::new(SwitchBinaryReport::decode(payload)?))
    }

    fn describe_points(
        &self,
        path: &PointPath,
        _version: CommandClassVersion,
        bridge: &mut dyn PointBridge,
    ) -> Result<(), PointError> {
        bridge.declare_point(PointDeclaration::new(
            path.point(POINT_ON),
            PointType::Bool,
            true,
        ))?;
        bridge.declare_point(PointDeclaration::new(
            path.point(POINT_VALUE),
            PointType::Byte,
            true,
        ))?;
        Ok(())
    }

    fn initial_requests(
        &self,
        _path: &PointPath,
        _version: CommandClassVersion,
        secure: bool,
        _first_contact: bool,
    ) -> Vec<OutboundCommand> {
        vec![OutboundCommand::new(SwitchBinaryCommand::Get, secure)]
    }

    fn write(
        &self,
        path: &PointPath,
        _version: CommandClassVersion,
        secure: bool,
        value: &PointValue,
    ) -> Result<OutboundCommand, WriteError> {
        let point = target_point_name(path);
        let command = match point {
            POINT_ON => {
                let on = value.as_bool().ok_or_else(|| WriteError::TypeMismatch {
                    point: point.to_string(),
                    expected: PointType::Bool,
                })?;
                SwitchBinaryCommand::on_off(on)
            }
            POINT_VALUE => {
                let raw = value.as_byte().ok_or_else(|| WriteError::TypeMismatch {
                    point: point.to_string(),
                    expected: PointType::Byte,
                })?;
                SwitchBinaryCommand::with_value(raw)
            }
            other => return Err(WriteError::UnknownPoint(other.to_string())),
        };
        Ok(OutboundCommand::new(command, secure))
    }
}
