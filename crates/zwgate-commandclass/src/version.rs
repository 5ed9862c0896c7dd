//! Command class versions.
//!
//! Each command class is versioned by the protocol; later versions add
//! trailing optional fields to existing messages. The version is advisory
//! metadata carried by outbound-command constructors; inbound decoding never
//! consults it and branches on payload length alone, so the decoder stays
//! self-sufficient from the bytes.

/// Protocol version of a command class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandClassVersion {
    /// Initial version.
    V1,
    /// Adds trailing duration/target fields to several messages.
    V2,
}

impl CommandClassVersion {
    /// Numeric version as negotiated on the wire.
    pub fn as_u8(&self) -> u8 {
        match self {
            CommandClassVersion::V1 => 1,
            CommandClassVersion::V2 => 2,
        }
    }

    /// Parse a negotiated numeric version, clamping unknown higher versions
    /// to the latest one this driver understands.
    pub fn from_negotiated(version: u8) -> Self {
        match version {
            0 | 1 => CommandClassVersion::V1,
            _ => CommandClassVersion::V2,
        }
    }
}

impl std::fmt::Display for CommandClassVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(CommandClassVersion::V1 < CommandClassVersion::V2);
    }

    #[test]
    fn test_from_negotiated() {
        assert_eq!(CommandClassVersion::from_negotiated(1), CommandClassVersion::V1);
        assert_eq!(CommandClassVersion::from_negotiated(2), CommandClassVersion::V2);
        // Future versions clamp to the latest known
        assert_eq!(CommandClassVersion::from_negotiated(5), CommandClassVersion::V2);
    }
}
