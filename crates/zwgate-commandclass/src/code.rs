//! Command code identity.

/// The `(class, command)` pair identifying one message type.
///
/// Used as the dispatch key: equality and hashing cover both fields. Codes
/// are constructed once as per-class constants and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandCode {
    /// Command class identifier.
    pub class_id: u8,
    /// Command identifier within the class.
    pub command_id: u8,
}

impl CommandCode {
    /// Create a command code.
    pub const fn new(class_id: u8, command_id: u8) -> Self {
        CommandCode {
            class_id,
            command_id,
        }
    }
}

impl std::fmt::Display for CommandCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02X}:0x{:02X}", self.class_id, self.command_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equality_over_both_fields() {
        assert_eq!(CommandCode::new(0x25, 0x03), CommandCode::new(0x25, 0x03));
        assert_ne!(CommandCode::new(0x25, 0x03), CommandCode::new(0x25, 0x02));
        assert_ne!(CommandCode::new(0x25, 0x03), CommandCode::new(0x26, 0x03));
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(CommandCode::new(0x25, 0x03), "report");
        assert_eq!(map.get(&CommandCode::new(0x25, 0x03)), Some(&"report"));
        assert_eq!(map.get(&CommandCode::new(0x25, 0x01)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandCode::new(0x25, 0x03).to_string(), "0x25:0x03");
    }
}
