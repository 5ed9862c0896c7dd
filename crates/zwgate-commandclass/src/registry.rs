//! Code-to-processor dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    split_frame, CommandArgument, CommandClassProcessor, CommandCode, DispatchError, RegistryError,
    Report,
};

/// Maps each registered [`CommandCode`] to its owning processor.
///
/// Built once at gateway startup and read-only afterwards, so it can be
/// shared across concurrent frame-processing tasks without locking.
/// Registration fails fast: a duplicate code is a configuration error and
/// must never survive to message time.
#[derive(Default)]
pub struct CommandClassRegistry {
    handlers: HashMap<CommandCode, Arc<dyn CommandClassProcessor>>,
}

impl CommandClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a processor under all of its supported codes.
    pub fn register(
        &mut self,
        processor: Arc<dyn CommandClassProcessor>,
    ) -> Result<(), RegistryError> {
        for &code in processor.supported_codes() {
            if self.handlers.contains_key(&code) {
                return Err(RegistryError::DuplicateCode(code));
            }
            log::debug!("registered command code {}", code);
            self.handlers.insert(code, Arc::clone(&processor));
        }
        Ok(())
    }

    /// Resolve the processor owning a code.
    pub fn resolve(&self, code: CommandCode) -> Option<&Arc<dyn CommandClassProcessor>> {
        self.handlers.get(&code)
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no codes are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Classify and decode one raw inbound frame.
    ///
    /// Splits the code header, resolves the owning processor and hands it the
    /// payload. Failures are per-frame: an error here never affects the
    /// registry or later frames.
    pub fn dispatch(
        &self,
        frame: &[u8],
        argument: &CommandArgument,
    ) -> Result<Box<dyn Report>, DispatchError> {
        let (code, payload) = split_frame(frame)?;
        let processor = self
            .resolve(code)
            .ok_or(DispatchError::UnknownCode(code))?;

        match processor.decode(code, argument, payload) {
            Ok(report) => Ok(report),
            Err(err) => {
                log::warn!("decode failed for {} from node {}: {}", code, argument.node_id, err);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::SwitchBinaryProcessor;
    use crate::{DecodeError, CLASS_SWITCH_BINARY, SWITCH_BINARY_REPORT};

    fn registry() -> CommandClassRegistry {
        let mut registry = CommandClassRegistry::new();
        registry
            .register(Arc::new(SwitchBinaryProcessor))
            .unwrap();
        registry
    }

    #[test]
    fn test_resolves_each_registered_code() {
        let registry = registry();
        for &code in SwitchBinaryProcessor.supported_codes() {
            assert!(registry.resolve(code).is_some());
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unregistered_code_not_found() {
        let registry = registry();
        assert!(registry.resolve(CommandCode::new(0x26, 0x03)).is_none());

        let err = registry
            .dispatch(&[0x26, 0x03, 0x00], &CommandArgument::new(1))
            .unwrap_err();
        assert_eq!(err, DispatchError::UnknownCode(CommandCode::new(0x26, 0x03)));
    }

    #[test]
    fn test_duplicate_registration_fails_at_startup() {
        let mut registry = registry();
        let err = registry
            .register(Arc::new(SwitchBinaryProcessor))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCode(CommandCode::new(
                CLASS_SWITCH_BINARY,
                0x01
            ))
        );
    }

    #[test]
    fn test_dispatch_decodes_report() {
        let registry = registry();
        let report = registry
            .dispatch(
                &[CLASS_SWITCH_BINARY, SWITCH_BINARY_REPORT, 0xFF],
                &CommandArgument::new(12),
            )
            .unwrap();
        assert!(format!("{:?}", report).contains("SwitchBinaryReport"));
    }

    #[test]
    fn test_dispatch_isolates_frame_failures() {
        let registry = registry();
        let bad = registry.dispatch(
            &[CLASS_SWITCH_BINARY, SWITCH_BINARY_REPORT],
            &CommandArgument::new(12),
        );
        assert_eq!(
            bad.unwrap_err(),
            DispatchError::Decode(DecodeError::PayloadTooShort {
                expected: 1,
                actual: 0
            })
        );

        // The registry is untouched; the next frame decodes normally.
        assert!(registry
            .dispatch(
                &[CLASS_SWITCH_BINARY, SWITCH_BINARY_REPORT, 0x00],
                &CommandArgument::new(12),
            )
            .is_ok());
    }
}
