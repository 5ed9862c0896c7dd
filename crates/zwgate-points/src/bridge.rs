//! The bridge between protocol code and point storage.
//!
//! Command-class processors never touch point storage directly. They declare
//! the points they own during device configuration and push decoded values
//! through [`PointBridge`]; the gateway's storage layer implements the trait.
//! [`MemoryBridge`] is a self-contained implementation for tests and
//! embedding without a real tag database.

use std::collections::HashMap;

use crate::{PointError, PointPath, PointType, PointValue};

/// Schema declaration for one point: address, declared type, readability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDeclaration {
    /// Full path of the point.
    pub path: PointPath,
    /// Declared value type, checked on writes.
    pub point_type: PointType,
    /// Whether the point is readable by external clients.
    pub readable: bool,
}

impl PointDeclaration {
    /// Create a declaration.
    pub fn new(path: PointPath, point_type: PointType, readable: bool) -> Self {
        PointDeclaration {
            path,
            point_type,
            readable,
        }
    }
}

/// Narrow interface through which decoded protocol values reach point storage.
///
/// `declare_point` registers schema and fails fast on duplicates; it runs at
/// device-configuration time, before any traffic. `update_point` is
/// fire-and-forget from the caller's perspective: delivery and persistence
/// are the storage layer's concern, and a failed update must not fail frame
/// processing.
pub trait PointBridge {
    /// Register one point's schema.
    fn declare_point(&mut self, declaration: PointDeclaration) -> Result<(), PointError>;

    /// Push a decoded value to a point.
    fn update_point(&mut self, path: &PointPath, value: PointValue);
}

/// In-memory [`PointBridge`] holding declarations and latest values.
#[derive(Debug, Default)]
pub struct MemoryBridge {
    declarations: HashMap<PointPath, PointDeclaration>,
    values: HashMap<PointPath, PointValue>,
}

impl MemoryBridge {
    /// Create an empty bridge.
    pub fn new() -> Self {
        Self::default()
    }

    /// The declaration registered for a path, if any.
    pub fn declaration(&self, path: &PointPath) -> Option<&PointDeclaration> {
        self.declarations.get(path)
    }

    /// The latest value pushed to a path, if any.
    pub fn value(&self, path: &PointPath) -> Option<&PointValue> {
        self.values.get(path)
    }

    /// Number of declared points.
    pub fn declared_count(&self) -> usize {
        self.declarations.len()
    }
}

impl PointBridge for MemoryBridge {
    fn declare_point(&mut self, declaration: PointDeclaration) -> Result<(), PointError> {
        if self.declarations.contains_key(&declaration.path) {
            return Err(PointError::DuplicateDeclaration(declaration.path));
        }
        self.declarations
            .insert(declaration.path.clone(), declaration);
        Ok(())
    }

    fn update_point(&mut self, path: &PointPath, value: PointValue) {
        if !self.declarations.contains_key(path) {
            log::warn!("update to undeclared point {}: {}", path, value);
        }
        self.values.insert(path.clone(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_path() -> PointPath {
        PointPath::new(["Node12", "SwitchBinary", "On"])
    }

    #[test]
    fn test_declare_and_update() {
        let mut bridge = MemoryBridge::new();
        bridge
            .declare_point(PointDeclaration::new(on_path(), PointType::Bool, true))
            .unwrap();

        bridge.update_point(&on_path(), PointValue::Bool(true));
        assert_eq!(bridge.value(&on_path()), Some(&PointValue::Bool(true)));
    }

    #[test]
    fn test_duplicate_declaration_rejected() {
        let mut bridge = MemoryBridge::new();
        let decl = PointDeclaration::new(on_path(), PointType::Bool, true);
        bridge.declare_point(decl.clone()).unwrap();

        let err = bridge.declare_point(decl).unwrap_err();
        assert_eq!(err, PointError::DuplicateDeclaration(on_path()));
    }

    #[test]
    fn test_update_overwrites_latest() {
        let mut bridge = MemoryBridge::new();
        bridge
            .declare_point(PointDeclaration::new(on_path(), PointType::Bool, true))
            .unwrap();

        bridge.update_point(&on_path(), PointValue::Bool(true));
        bridge.update_point(&on_path(), PointValue::Bool(false));
        assert_eq!(bridge.value(&on_path()), Some(&PointValue::Bool(false)));
    }
}
