//! Point model error types.

use thiserror::Error;

use crate::PointPath;

/// Errors that can occur when registering point schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    /// The same point was declared twice.
    #[error("point already declared: {0}")]
    DuplicateDeclaration(PointPath),
}
