//! Decoded inbound report contract.

use zwgate_points::{PointBridge, PointPath};

use crate::CommandClassVersion;

/// A decoded inbound frame.
///
/// Reports are immutable values: decoding either fully succeeds or fails,
/// never yielding a partially-populated report. A report knows how to push
/// its fields (and any derived values) to the points its command class
/// declared under the device's path.
pub trait Report: std::fmt::Debug + Send + Sync {
    /// Push decoded values through the bridge to their named points.
    fn update(
        &self,
        path: &PointPath,
        version: CommandClassVersion,
        secure: bool,
        bridge: &mut dyn PointBridge,
    );
}
