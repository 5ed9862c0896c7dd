//! Per-command-class processor contract.

use zwgate_points::{PointBridge, PointError, PointPath, PointValue};

use crate::{
    CommandClassVersion, CommandCode, DecodeError, OutboundCommand, Report, WriteError,
};

/// Classification context the dispatch layer attaches to an inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandArgument {
    /// Source node of the frame.
    pub node_id: u8,
    /// Endpoint within the node, for multi-endpoint devices.
    pub endpoint: Option<u8>,
}

impl CommandArgument {
    /// Context for a frame from a node's root endpoint.
    pub fn new(node_id: u8) -> Self {
        CommandArgument {
            node_id,
            endpoint: None,
        }
    }

    /// Context for a frame from a specific endpoint.
    pub fn endpoint(node_id: u8, endpoint: u8) -> Self {
        CommandArgument {
            node_id,
            endpoint: Some(endpoint),
        }
    }
}

/// The handler bundle one command class plugs into the framework.
///
/// Processors are stateless singletons built at startup and shared across
/// frame-processing tasks; all device-specific context (path, negotiated
/// version, secure flag) arrives per call. Outbound traffic is returned as
/// [`OutboundCommand`] values rather than sent through a side channel, so
/// every method stays a pure request/response shaping step.
pub trait CommandClassProcessor: Send + Sync {
    /// The codes this processor owns. Registered at startup; claiming a code
    /// another processor owns is a fatal configuration error.
    fn supported_codes(&self) -> &'static [CommandCode];

    /// Decode one classified inbound payload into a report.
    ///
    /// The payload arrives with the code header already stripped. Must not
    /// dispatch to other processors.
    fn decode(
        &self,
        code: CommandCode,
        argument: &CommandArgument,
        payload: &[u8],
    ) -> Result<Box<dyn Report>, DecodeError>;

    /// Declare the points this class exposes under a device's path.
    ///
    /// Pure schema registration through the bridge; no other side effect.
    fn describe_points(
        &self,
        path: &PointPath,
        version: CommandClassVersion,
        bridge: &mut dyn PointBridge,
    ) -> Result<(), PointError>;

    /// Commands to transmit when a device is first seen or re-synced.
    ///
    /// `first_contact` distinguishes initial inclusion from a later re-sync.
    /// Order is preserved by the transport; retry is the transport's concern.
    fn initial_requests(
        &self,
        path: &PointPath,
        version: CommandClassVersion,
        secure: bool,
        first_contact: bool,
    ) -> Vec<OutboundCommand>;

    /// Handle an external write against one named point under the path.
    ///
    /// Selects the outbound command variant from the targeted point name and
    /// the value's shape. A value of the wrong shape fails the write; it is
    /// never coerced.
    fn write(
        &self,
        path: &PointPath,
        version: CommandClassVersion,
        secure: bool,
        value: &PointValue,
    ) -> Result<OutboundCommand, WriteError>;
}

/// Helper mirrored by processors that route writes by point name: the point
/// name is the path segment below the class folder, i.e. the leaf.
pub(crate) fn target_point_name(path: &PointPath) -> &str {
    path.leaf().unwrap_or("")
}
