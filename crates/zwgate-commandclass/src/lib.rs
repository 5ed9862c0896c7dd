//! Command-class codec framework for the zwgate driver.
//!
//! Z-Wave-style device traffic is organized into *command classes*: feature
//! domains (binary switching, metering, ...) whose messages are identified by
//! a `(class, command)` code pair and carried as small byte frames:
//!
//! ```text
//! +----------+------------+-------------------+
//! | class id | command id | payload bytes ... |
//! +----------+------------+-------------------+
//! ```
//!
//! This crate provides the framework each command class plugs into:
//!
//! - [`CommandCode`] - the `(class, command)` identity used as dispatch key
//! - [`Command`] / [`Report`] - versioned encode and decode contracts
//! - [`CommandClassProcessor`] - the per-class handler bundle
//! - [`CommandClassRegistry`] - code-to-processor dispatch, built once at
//!   startup and read-only afterwards
//! - [`Frame`] / [`FrameBuffer`] - wire frame splitting and stream reassembly
//!
//! One worked class ships in [`classes`]: SwitchBinary (class `0x25`).
//! Decoded reports reach the outside world through the `PointBridge` trait in
//! `zwgate-points`; outbound commands are returned to the caller as
//! [`OutboundCommand`] values for the transport to serialize.
//!
//! # Example
//!
//! ```rust,ignore
//! use zwgate_commandclass::{CommandClassRegistry, CommandArgument};
//! use zwgate_commandclass::classes::SwitchBinaryProcessor;
//!
//! let mut registry = CommandClassRegistry::new();
//! registry.register(Arc::new(SwitchBinaryProcessor))?;
//!
//! // Inbound: raw frame -> decoded report -> point updates
//! let report = registry.dispatch(&[0x25, 0x03, 0xFF], &CommandArgument::new(12))?;
//! report.update(&path, version, false, &mut bridge);
//! ```

mod code;
mod command;
mod constants;
mod error;
mod frame;
mod processor;
mod registry;
mod report;
mod version;

pub mod classes;

pub use code::*;
pub use command::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use processor::*;
pub use registry::*;
pub use report::*;
pub use version::*;
