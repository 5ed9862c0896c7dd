//! Addressable point model for the zwgate driver.
//!
//! Every device feature the driver exposes (a switch state, a sensor reading,
//! a configuration byte) lives at an addressable *point* identified by a
//! hierarchical [`PointPath`]. Command-class code declares the points it owns
//! and pushes decoded values to them through the narrow [`PointBridge`]
//! interface; the storage behind the bridge (tag database, persistence,
//! quality flags) belongs to the enclosing gateway and is not part of this
//! crate.

mod bridge;
mod error;
mod path;
mod value;

pub use bridge::*;
pub use error::*;
pub use path::*;
pub use value::*;
