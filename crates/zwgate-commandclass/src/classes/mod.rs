//! Command class implementations.
//!
//! One module per command class; each exports its command enum, report type
//! and processor. The full device protocol defines dozens of classes; they
//! all follow the shape SwitchBinary demonstrates.

mod switch_binary;

pub use switch_binary::*;
