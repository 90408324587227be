//! Terminal module orchestrator.
//!
//! The [`Device`] trait is the raw transport collaborator; [`AnsiTerminal`]
//! is the formatter binding a device to a resolved theme. Widgets only see
//! the object-safe [`Terminal`] trait.

mod core;
mod device;

pub use core::{AnsiTerminal, Terminal};
pub use device::{BufferDevice, DEFAULT_DEPTH, DEFAULT_HEIGHT, DEFAULT_WIDTH, Device, StdoutDevice};
