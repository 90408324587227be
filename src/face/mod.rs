//! Face model orchestrator.
//!
//! Faces are symbolic style identifiers combined with typeface modifiers;
//! both are closed enumerations so themes can be validated up front.

mod core;

pub use core::{ColorDepth, Face, Typeface};
