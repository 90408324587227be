//! Placeholder template orchestrator.
//!
//! Templates embed `%(name)s` tokens that resolve against a binding table.
//! The pass is deliberately small: tokenize into literal and placeholder
//! runs, resolve, concatenate. No other formatting mini-language applies.

mod core;

pub use core::{Bindings, Segment, expand, tokenize};
