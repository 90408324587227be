//! Layout widgets drawn through the forward-only terminal contract.
//!
//! Widgets consume nothing but [`Terminal::write`] and [`Terminal::len`];
//! they compute sizes up front and emit text strictly left-to-right,
//! top-to-bottom, so they can share a stream with unrelated host output.

mod section;
mod table;

pub use section::Section;
pub use table::{Cell, Row, Table};

use crate::error::Result;
use crate::terminal::Terminal;

/// A drawable component.
pub trait Widget {
    /// Draw the widget constrained to `width` columns.
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) -> Result<()>;
}
