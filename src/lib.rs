//! Forward-only terminal layout and formatting engine.
//!
//! Output is emitted strictly left-to-right, top-to-bottom with no cursor
//! repositioning, so rendered widgets can share a stream with unrelated host
//! output, a pipe, or a log file. Styling goes through symbolic faces: a
//! [`ThemePalette`] maps faces to per-color-depth styles, a [`Theme`]
//! resolves them into concrete SGR sequences at one depth, and widgets embed
//! `%(face-name)s` placeholders that the terminal expands on write.

pub mod error;
pub mod face;
pub mod logging;
pub mod metrics;
pub mod template;
pub mod terminal;
pub mod theme;
pub mod themes;
pub mod widgets;
pub mod width;

pub use error::{RenderError, Result};
pub use face::{ColorDepth, Face, Typeface};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use template::Bindings;
pub use terminal::{AnsiTerminal, BufferDevice, Device, StdoutDevice, Terminal};
pub use theme::{FaceStyle, Theme, ThemePalette};
pub use themes::{solarized, zenburn};
pub use widgets::{Cell, Row, Section, Table, Widget};
pub use width::display_width;
