use std::io::{self, Write};

use crate::face::ColorDepth;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 25;
pub const DEFAULT_DEPTH: ColorDepth = ColorDepth::Ansi8;

/// Raw output device collaborator.
///
/// The engine only ever appends bytes; it never reads from the device and
/// never repositions its cursor. A device is exclusively owned by one
/// terminal formatter for the duration of a render pass.
pub trait Device {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
    /// Visible width in characters.
    fn width(&self) -> usize;
    /// Visible height in rows.
    fn height(&self) -> usize;
    fn color_depth(&self) -> ColorDepth;
}

/// Process stdout as an output device.
///
/// Size is queried from the terminal on demand and falls back to 80x25 when
/// stdout is not a tty. Color depth is sniffed from the environment once at
/// construction and can be overridden.
#[derive(Debug)]
pub struct StdoutDevice {
    depth: ColorDepth,
}

impl StdoutDevice {
    pub fn new() -> Self {
        Self {
            depth: detect_color_depth(),
        }
    }

    pub fn with_color_depth(mut self, depth: ColorDepth) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for StdoutDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for StdoutDevice {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()
    }

    fn width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH)
    }

    fn height(&self) -> usize {
        crossterm::terminal::size()
            .map(|(_, rows)| rows as usize)
            .unwrap_or(DEFAULT_HEIGHT)
    }

    fn color_depth(&self) -> ColorDepth {
        self.depth
    }
}

fn detect_color_depth() -> ColorDepth {
    if let Ok(colorterm) = std::env::var("COLORTERM") {
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            return ColorDepth::Ansi256;
        }
    }
    match std::env::var("TERM") {
        Ok(term) if term.contains("256color") => ColorDepth::Ansi256,
        Ok(term) if term.contains("16color") => ColorDepth::Ansi16,
        _ => DEFAULT_DEPTH,
    }
}

/// In-memory capture device with a fixed geometry.
///
/// Stands in for a real terminal in tests and benches so rendered output can
/// be inspected as a string.
#[derive(Debug, Clone)]
pub struct BufferDevice {
    buffer: Vec<u8>,
    width: usize,
    height: usize,
    depth: ColorDepth,
}

impl BufferDevice {
    pub fn new(width: usize, height: usize, depth: ColorDepth) -> Self {
        Self {
            buffer: Vec::new(),
            width,
            height,
            depth,
        }
    }

    /// Everything written so far, escapes included.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }

    /// Everything written so far with escape sequences stripped.
    pub fn visible(&self) -> String {
        let stripped = strip_ansi_escapes::strip(&self.buffer);
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

impl Device for BufferDevice {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn color_depth(&self) -> ColorDepth {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_device_captures_writes() {
        let mut device = BufferDevice::new(40, 10, ColorDepth::Ansi256);
        device.write(b"\x1b[0mhello").unwrap();
        assert_eq!(device.output(), "\x1b[0mhello");
        assert_eq!(device.visible(), "hello");
        assert_eq!(device.width(), 40);
        assert_eq!(device.height(), 10);
    }
}
