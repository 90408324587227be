use crate::error::Result;
use crate::face::ColorDepth;
use crate::logging::{LogLevel, Logger};
use crate::metrics::RenderMetrics;
use crate::template::Bindings;
use crate::theme::{Theme, ThemePalette};
use crate::width::display_width;

use super::device::Device;

/// Formatting surface consumed by the layout widgets.
///
/// Widgets rely on exactly two contracts: `write` expands placeholders and
/// appends the result, `len` reports the visible cells a template would
/// occupy. Everything else is passthrough to the underlying device.
pub trait Terminal {
    fn write(&mut self, text: &str) -> Result<()>;
    /// Like [`Terminal::write`] with caller-supplied extra bindings layered
    /// over the theme's face table.
    fn write_with(&mut self, text: &str, extra: &Bindings) -> Result<()>;
    fn len(&self, text: &str) -> Result<usize>;
    fn len_with(&self, text: &str, extra: &Bindings) -> Result<usize>;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn depth(&self) -> ColorDepth;
    /// Emit the `normal` property, turning all attributes off.
    fn reset(&mut self) -> Result<()>;
    /// Emit the `clear-screen` control.
    fn clear(&mut self) -> Result<()>;
}

/// Binds a theme to one raw device, resolved at the device's color depth.
///
/// Construction eagerly renders every face the palette declares into an SGR
/// fragment, so writes are pure lookups. The terminal holds the device
/// exclusively; concurrent renders against one device must be serialized by
/// the caller.
pub struct AnsiTerminal<D: Device> {
    device: D,
    theme: Theme,
    metrics: RenderMetrics,
    logger: Option<Logger>,
}

impl<D: Device> AnsiTerminal<D> {
    pub fn new(device: D, palette: &ThemePalette) -> Result<Self> {
        let theme = Theme::resolve(palette, device.color_depth())?;
        Ok(Self {
            device,
            theme,
            metrics: RenderMetrics::new(),
            logger: None,
        })
    }

    /// Attach a logger receiving render lifecycle diagnostics.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    /// Log accumulated counters through the attached logger, if any.
    pub fn log_metrics(&self) {
        if let Some(logger) = &self.logger {
            logger
                .log_event(self.metrics.snapshot().to_log_event("flowterm.terminal"))
                .ok();
        }
    }

    fn send(&mut self, formatted: &str) -> Result<()> {
        self.device.write(formatted.as_bytes())?;
        self.metrics
            .record_write(formatted.len(), display_width(formatted));
        Ok(())
    }

    fn trace(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.log(LogLevel::Debug, "flowterm.terminal", message).ok();
        }
    }
}

impl<D: Device> Terminal for AnsiTerminal<D> {
    fn write(&mut self, text: &str) -> Result<()> {
        let formatted = self.theme.write(text, None)?;
        self.send(&formatted)
    }

    fn write_with(&mut self, text: &str, extra: &Bindings) -> Result<()> {
        let formatted = self.theme.write(text, Some(extra))?;
        self.send(&formatted)
    }

    fn len(&self, text: &str) -> Result<usize> {
        self.theme.len(text, None)
    }

    fn len_with(&self, text: &str, extra: &Bindings) -> Result<usize> {
        self.theme.len(text, Some(extra))
    }

    fn width(&self) -> usize {
        self.device.width()
    }

    fn height(&self) -> usize {
        self.device.height()
    }

    fn depth(&self) -> ColorDepth {
        self.theme.depth()
    }

    fn reset(&mut self) -> Result<()> {
        let sequence = self.theme.property("normal")?.to_string();
        self.send(&sequence)?;
        self.metrics.record_reset();
        self.trace("reset");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let sequence = self.theme.control("clear-screen")?.to_string();
        self.send(&sequence)?;
        self.trace("clear-screen");
        Ok(())
    }
}
