use crate::error::{RenderError, Result};
use crate::terminal::Terminal;

use super::Widget;

/// Titled grouping of child widgets.
///
/// Draws a dashed header line with the optional `[title]` right-aligned,
/// then its children in insertion order. Five percent of the width is
/// reserved as a right margin so the header fill and any trailing reset
/// sequence never touch the terminal's last column.
pub struct Section {
    title: Option<String>,
    components: Vec<Box<dyn Widget>>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            components: Vec::new(),
        }
    }

    pub fn untitled() -> Self {
        Self {
            title: None,
            components: Vec::new(),
        }
    }

    /// Add a child widget drawn after the header.
    pub fn add_component(&mut self, component: impl Widget + 'static) {
        self.components.push(Box::new(component));
    }

    fn draw_header(&self, terminal: &mut dyn Terminal, width: usize) -> Result<()> {
        let title = match &self.title {
            Some(name) => format!("[{name}]"),
            None => String::new(),
        };

        let title_width = terminal.len(&title)?;
        if title_width > width {
            // Truncating would mean going back to redraw a shorter title,
            // which forward-only output cannot do. Hard precondition.
            return Err(RenderError::TitleTooWide { title, width });
        }

        let dashes = "-".repeat(width - title_width);
        terminal.write(&format!("%(face-header)s{dashes}{title}\n"))?;
        Ok(())
    }
}

impl Widget for Section {
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) -> Result<()> {
        let width = width - width / 20;
        self.draw_header(terminal, width)?;

        for component in &self.components {
            component.draw(terminal, width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::ColorDepth;
    use crate::terminal::{AnsiTerminal, BufferDevice};
    use crate::themes::solarized;
    use std::cell::Cell as StdCell;
    use std::rc::Rc;

    fn terminal() -> AnsiTerminal<BufferDevice> {
        let device = BufferDevice::new(80, 25, ColorDepth::Ansi256);
        AnsiTerminal::new(device, &solarized()).unwrap()
    }

    struct WidthProbe {
        seen: Rc<StdCell<usize>>,
    }

    impl Widget for WidthProbe {
        fn draw(&self, _terminal: &mut dyn Terminal, width: usize) -> Result<()> {
            self.seen.set(width);
            Ok(())
        }
    }

    #[test]
    fn header_fills_reserved_width_with_right_aligned_title() {
        let mut term = terminal();
        Section::new("test section").draw(&mut term, 80).unwrap();

        let visible = term.device().visible();
        let header = visible.lines().next().unwrap();
        assert_eq!(header.chars().count(), 76);
        assert!(header.ends_with("[test section]"));
        assert!(header.starts_with("----"));
    }

    #[test]
    fn untitled_header_is_all_dashes() {
        let mut term = terminal();
        Section::untitled().draw(&mut term, 40).unwrap();

        let visible = term.device().visible();
        assert_eq!(visible.lines().next().unwrap(), "-".repeat(38));
    }

    #[test]
    fn title_wider_than_width_is_an_error() {
        let mut term = terminal();
        let err = Section::new("test section").draw(&mut term, 1).unwrap_err();
        assert!(matches!(err, RenderError::TitleTooWide { width: 1, .. }));
    }

    #[test]
    fn children_draw_at_reserved_width_in_order() {
        let mut term = terminal();
        let mut section = Section::new("s");
        let seen = Rc::new(StdCell::new(0));
        section.add_component(WidthProbe { seen: seen.clone() });
        section.draw(&mut term, 100).unwrap();

        // Children see the same 5% reserved width as the header.
        assert_eq!(seen.get(), 95);
        let visible = term.device().visible();
        assert_eq!(visible.lines().next().unwrap().chars().count(), 95);
    }

    #[test]
    fn header_style_resets_before_newline() {
        let mut term = terminal();
        Section::new("x").draw(&mut term, 40).unwrap();
        let output = term.device().output();
        assert!(output.contains("[x]\x1b[0m\n"));
    }
}
