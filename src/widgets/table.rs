use crate::error::{RenderError, Result};
use crate::template::{Segment, tokenize};
use crate::terminal::Terminal;
use crate::width::{display_width, wrap, wrap_columns};

use super::Widget;

/// A table cell.
///
/// Non-empty content is padded with one space on each side at construction;
/// empty content stays empty so it occupies no columns. Content is fixed for
/// the cell's lifetime: `draw` returns wrapped-out remainder as a new string
/// instead of mutating the cell.
#[derive(Debug, Clone)]
pub struct Cell {
    contents: String,
}

impl Cell {
    pub fn new(contents: impl Into<String>) -> Self {
        let contents = contents.into();
        Self {
            contents: if contents.is_empty() {
                contents
            } else {
                format!(" {contents} ")
            },
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Visible width of the cell contents, padding included.
    pub fn width(&self, terminal: &dyn Terminal) -> Result<usize> {
        terminal.len(&self.contents)
    }

    /// Draw the first line of the cell at exactly `width` columns and return
    /// the leftover content for continuation rows.
    ///
    /// Content is split into literal and placeholder runs. Placeholders are
    /// zero-width for layout purposes and are never broken; the most recent
    /// one is re-emitted at the head of every wrapped line so a styled run
    /// keeps its color across the wrap boundary. The emitted line is padded
    /// with spaces to `width`, keeping column alignment without any cursor
    /// movement.
    pub fn draw(&self, terminal: &mut dyn Terminal, width: usize) -> Result<String> {
        if width == 0 {
            return Err(RenderError::WidthTooNarrow {
                needed: 1,
                available: 0,
            });
        }

        let mut closed: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut used = 0usize;
        let mut last_style = String::new();

        for segment in tokenize(&self.contents) {
            match &segment {
                Segment::Placeholder(_) => {
                    let token = segment.to_template();
                    current.push_str(&token);
                    last_style = token;
                }
                Segment::Literal(text) => {
                    // Everything pushed here goes back through template
                    // expansion on write, so literal runs are re-escaped
                    // with `to_template`; width math uses the collapsed
                    // text.
                    let text_width = display_width(text);
                    if text_width <= width - used {
                        current.push_str(&segment.to_template());
                        used += text_width;
                    } else if text_width < width {
                        closed.push(std::mem::take(&mut current));
                        current = format!("{last_style}{}", segment.to_template());
                        used = text_width;
                    } else {
                        // Run wider than a whole line: fill what is left of
                        // the current line at word granularity, then
                        // hard-wrap the remainder at the cell width.
                        let remaining = width - used;
                        let mut wrapped = if remaining > 0 {
                            wrap_columns(text, remaining, width).into_iter()
                        } else {
                            wrap(text, width).into_iter()
                        };
                        if remaining > 0 {
                            if let Some(first) = wrapped.next() {
                                used += display_width(&first);
                                current.push_str(&Segment::Literal(first).to_template());
                            }
                        }
                        for line in wrapped {
                            used = display_width(&line);
                            closed.push(std::mem::take(&mut current));
                            current =
                                format!("{last_style}{}", Segment::Literal(line).to_template());
                        }
                    }
                }
            }
        }

        closed.push(current);
        let mut lines = closed.into_iter();
        let first = lines.next().unwrap_or_default();

        let line_width = terminal.len(&first)?;
        let padding = " ".repeat(width.saturating_sub(line_width));
        terminal.write(&format!("{first}{padding}"))?;

        Ok(lines.collect::<Vec<_>>().join(" "))
    }
}

/// An ordered sequence of cells laid out against shared column widths.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total visible width of the row's cells.
    pub fn width(&self, terminal: &dyn Terminal) -> Result<usize> {
        let mut width = 0;
        for cell in &self.cells {
            width += cell.width(terminal)?;
        }
        Ok(width)
    }

    /// Draw each cell at its assigned column width.
    ///
    /// Returns a continuation row holding the wrapped remainders when any
    /// cell overflowed, with empty cells standing in for finished columns so
    /// alignment is preserved. Callers redraw the continuation against the
    /// same widths until `None` comes back.
    pub fn draw(&self, terminal: &mut dyn Terminal, widths: &[usize]) -> Result<Option<Row>> {
        if widths.len() != self.cells.len() {
            return Err(RenderError::ColumnCountMismatch {
                cells: self.cells.len(),
                widths: widths.len(),
            });
        }

        let mut leftovers = Vec::with_capacity(self.cells.len());
        let mut any_leftover = false;
        for (cell, width) in self.cells.iter().zip(widths) {
            let rest = cell.draw(terminal, *width)?;
            any_leftover |= !rest.is_empty();
            leftovers.push(rest);
        }

        if !any_leftover {
            return Ok(None);
        }

        let mut continuation = Row::new();
        for rest in leftovers {
            continuation.add_cell(Cell::new(rest));
        }

        // A draw that consumed no word characters leaves the continuation at
        // the same visible width and would redraw forever. The columns are
        // too narrow to ever make progress.
        let current_width = self.width(terminal)?;
        let continuation_width = continuation.width(terminal)?;
        if continuation_width >= current_width {
            return Err(RenderError::WidthTooNarrow {
                needed: current_width,
                available: widths.iter().sum(),
            });
        }

        Ok(Some(continuation))
    }
}

/// Column-aware grid widget.
///
/// Cells stored in rows share negotiated column widths so columns line up
/// vertically; rows too wide for the target width wrap onto continuation
/// lines aligned within each column. Cells added outside any row are
/// normalized to one uniform width and flowed into as many columns as fit.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
    cells: Vec<Cell>,
    cols_per_row: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: Row) {
        self.cols_per_row = self.cols_per_row.max(row.cells().len());
        self.rows.push(row);
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Negotiate column widths for grid mode.
    ///
    /// Natural widths are used untouched when they fit. Otherwise columns
    /// are compressed in three passes: an equal-share pass finalizing small
    /// columns at their natural width, a statistical pass bounding the rest
    /// by `min(max(mean, median), cap)`, and an iterative pass that settles
    /// the narrowest remaining column at the current cap so a single wide
    /// column cannot starve every other one.
    pub fn column_widths(&self, terminal: &dyn Terminal, width: usize) -> Result<Vec<usize>> {
        let mut naturals = vec![0usize; self.cols_per_row];
        for row in &self.rows {
            for (index, cell) in row.cells().iter().enumerate() {
                naturals[index] = naturals[index].max(cell.width(terminal)?);
            }
        }

        let total: usize = naturals.iter().sum();
        if total <= width {
            return Ok(naturals);
        }

        let cols = naturals.len();
        let mut adjusted: Vec<Option<usize>> = vec![None; cols];

        // Equal-share pass: a column already fitting an even split keeps its
        // natural width; the slack accrues to the wide columns later on.
        let share = width / cols;
        for (slot, natural) in adjusted.iter_mut().zip(&naturals) {
            if *natural <= share {
                *slot = Some(*natural);
            }
        }

        // Statistical-cap pass.
        let unfinalized = adjusted.iter().filter(|slot| slot.is_none()).count();
        if unfinalized > 0 {
            let spent: usize = adjusted.iter().flatten().sum();
            let cap = width.saturating_sub(spent) / unfinalized;
            let means = self.column_means(terminal)?;
            let medians = self.column_medians(terminal)?;
            for index in 0..cols {
                if adjusted[index].is_some() {
                    continue;
                }
                let bound = means[index].max(medians[index]).min(cap);
                if naturals[index] <= bound {
                    adjusted[index] = Some(naturals[index]);
                }
            }
        }

        // Starvation pass: settle the narrowest remaining column first.
        loop {
            let remaining: Vec<usize> = (0..cols).filter(|&i| adjusted[i].is_none()).collect();
            if remaining.is_empty() {
                break;
            }
            let spent: usize = adjusted.iter().flatten().sum();
            let cap = width.saturating_sub(spent) / remaining.len();
            let Some(index) = remaining.into_iter().min_by_key(|&i| naturals[i]) else {
                break;
            };
            adjusted[index] = Some(cap);
        }

        Ok(adjusted.into_iter().flatten().collect())
    }

    /// Per-column cell widths over every row, absent cells counting as zero.
    fn column_matrix(&self, terminal: &dyn Terminal) -> Result<Vec<Vec<usize>>> {
        let mut matrix = vec![vec![0usize; self.rows.len()]; self.cols_per_row];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.cells().iter().enumerate() {
                matrix[c][r] = cell.width(terminal)?;
            }
        }
        Ok(matrix)
    }

    fn column_means(&self, terminal: &dyn Terminal) -> Result<Vec<usize>> {
        Ok(self
            .column_matrix(terminal)?
            .iter()
            .map(|col| col.iter().sum::<usize>() / col.len().max(1))
            .collect())
    }

    fn column_medians(&self, terminal: &dyn Terminal) -> Result<Vec<usize>> {
        Ok(self
            .column_matrix(terminal)?
            .into_iter()
            .map(|mut col| {
                col.sort_unstable();
                match col.len() {
                    0 => 0,
                    len if len % 2 == 0 => (col[len / 2 - 1] + col[len / 2]) / 2,
                    len => col[len / 2],
                }
            })
            .collect())
    }

    fn draw_rows(&self, terminal: &mut dyn Terminal, width: usize) -> Result<()> {
        let widths = self.column_widths(terminal, width)?;
        let row_width: usize = widths.iter().sum();
        let line_end = format!("{}\n", " ".repeat(width.saturating_sub(row_width)));

        for row in &self.rows {
            let mut leftover = row.draw(terminal, &widths)?;
            terminal.write(&line_end)?;
            while let Some(continuation) = leftover {
                leftover = continuation.draw(terminal, &widths)?;
                terminal.write(&line_end)?;
            }
        }
        Ok(())
    }

    fn max_cell_width(&self, terminal: &dyn Terminal) -> Result<usize> {
        let mut max_width = 0;
        for cell in &self.cells {
            max_width = max_width.max(cell.width(terminal)?);
        }
        Ok(max_width)
    }

    fn draw_cells(&self, terminal: &mut dyn Terminal, width: usize) -> Result<()> {
        let cell_width = self.max_cell_width(terminal)?;
        if cell_width == 0 {
            return Ok(());
        }

        let cells_per_row = width / cell_width;
        if cells_per_row == 0 {
            return Err(RenderError::WidthTooNarrow {
                needed: cell_width,
                available: width,
            });
        }

        let block = cell_width * cells_per_row;
        let pad_begin = (width - block) / 2;
        let pad_end = width - block - pad_begin;

        terminal.write(&" ".repeat(pad_begin))?;
        let mut offset = 0;
        for cell in &self.cells {
            if offset >= cells_per_row {
                offset = 0;
                terminal.write(&format!(
                    "{}\n{}",
                    " ".repeat(pad_end),
                    " ".repeat(pad_begin)
                ))?;
            }
            // Uniform width equals the widest cell, so nothing wraps here.
            cell.draw(terminal, cell_width)?;
            offset += 1;
        }

        let last_padding = width - cell_width * offset - pad_begin;
        terminal.write(&format!("{}\n", " ".repeat(last_padding)))?;
        Ok(())
    }
}

impl Widget for Table {
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) -> Result<()> {
        terminal.write("%(face-normal)s")?;
        if !self.rows.is_empty() {
            self.draw_rows(terminal, width)?;
        }
        if !self.cells.is_empty() {
            self.draw_cells(terminal, width)?;
        }
        Ok(())
    }
}
