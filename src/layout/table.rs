use super::engine::LayoutEngine;
use super::wrap::wrap_texts;
use crate::font::FontMetrics;
use crate::units::Pt;
use crate::writer::DocumentWriter;
use crate::PDFError;

/// Lifts the first baseline of a cell by this fraction of a line so that
/// descenders stay inside the cell
const BASELINE_LIFT: f32 = 0.25;

impl<W: DocumentWriter, M: FontMetrics> LayoutEngine<W, M> {
    /// Writes a table. Only tables of exactly one row are supported; anything
    /// else fails before drawing.
    pub fn write_table<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> Result<(), PDFError> {
        match rows {
            [row] => self.write_table_row(row),
            [] => Err(PDFError::UnsupportedLayout(
                "a table needs exactly one row, got none".into(),
            )),
            _ => Err(PDFError::UnsupportedLayout(format!(
                "multi row is currently not supported, got {} rows",
                rows.len()
            ))),
        }
    }

    /// Writes a single bordered table row spanning the content width.
    ///
    /// Columns share the width equally. Every cell is wrapped to its column,
    /// and the row is as tall as the cell with the most lines, plus the cell
    /// margins and both borders.
    pub fn write_table_row<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<(), PDFError> {
        if cells.is_empty() {
            return Err(PDFError::UnsupportedLayout(
                "a table row needs at least one cell".into(),
            ));
        }

        let columns = cells.len() as f32;
        let style = self.style.clone();
        let line_height = self.line_height();
        let table_width = self.content_width();
        let column_width = table_width / columns;
        let cell_width = column_width - style.cell_margin_left() - style.cell_margin_right();

        let wrapped = wrap_texts(
            cells,
            style.font(),
            style.font_size(),
            cell_width,
            &self.metrics,
        );

        let row_height = line_height * wrapped.max_line_count as f32
            + style.cell_margin_top()
            + style.cell_margin_bottom()
            + style.border_width() * 2.0;

        let bottom = self.place(row_height)?;
        let top = bottom + row_height;
        log::debug!(
            "table row of {} cell(s), {} line(s), from y={} to y={}",
            cells.len(),
            wrapped.max_line_count,
            bottom.0,
            top.0
        );

        // borders
        let left = style.margin_left();
        let right = left + column_width * columns;
        self.writer.set_line_width(style.border_width())?;
        for j in 0..=cells.len() {
            let x = left + column_width * j as f32;
            self.writer.draw_line((x, bottom), (x, top))?;
        }
        self.writer.draw_line((left, top), (right, top))?;
        self.writer.draw_line((left, bottom), (right, bottom))?;

        // cell contents, every column starts on the same baseline
        let first_baseline = top - style.border_width() - style.cell_margin_top() - line_height
            + line_height * BASELINE_LIFT;
        for (j, lines) in wrapped.lines.iter().enumerate() {
            let x = left + column_width * j as f32 + style.cell_margin_left();
            let mut y: Pt = first_baseline;
            for line in lines {
                self.draw_text_line(x, y, line)?;
                y -= line_height;
            }
        }

        Ok(())
    }
}
