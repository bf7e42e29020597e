use super::engine::LayoutEngine;
use super::wrap::wrap_text;
use crate::font::FontMetrics;
use crate::writer::DocumentWriter;
use crate::PDFError;

const TABSIZE: usize = 4;

impl<W: DocumentWriter, M: FontMetrics> LayoutEngine<W, M> {
    /// Writes a paragraph in the active style.
    ///
    /// The text is wrapped to the content width and every resulting line is
    /// placed below the previous one, left-aligned at the left margin. Each
    /// line reserves its own space, so a paragraph can continue on the next
    /// page. Hard line breaks (`\n`, `\r\n` or `\r`) start a new line; an
    /// empty line between two breaks leaves a blank line.
    pub fn write_text(&mut self, text: &str) -> Result<(), PDFError> {
        // normalize newlines and tabs
        let text = text
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\t', &" ".repeat(TABSIZE));

        let line_height = self.line_height();
        let max_width = self.content_width();
        let x = self.style.margin_left();

        let segments: Vec<&str> = text.split('\n').collect();
        let last = segments.len() - 1;
        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                if i < last {
                    self.write_new_line()?;
                }
                continue;
            }

            let wrapped = wrap_text(
                segment,
                self.style.font(),
                self.style.font_size(),
                max_width,
                &self.metrics,
            );
            for line in wrapped.lines.iter() {
                let y = self.place(line_height)?;
                self.draw_text_line(x, y, line)?;
            }
        }
        Ok(())
    }

    /// Moves the cursor down by one line of the active style without drawing
    pub fn write_new_line(&mut self) -> Result<(), PDFError> {
        let line_height = self.line_height();
        self.place(line_height)?;
        Ok(())
    }
}
