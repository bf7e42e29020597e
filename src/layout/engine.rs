use super::cursor::PageCursor;
use crate::font::{FontMetrics, FontTable};
use crate::pagesize::PageSize;
use crate::style::StyleContext;
use crate::units::Pt;
use crate::writer::DocumentWriter;
use crate::PDFError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The size of every page and the vertical margins content is kept within
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSetup {
    pub size: PageSize,
    pub margin_top: Pt,
    pub margin_bottom: Pt,
}

impl PageSetup {
    pub fn validate(&self) -> Result<(), PDFError> {
        let (_, height) = self.size.dimensions();
        for (name, value) in [
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
        ] {
            if !value.is_finite() || value < Pt(0.0) {
                return Err(PDFError::Configuration(format!(
                    "page {name} must not be negative, got {value}"
                )));
            }
        }
        if self.margin_top + self.margin_bottom >= height {
            return Err(PDFError::Configuration(
                "page margins leave no room for content".into(),
            ));
        }
        Ok(())
    }
}

/// Flows content onto pages.
///
/// The engine owns the active [StyleContext], the [PageCursor] and the
/// [DocumentWriter]. Every content item reserves vertical space from the
/// cursor, and when the reservation lands on a new page the engine asks the
/// writer for that page before drawing anything.
pub struct LayoutEngine<W, M = FontTable> {
    pub(super) style: StyleContext,
    pub(super) cursor: PageCursor,
    pub(super) writer: W,
    pub(super) metrics: M,
    pages: usize,
}

impl<W: DocumentWriter> LayoutEngine<W, FontTable> {
    /// An A4 engine without vertical margins, using the default style and the
    /// built-in font table
    pub fn new(writer: W) -> Result<Self, PDFError> {
        LayoutEngine::with_config(
            writer,
            PageSetup::default(),
            StyleContext::default(),
            FontTable::default(),
        )
    }
}

impl<W: DocumentWriter, M: FontMetrics> LayoutEngine<W, M> {
    /// Validates the configuration and begins the first page
    pub fn with_config(
        mut writer: W,
        page: PageSetup,
        style: StyleContext,
        metrics: M,
    ) -> Result<Self, PDFError> {
        page.validate()?;
        style.validate()?;

        let (width, height) = page.size.dimensions();
        writer.begin_page(width, height)?;

        Ok(LayoutEngine {
            style,
            cursor: PageCursor::new(width, height, page.margin_top, page.margin_bottom),
            writer,
            metrics,
            pages: 1,
        })
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }

    /// Replace the active style. It applies to everything placed afterwards.
    pub fn set_style(&mut self, style: StyleContext) -> Result<(), PDFError> {
        style.validate()?;
        log::debug!("style changed to {style}");
        self.style = style;
        Ok(())
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Number of pages begun so far
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Height of one line of text in the active style
    pub fn line_height(&self) -> Pt {
        self.style.line_height(&self.metrics)
    }

    /// Width between the left and right margins of the active style
    pub fn content_width(&self) -> Pt {
        self.style.content_width(self.cursor.page_width())
    }

    /// Reserves `height` below the content placed so far and returns the y
    /// coordinate of the bottom of the reserved block, starting a new page
    /// first when the block does not fit on the current one.
    pub fn place(&mut self, height: Pt) -> Result<Pt, PDFError> {
        let placement = self.cursor.reserve(height);
        if placement.page_break {
            self.writer.add_page()?;
            self.pages += 1;
            log::debug!("page break, now on page {}", self.pages);
        }
        Ok(placement.y)
    }

    /// Draws one string with its baseline starting at (x, y) in the active font
    pub(super) fn draw_text_line(&mut self, x: Pt, y: Pt, line: &str) -> Result<(), PDFError> {
        log::trace!("line at ({}, {}): {line:?}", x.0, y.0);
        self.writer.begin_text()?;
        self.writer
            .set_font(self.style.font(), self.style.font_size())?;
        self.writer.move_to(x, y)?;
        self.writer.draw_string(line)?;
        self.writer.end_text()
    }

    /// Saves the document to `path` and hands back the writer
    pub fn finish<P: AsRef<Path>>(mut self, path: P) -> Result<W, PDFError> {
        self.writer.save(path.as_ref())?;
        Ok(self.writer)
    }
}
