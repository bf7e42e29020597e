use crate::document::Document;
use crate::font::FontSelector;
use crate::image::Image;
use crate::info::Info;
use crate::page::{ImageLayout, LineLayout, Page, SpanLayout};
use crate::rect::Rect;
use crate::units::Pt;
use crate::writer::DocumentWriter;
use crate::PDFError;
use id_arena::Id;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
struct TextState {
    font: Option<(FontSelector, Pt)>,
    position: (Pt, Pt),
}

/// A [DocumentWriter] that collects everything into a [Document] and writes
/// it out as a PDF file on [DocumentWriter::save].
pub struct PdfDocumentWriter {
    document: Document,
    current_page: Option<Id<Page>>,
    page_size: Option<(Pt, Pt)>,
    text: Option<TextState>,
    line_width: Pt,
}

impl PdfDocumentWriter {
    pub fn new() -> PdfDocumentWriter {
        PdfDocumentWriter {
            document: Document::default(),
            current_page: None,
            page_size: None,
            text: None,
            line_width: Pt(1.0),
        }
    }

    pub fn with_info(info: Info) -> PdfDocumentWriter {
        let mut writer = PdfDocumentWriter::new();
        writer.document.set_info(info);
        writer
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Render the document into any byte sink
    pub fn write_to<W: std::io::Write>(&self, w: W) -> Result<(), PDFError> {
        if self.text.is_some() {
            return Err(PDFError::TextState("text block still open"));
        }
        self.document.write(w)
    }

    fn page_mut(&mut self) -> Result<&mut Page, PDFError> {
        let id = self.current_page.ok_or(PDFError::PageMissing)?;
        self.document.pages.get_mut(id).ok_or(PDFError::PageMissing)
    }

    fn text_mut(&mut self) -> Result<&mut TextState, PDFError> {
        self.text
            .as_mut()
            .ok_or(PDFError::TextState("no text block open"))
    }

    fn start_page(&mut self, width: Pt, height: Pt) -> Result<(), PDFError> {
        if self.text.is_some() {
            return Err(PDFError::TextState("cannot change pages inside a text block"));
        }
        let id = self.document.add_page(Page::new(width, height));
        self.current_page = Some(id);
        self.page_size = Some((width, height));
        log::debug!("started page {}", self.document.page_count());
        Ok(())
    }
}

impl Default for PdfDocumentWriter {
    fn default() -> Self {
        PdfDocumentWriter::new()
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn begin_page(&mut self, width: Pt, height: Pt) -> Result<(), PDFError> {
        self.start_page(width, height)
    }

    fn add_page(&mut self) -> Result<(), PDFError> {
        let (width, height) = self.page_size.ok_or(PDFError::PageMissing)?;
        self.start_page(width, height)
    }

    fn begin_text(&mut self) -> Result<(), PDFError> {
        self.page_mut()?;
        if self.text.is_some() {
            return Err(PDFError::TextState("text blocks cannot be nested"));
        }
        self.text = Some(TextState {
            font: None,
            position: (Pt(0.0), Pt(0.0)),
        });
        Ok(())
    }

    fn set_font(&mut self, font: FontSelector, size: Pt) -> Result<(), PDFError> {
        self.text_mut()?.font = Some((font, size));
        Ok(())
    }

    fn move_to(&mut self, x: Pt, y: Pt) -> Result<(), PDFError> {
        self.text_mut()?.position = (x, y);
        Ok(())
    }

    fn draw_string(&mut self, text: &str) -> Result<(), PDFError> {
        let state = *self.text_mut()?;
        let (font, size) = state
            .font
            .ok_or(PDFError::TextState("no font selected"))?;
        self.page_mut()?.add_span(SpanLayout {
            text: text.to_string(),
            font,
            size,
            coords: state.position,
        });
        Ok(())
    }

    fn end_text(&mut self) -> Result<(), PDFError> {
        self.text
            .take()
            .map(|_| ())
            .ok_or(PDFError::TextState("no text block open"))
    }

    fn set_line_width(&mut self, width: Pt) -> Result<(), PDFError> {
        self.line_width = width;
        Ok(())
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) -> Result<(), PDFError> {
        let width = self.line_width;
        self.page_mut()?.add_line(LineLayout { from, to, width });
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: Image,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError> {
        // make sure there is a page before the image is stored
        self.page_mut()?;
        let image_index = self.document.add_image(image).index();
        self.page_mut()?.add_image(ImageLayout {
            image_index,
            position: Rect::from_origin(x, y, width, height),
        });
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), PDFError> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        std::fs::write(path, bytes)?;
        log::info!(
            "saved {} page(s) to {}",
            self.document.page_count(),
            path.display()
        );
        Ok(())
    }
}
