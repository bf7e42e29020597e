use crate::font::FontSelector;
use crate::image::Image;
use crate::units::Pt;
use crate::PDFError;
use std::path::Path;

/// The drawing primitives layout is expressed in. Layout decides *where*
/// things go; a writer decides how that turns into bytes.
///
/// Coordinates are absolute page coordinates in points with the origin in the
/// bottom-left corner of the page. Text primitives must be issued as a
/// `begin_text`, `set_font`, `move_to`, `draw_string`, `end_text` sequence.
///
/// Every primitive can fail; layout never retries and abandons the document
/// on the first error.
pub trait DocumentWriter {
    /// Start the first page of the document
    fn begin_page(&mut self, width: Pt, height: Pt) -> Result<(), PDFError>;

    /// Finish the current page and continue on a new one of the same size
    fn add_page(&mut self) -> Result<(), PDFError>;

    fn begin_text(&mut self) -> Result<(), PDFError>;

    fn set_font(&mut self, font: FontSelector, size: Pt) -> Result<(), PDFError>;

    /// Position the baseline start of the next string
    fn move_to(&mut self, x: Pt, y: Pt) -> Result<(), PDFError>;

    fn draw_string(&mut self, text: &str) -> Result<(), PDFError>;

    fn end_text(&mut self) -> Result<(), PDFError>;

    /// Stroke width of subsequent lines
    fn set_line_width(&mut self, width: Pt) -> Result<(), PDFError>;

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) -> Result<(), PDFError>;

    /// Draw `image` scaled into the box with its bottom-left corner at (x, y)
    fn draw_image(
        &mut self,
        image: Image,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError>;

    /// Write the finished document to `path`
    fn save(&mut self, path: &Path) -> Result<(), PDFError>;
}
