use super::engine::LayoutEngine;
use crate::font::FontMetrics;
use crate::image::Image;
use crate::units::Pt;
use crate::writer::DocumentWriter;
use crate::PDFError;

impl<W: DocumentWriter, M: FontMetrics> LayoutEngine<W, M> {
    /// Places an image at the left margin below the content so far.
    ///
    /// Images wider than `max_width` (the content width when `None`) are
    /// scaled down proportionally; smaller images keep their natural size,
    /// one point per pixel.
    pub fn write_image(&mut self, image: Image, max_width: Option<Pt>) -> Result<(), PDFError> {
        let max_width = max_width.unwrap_or_else(|| self.content_width());
        if !max_width.is_finite() || max_width <= Pt(0.0) {
            return Err(PDFError::Configuration(format!(
                "image max width must be positive, got {max_width}"
            )));
        }

        let natural = (Pt(image.width), Pt(image.height));
        let scale = if natural.0 > Pt(0.0) {
            (max_width / natural.0).min(1.0)
        } else {
            1.0
        };
        let width = natural.0 * scale;
        let height = natural.1 * scale;

        let y = self.place(height)?;
        let x = self.style.margin_left();
        log::debug!(
            "image {}x{} scaled by {scale} at ({}, {})",
            image.width,
            image.height,
            x.0,
            y.0
        );
        self.writer.draw_image(image, x, y, width, height)
    }
}
