//! The style context: every parameter that governs how subsequent content is
//! measured and drawn.
//!
//! A [StyleContext] never changes once built. To adjust a single value, copy
//! the current context into a builder, change what you need, and build a new
//! one:
//!
//! ```
//! use pdf_flow::{FontSelector, Pt, StyleContextBuilder};
//!
//! let base = StyleContextBuilder::create().build();
//! let heading = StyleContextBuilder::deep_copy(&base)
//!     .font(FontSelector::HelveticaBold)
//!     .font_size(Pt(15.0))
//!     .build();
//! assert_ne!(base, heading);
//! ```

use crate::font::{FontMetrics, FontSelector};
use crate::units::Pt;
use crate::PDFError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleContext {
    font: FontSelector,
    font_size: Pt,
    margin_left: Pt,
    margin_right: Pt,
    /// Used as-is when positive, otherwise derived from the font
    line_height: Pt,
    border_width: Pt,
    cell_margin_left: Pt,
    cell_margin_right: Pt,
    cell_margin_top: Pt,
    cell_margin_bottom: Pt,
    text_line_padding: Pt,
}

impl Default for StyleContext {
    fn default() -> Self {
        StyleContext {
            font: FontSelector::Helvetica,
            font_size: Pt(12.0),
            margin_left: Pt(0.0),
            margin_right: Pt(0.0),
            line_height: Pt(0.0),
            border_width: Pt(1.0),
            cell_margin_left: Pt(0.0),
            cell_margin_right: Pt(0.0),
            cell_margin_top: Pt(0.0),
            cell_margin_bottom: Pt(0.0),
            text_line_padding: Pt(0.0),
        }
    }
}

impl StyleContext {
    pub fn font(&self) -> FontSelector {
        self.font
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn margin_left(&self) -> Pt {
        self.margin_left
    }

    pub fn margin_right(&self) -> Pt {
        self.margin_right
    }

    /// The line height override; zero or negative means "compute from the font"
    pub fn line_height_override(&self) -> Pt {
        self.line_height
    }

    pub fn border_width(&self) -> Pt {
        self.border_width
    }

    pub fn cell_margin_left(&self) -> Pt {
        self.cell_margin_left
    }

    pub fn cell_margin_right(&self) -> Pt {
        self.cell_margin_right
    }

    pub fn cell_margin_top(&self) -> Pt {
        self.cell_margin_top
    }

    pub fn cell_margin_bottom(&self) -> Pt {
        self.cell_margin_bottom
    }

    pub fn text_line_padding(&self) -> Pt {
        self.text_line_padding
    }

    /// The effective height of one line of text: the override when one is
    /// set, otherwise the calibrated em height of the font plus padding.
    pub fn line_height<M: FontMetrics + ?Sized>(&self, metrics: &M) -> Pt {
        if self.line_height > Pt(0.0) {
            self.line_height
        } else {
            metrics.nominal_line_height(self.font, self.font_size) + self.text_line_padding
        }
    }

    /// The horizontal space between the left and right margins of a page
    pub fn content_width(&self, page_width: Pt) -> Pt {
        page_width - self.margin_left - self.margin_right
    }

    /// Checks the numeric invariants of every field
    pub fn validate(&self) -> Result<(), PDFError> {
        if !self.font_size.is_finite() || self.font_size <= Pt(0.0) {
            return Err(PDFError::Configuration(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        let non_negative = [
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
            ("border_width", self.border_width),
            ("cell_margin_left", self.cell_margin_left),
            ("cell_margin_right", self.cell_margin_right),
            ("cell_margin_top", self.cell_margin_top),
            ("cell_margin_bottom", self.cell_margin_bottom),
            ("text_line_padding", self.text_line_padding),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < Pt(0.0) {
                return Err(PDFError::Configuration(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if !self.line_height.is_finite() {
            return Err(PDFError::Configuration(
                "line_height must be a finite number".into(),
            ));
        }
        Ok(())
    }

    fn numeric_fields(&self) -> [Pt; 10] {
        [
            self.font_size,
            self.margin_left,
            self.margin_right,
            self.line_height,
            self.border_width,
            self.cell_margin_left,
            self.cell_margin_right,
            self.cell_margin_top,
            self.cell_margin_bottom,
            self.text_line_padding,
        ]
    }
}

impl PartialEq for StyleContext {
    fn eq(&self, other: &Self) -> bool {
        self.font == other.font
            && self
                .numeric_fields()
                .iter()
                .zip(other.numeric_fields().iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for StyleContext {}

impl Hash for StyleContext {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font.hash(state);
        for value in self.numeric_fields() {
            value.to_bits().hash(state);
        }
    }
}

impl fmt::Display for StyleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StyleContext[font={},font_size={},margin_left={},margin_right={},line_height={},\
             border_width={},cell_margin_left={},cell_margin_right={},cell_margin_top={},\
             cell_margin_bottom={},text_line_padding={}]",
            self.font,
            self.font_size.0,
            self.margin_left.0,
            self.margin_right.0,
            self.line_height.0,
            self.border_width.0,
            self.cell_margin_left.0,
            self.cell_margin_right.0,
            self.cell_margin_top.0,
            self.cell_margin_bottom.0,
            self.text_line_padding.0,
        )
    }
}

/// Accumulates changes to a [StyleContext]. A builder can only be obtained
/// from [StyleContextBuilder::create] or [StyleContextBuilder::deep_copy], so
/// every mutator always has a context to work on.
#[derive(Debug, Clone)]
#[must_use]
pub struct StyleContextBuilder {
    context: StyleContext,
}

impl StyleContextBuilder {
    /// Start from a fresh default context
    pub fn create() -> Self {
        StyleContextBuilder {
            context: StyleContext::default(),
        }
    }

    /// Start from a copy of an existing context; the original is untouched
    pub fn deep_copy(existing: &StyleContext) -> Self {
        StyleContextBuilder {
            context: existing.clone(),
        }
    }

    pub fn font(mut self, font: FontSelector) -> Self {
        self.context.font = font;
        self
    }

    pub fn font_size(mut self, size: Pt) -> Self {
        self.context.font_size = size;
        self
    }

    pub fn margin_left(mut self, margin: Pt) -> Self {
        self.context.margin_left = margin;
        self
    }

    pub fn margin_right(mut self, margin: Pt) -> Self {
        self.context.margin_right = margin;
        self
    }

    /// Fix the line height; pass zero (or anything negative) to go back to
    /// the font-derived height
    pub fn line_height(mut self, height: Pt) -> Self {
        self.context.line_height = height;
        self
    }

    pub fn border_width(mut self, width: Pt) -> Self {
        self.context.border_width = width;
        self
    }

    pub fn cell_margin_left(mut self, margin: Pt) -> Self {
        self.context.cell_margin_left = margin;
        self
    }

    pub fn cell_margin_right(mut self, margin: Pt) -> Self {
        self.context.cell_margin_right = margin;
        self
    }

    pub fn cell_margin_top(mut self, margin: Pt) -> Self {
        self.context.cell_margin_top = margin;
        self
    }

    pub fn cell_margin_bottom(mut self, margin: Pt) -> Self {
        self.context.cell_margin_bottom = margin;
        self
    }

    pub fn text_line_padding(mut self, padding: Pt) -> Self {
        self.context.text_line_padding = padding;
        self
    }

    pub fn build(self) -> StyleContext {
        self.context
    }
}
