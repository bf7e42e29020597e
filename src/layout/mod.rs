//! Flowing styled content onto fixed-size pages.
//!
//! Content is stacked from the top of the page downwards by a single
//! [PageCursor]. A [LayoutEngine] combines the cursor with the active style
//! and a [DocumentWriter](crate::DocumentWriter), and offers one operation
//! per kind of content: paragraphs, single-row tables and images.
//!
//! # Example
//!
//! ```no_run
//! use pdf_flow::layout::LayoutEngine;
//! use pdf_flow::{FontSelector, PdfDocumentWriter, Pt, StyleContextBuilder};
//!
//! # fn main() -> Result<(), pdf_flow::PDFError> {
//! let mut engine = LayoutEngine::new(PdfDocumentWriter::new())?;
//! let heading = StyleContextBuilder::deep_copy(engine.style())
//!     .font(FontSelector::HelveticaBold)
//!     .font_size(Pt(15.0))
//!     .build();
//! engine.set_style(heading)?;
//! engine.write_text("Quarterly figures")?;
//! engine.write_table_row(&["Region", "Revenue", "Growth"])?;
//! engine.finish("report.pdf")?;
//! # Ok(())
//! # }
//! ```

mod cursor;
mod engine;
mod image;
mod table;
mod text;
mod wrap;

pub use cursor::*;
pub use engine::*;
pub use wrap::*;
