//! Flows styled paragraphs, single-row tables and images onto fixed-size PDF
//! pages.
//!
//! Text is measured approximately from nominal font metrics and wrapped
//! greedily at spaces; a single vertical cursor stacks content down the page
//! and starts a new page whenever the next item does not fit.

mod backend;
pub use backend::*;

pub mod config;
pub use config::LayoutConfig;

mod content;

pub mod directive;
pub use directive::Directive;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Wrapping, the page cursor and the layout engine
pub mod layout;
pub use layout::{LayoutEngine, PageSetup};

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod writer;
pub use writer::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
