//! One-call document builds.

use crate::backend::PdfDocumentWriter;
use crate::config::LayoutConfig;
use crate::directive::{parse_document, run};
use crate::info::Info;
use crate::layout::LayoutEngine;
use crate::PDFError;
use std::path::Path;

/// Builds a PDF at `output`. `client` receives a fresh engine on the first
/// page and issues the content; when it returns successfully the document is
/// saved. If anything fails, no file is written.
pub fn build_pdf<P, F>(
    config: &LayoutConfig,
    info: Option<Info>,
    output: P,
    client: F,
) -> Result<(), PDFError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut LayoutEngine<PdfDocumentWriter>) -> Result<(), PDFError>,
{
    config.validate()?;
    let writer = match info {
        Some(info) => PdfDocumentWriter::with_info(info),
        None => PdfDocumentWriter::new(),
    };
    let mut engine = LayoutEngine::with_config(
        writer,
        config.page.clone(),
        config.style.clone(),
        config.fonts.clone(),
    )?;
    client(&mut engine)?;
    engine.finish(output)?;
    Ok(())
}

/// Builds a PDF from a content document. Relative image paths are resolved
/// against `base_dir`. The whole input is parsed before anything is laid out.
pub fn build_pdf_from_str<P: AsRef<Path>>(
    config: &LayoutConfig,
    info: Option<Info>,
    input: &str,
    base_dir: &Path,
    output: P,
) -> Result<(), PDFError> {
    let directives = parse_document(input)?;
    build_pdf(config, info, output, |engine| {
        run(&directives, engine, base_dir)
    })
}
