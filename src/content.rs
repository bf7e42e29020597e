//! Turns page contents into PDF content stream operators.

use crate::page::{LineLayout, PageContents, SpanLayout};
use std::io::Write;

/// Renders page contents to an (uncompressed) PDF content stream
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width().0,
                    image.position.height().0,
                    image.position.x1.0,
                    image.position.y1.0
                )?;
                write!(&mut content, "/I{} Do\n", image.image_index)?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::Line(line) => {
                render_line(&mut content, line)?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(content: &mut Vec<u8>, spans: &[SpanLayout]) -> Result<(), std::io::Error> {
    if spans.is_empty() {
        return Ok(());
    }

    write!(content, "BT\n")?;
    let mut current_font = None;
    for span in spans.iter() {
        if current_font != Some((span.font, span.size)) {
            current_font = Some((span.font, span.size));
            write!(content, "/{} {} Tf\n", span.font.resource_name(), span.size.0)?;
        }
        // absolute positioning: reset the text matrix for every span
        write!(
            content,
            "1 0 0 1 {} {} Tm\n",
            span.coords.0 .0, span.coords.1 .0
        )?;
        write!(content, "<")?;
        for byte in encode_win_ansi(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
    }
    write!(content, "ET\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "{} w\n", line.width.0)?;
    write!(content, "{} {} m\n", line.from.0 .0, line.from.1 .0)?;
    write!(content, "{} {} l\n", line.to.0 .0, line.to.1 .0)?;
    write!(content, "S\n")
}

/// Encodes text for a WinAnsi-encoded standard font. Printable ASCII and the
/// Latin-1 supplement map to themselves; everything else becomes `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            code @ (0x20..=0x7e | 0xa0..=0xff) => code as u8,
            _ => b'?',
        })
        .collect()
}
