//! The line-oriented content format.
//!
//! Every line of a content document is one record:
//!
//! ```text
//! conf|font_family|COURIER
//! conf|font_size|10
//! text|A paragraph of text
//! img|logo.png|png|200
//! table_row|first cell|second cell|third cell
//! ```
//!
//! A record may end in an `|EOL|` marker, which is ignored. Blank lines are
//! skipped. Values cannot contain `|`; there is no escaping. Empty cells at
//! the end of a `table_row` are dropped.

use crate::font::{FontMetrics, FontSelector};
use crate::image::{Image, ImageKind};
use crate::layout::LayoutEngine;
use crate::style::{StyleContext, StyleContextBuilder};
use crate::units::Pt;
use crate::writer::DocumentWriter;
use crate::PDFError;
use std::path::{Path, PathBuf};

const EOL_MARKER: &str = "|EOL|";

const CONF_FORMAT: &str = "conf|<key>|<value>";
const TEXT_FORMAT: &str = "text|<text>";
const IMG_FORMAT: &str = "img|<path>|<jpg|jpeg|other>|<optional max width>";
const TABLE_ROW_FORMAT: &str = "table_row|<cell>|<cell>|...";
const ANY_FORMAT: &str = "conf|..., text|..., img|... or table_row|...";

/// One parsed record of a content document
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Conf { key: String, value: String },
    Text(String),
    Image {
        path: PathBuf,
        kind: ImageKind,
        max_width: Option<Pt>,
    },
    TableRow(Vec<String>),
}

fn grammar_error(line: usize, record: &str, expected: &'static str) -> PDFError {
    PDFError::InputGrammar {
        line,
        record: record.to_string(),
        expected,
    }
}

/// Parses a single record. `line` is the 1-based record number used in
/// error messages. Blank records yield `None`.
pub fn parse_line(line: usize, record: &str) -> Result<Option<Directive>, PDFError> {
    let record = record.trim_end_matches(['\r', '\n']);
    let record = record.strip_suffix(EOL_MARKER).unwrap_or(record);
    if record.trim().is_empty() {
        return Ok(None);
    }

    let Some((prefix, rest)) = record.split_once('|') else {
        return Err(grammar_error(line, record, ANY_FORMAT));
    };

    let directive = match prefix {
        "conf" => match rest.split('|').collect::<Vec<_>>().as_slice() {
            [key, value] if !key.is_empty() && !value.is_empty() => Directive::Conf {
                key: key.to_string(),
                value: value.to_string(),
            },
            _ => return Err(grammar_error(line, record, CONF_FORMAT)),
        },
        "text" => {
            if rest.is_empty() || rest.contains('|') {
                return Err(grammar_error(line, record, TEXT_FORMAT));
            }
            Directive::Text(rest.to_string())
        }
        "img" => {
            let (path, kind, max_width) = match rest.split('|').collect::<Vec<_>>().as_slice() {
                [path, kind] => (*path, *kind, ""),
                [path, kind, max_width] => (*path, *kind, *max_width),
                _ => return Err(grammar_error(line, record, IMG_FORMAT)),
            };
            if path.is_empty() || kind.is_empty() {
                return Err(grammar_error(line, record, IMG_FORMAT));
            }
            let max_width = match max_width.trim() {
                "" => None,
                width => Some(Pt(parse_number("max width", width)?)),
            };
            let kind = kind.parse::<ImageKind>().unwrap_or(ImageKind::Other);
            Directive::Image {
                path: PathBuf::from(path),
                kind,
                max_width,
            }
        }
        "table_row" => {
            let mut cells: Vec<String> = rest.split('|').map(str::to_string).collect();
            // trailing separators do not open extra columns
            while cells.last().is_some_and(|cell| cell.is_empty()) {
                cells.pop();
            }
            if cells.is_empty() {
                return Err(grammar_error(line, record, TABLE_ROW_FORMAT));
            }
            Directive::TableRow(cells)
        }
        _ => return Err(grammar_error(line, record, ANY_FORMAT)),
    };
    Ok(Some(directive))
}

/// Parses a whole content document, one record per line
pub fn parse_document(input: &str) -> Result<Vec<Directive>, PDFError> {
    let mut directives = Vec::new();
    for (i, record) in input.lines().enumerate() {
        if let Some(directive) = parse_line(i + 1, record)? {
            directives.push(directive);
        }
    }
    log::debug!("parsed {} directive(s)", directives.len());
    Ok(directives)
}

fn parse_number(key: &str, value: &str) -> Result<f32, PDFError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PDFError::Configuration(format!("{key} must be a number, got `{value}`")))
}

/// Derives a new style from `style` with one key changed. The result is
/// validated, so out-of-range values fail here.
pub fn apply_config(style: &StyleContext, key: &str, value: &str) -> Result<StyleContext, PDFError> {
    let builder = StyleContextBuilder::deep_copy(style);
    let builder = match key {
        "font_family" => builder.font(value.trim().parse::<FontSelector>()?),
        "font_size" => builder.font_size(Pt(parse_number(key, value)?)),
        "line_height" => builder.line_height(Pt(parse_number(key, value)?)),
        "margin_left" => builder.margin_left(Pt(parse_number(key, value)?)),
        "margin_right" => builder.margin_right(Pt(parse_number(key, value)?)),
        "border_width" => builder.border_width(Pt(parse_number(key, value)?)),
        "cell_margin_left" => builder.cell_margin_left(Pt(parse_number(key, value)?)),
        "cell_margin_right" => builder.cell_margin_right(Pt(parse_number(key, value)?)),
        "cell_margin_top" => builder.cell_margin_top(Pt(parse_number(key, value)?)),
        "cell_margin_bottom" => builder.cell_margin_bottom(Pt(parse_number(key, value)?)),
        "text_line_padding" => builder.text_line_padding(Pt(parse_number(key, value)?)),
        other => {
            return Err(PDFError::Configuration(format!(
                "configuration key {other} is not supported"
            )))
        }
    };
    let style = builder.build();
    style.validate()?;
    Ok(style)
}

/// Feeds directives to `engine` in order. Relative image paths are resolved
/// against `base_dir`.
pub fn run<W, M>(
    directives: &[Directive],
    engine: &mut LayoutEngine<W, M>,
    base_dir: &Path,
) -> Result<(), PDFError>
where
    W: DocumentWriter,
    M: FontMetrics,
{
    for directive in directives {
        match directive {
            Directive::Conf { key, value } => {
                let style = apply_config(engine.style(), key, value)?;
                engine.set_style(style)?;
            }
            Directive::Text(text) => engine.write_text(text)?,
            Directive::Image {
                path,
                kind,
                max_width,
            } => {
                let path = base_dir.join(path);
                if !path.is_file() {
                    return Err(PDFError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("image {} does not exist", path.display()),
                    )));
                }
                let image = Image::from_disk(&path, *kind)?;
                engine.write_image(image, *max_width)?;
            }
            Directive::TableRow(cells) => engine.write_table_row(cells)?,
        }
    }
    Ok(())
}
