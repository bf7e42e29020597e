#![allow(dead_code)]

use pdf_flow::{DocumentWriter, FontSelector, Image, PDFError, Pt};
use std::path::{Path, PathBuf};

/// A drawing primitive as received by [RecordingWriter]
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    BeginPage(Pt, Pt),
    AddPage,
    BeginText,
    SetFont(FontSelector, Pt),
    MoveTo(Pt, Pt),
    DrawString(String),
    EndText,
    SetLineWidth(Pt),
    DrawLine((Pt, Pt), (Pt, Pt)),
    DrawImage { x: Pt, y: Pt, width: Pt, height: Pt },
    Save(PathBuf),
}

/// A string drawn through a complete text sequence
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub page: usize,
    pub font: FontSelector,
    pub size: Pt,
    pub x: Pt,
    pub y: Pt,
    pub text: String,
}

/// Records every primitive instead of producing a file
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub ops: Vec<Op>,
}

impl RecordingWriter {
    pub fn new() -> RecordingWriter {
        RecordingWriter::default()
    }

    pub fn page_breaks(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::AddPage).count()
    }

    pub fn lines(&self) -> Vec<((Pt, Pt), (Pt, Pt))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::DrawLine(from, to) => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Every drawn string with the state it was drawn in; panics on text
    /// sequences that are out of order
    pub fn texts(&self) -> Vec<DrawnText> {
        let mut page = 0;
        let mut font = None;
        let mut position = None;
        let mut texts = Vec::new();
        for op in &self.ops {
            match op {
                Op::BeginPage(..) | Op::AddPage => page += 1,
                Op::BeginText => {
                    font = None;
                    position = None;
                }
                Op::SetFont(f, size) => font = Some((*f, *size)),
                Op::MoveTo(x, y) => position = Some((*x, *y)),
                Op::DrawString(text) => {
                    let (font, size) = font.expect("font set before drawing");
                    let (x, y) = position.expect("position set before drawing");
                    texts.push(DrawnText {
                        page,
                        font,
                        size,
                        x,
                        y,
                        text: text.clone(),
                    });
                }
                _ => {}
            }
        }
        texts
    }

    pub fn images(&self) -> Vec<(Pt, Pt, Pt, Pt)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::DrawImage {
                    x,
                    y,
                    width,
                    height,
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }
}

impl DocumentWriter for RecordingWriter {
    fn begin_page(&mut self, width: Pt, height: Pt) -> Result<(), PDFError> {
        self.ops.push(Op::BeginPage(width, height));
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), PDFError> {
        self.ops.push(Op::AddPage);
        Ok(())
    }

    fn begin_text(&mut self) -> Result<(), PDFError> {
        self.ops.push(Op::BeginText);
        Ok(())
    }

    fn set_font(&mut self, font: FontSelector, size: Pt) -> Result<(), PDFError> {
        self.ops.push(Op::SetFont(font, size));
        Ok(())
    }

    fn move_to(&mut self, x: Pt, y: Pt) -> Result<(), PDFError> {
        self.ops.push(Op::MoveTo(x, y));
        Ok(())
    }

    fn draw_string(&mut self, text: &str) -> Result<(), PDFError> {
        self.ops.push(Op::DrawString(text.to_string()));
        Ok(())
    }

    fn end_text(&mut self) -> Result<(), PDFError> {
        self.ops.push(Op::EndText);
        Ok(())
    }

    fn set_line_width(&mut self, width: Pt) -> Result<(), PDFError> {
        self.ops.push(Op::SetLineWidth(width));
        Ok(())
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) -> Result<(), PDFError> {
        self.ops.push(Op::DrawLine(from, to));
        Ok(())
    }

    fn draw_image(
        &mut self,
        _image: Image,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError> {
        self.ops.push(Op::DrawImage {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), PDFError> {
        self.ops.push(Op::Save(path.to_path_buf()));
        Ok(())
    }
}

/// Fails every primitive after `budget` successful ones
pub struct FailingWriter {
    pub inner: RecordingWriter,
    pub budget: usize,
}

impl FailingWriter {
    fn spend(&mut self) -> Result<(), PDFError> {
        if self.budget == 0 {
            return Err(PDFError::Io(std::io::Error::other("disk full")));
        }
        self.budget -= 1;
        Ok(())
    }
}

impl DocumentWriter for FailingWriter {
    fn begin_page(&mut self, width: Pt, height: Pt) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.begin_page(width, height)
    }

    fn add_page(&mut self) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.add_page()
    }

    fn begin_text(&mut self) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.begin_text()
    }

    fn set_font(&mut self, font: FontSelector, size: Pt) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.set_font(font, size)
    }

    fn move_to(&mut self, x: Pt, y: Pt) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.move_to(x, y)
    }

    fn draw_string(&mut self, text: &str) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.draw_string(text)
    }

    fn end_text(&mut self) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.end_text()
    }

    fn set_line_width(&mut self, width: Pt) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.set_line_width(width)
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.draw_line(from, to)
    }

    fn draw_image(
        &mut self,
        image: Image,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    ) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.draw_image(image, x, y, width, height)
    }

    fn save(&mut self, path: &Path) -> Result<(), PDFError> {
        self.spend()?;
        self.inner.save(path)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_close(actual: Pt, expected: f32) {
    assert!(
        (actual.0 - expected).abs() < 1e-3,
        "expected {expected}, got {}",
        actual.0
    );
}
