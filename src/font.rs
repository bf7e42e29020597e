use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use pdf_writer::{Name, Pdf};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fonts text can be set in. These are all PDF standard Type1 fonts, so
/// nothing is embedded in the generated document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontSelector {
    Courier,
    #[default]
    Helvetica,
    HelveticaBold,
}

impl FontSelector {
    /// Every supported font, in resource-name order
    pub const ALL: [FontSelector; 3] = [
        FontSelector::Courier,
        FontSelector::Helvetica,
        FontSelector::HelveticaBold,
    ];

    /// The PostScript name of the standard font
    pub fn base_font(&self) -> &'static str {
        match self {
            FontSelector::Courier => "Courier",
            FontSelector::Helvetica => "Helvetica",
            FontSelector::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The name used for this font in content streams and page resources
    pub(crate) fn resource_name(&self) -> String {
        format!("F{}", self.index())
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            FontSelector::Courier => 0,
            FontSelector::Helvetica => 1,
            FontSelector::HelveticaBold => 2,
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

impl fmt::Display for FontSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontSelector::Courier => "COURIER",
            FontSelector::Helvetica => "HELVETICA",
            FontSelector::HelveticaBold => "HELVETICA_BOLD",
        })
    }
}

impl FromStr for FontSelector {
    type Err = PDFError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COURIER" => Ok(FontSelector::Courier),
            "HELVETICA" => Ok(FontSelector::Helvetica),
            "HELVETICA_BOLD" => Ok(FontSelector::HelveticaBold),
            other => Err(PDFError::Configuration(format!(
                "font family {other} is currently not supported"
            ))),
        }
    }
}

/// Source of the nominal font metrics used for approximate text measurement.
///
/// Widths and heights are those of the font's em bounding box, in 1/1000 em
/// units. The error margins are empirical multipliers that stand in for real
/// per-glyph measurement.
pub trait FontMetrics {
    fn em_box_width(&self, font: FontSelector) -> f32;
    fn em_box_height(&self, font: FontSelector) -> f32;
    /// Horizontal calibration factor. It is kept with the other calibration
    /// data but the approximate-width formula does not apply it.
    fn error_margin_x(&self, font: FontSelector) -> f32;
    fn error_margin_y(&self, font: FontSelector) -> f32;

    /// Height of one line of text set in `font` at `size`, before padding
    fn nominal_line_height(&self, font: FontSelector, size: crate::Pt) -> crate::Pt {
        size * (self.em_box_height(font) / 1000.0 * self.error_margin_y(font))
    }
}

/// Metrics and calibration for a single font
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontEntry {
    pub em_width: f32,
    pub em_height: f32,
    pub error_margin_x: f32,
    pub error_margin_y: f32,
}

/// The built-in metric table. The bounding boxes come from the Adobe AFM files
/// for the standard fonts; the error margins were tuned by eye and can be
/// overridden from the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontTable {
    pub courier: FontEntry,
    pub helvetica: FontEntry,
    pub helvetica_bold: FontEntry,
}

impl Default for FontTable {
    fn default() -> Self {
        FontTable {
            // FontBBox -23 -250 715 805
            courier: FontEntry {
                em_width: 738.0,
                em_height: 1055.0,
                error_margin_x: 0.8,
                error_margin_y: 0.375,
            },
            // FontBBox -166 -225 1000 931
            helvetica: FontEntry {
                em_width: 1166.0,
                em_height: 1156.0,
                error_margin_x: 0.375,
                error_margin_y: 0.375,
            },
            // FontBBox -170 -228 1003 962
            helvetica_bold: FontEntry {
                em_width: 1173.0,
                em_height: 1190.0,
                error_margin_x: 0.4,
                error_margin_y: 0.375,
            },
        }
    }
}

impl FontTable {
    pub fn entry(&self, font: FontSelector) -> &FontEntry {
        match font {
            FontSelector::Courier => &self.courier,
            FontSelector::Helvetica => &self.helvetica,
            FontSelector::HelveticaBold => &self.helvetica_bold,
        }
    }

    /// Checks that every entry can be used for measurement
    pub fn validate(&self) -> Result<(), PDFError> {
        for font in FontSelector::ALL {
            let e = self.entry(font);
            let values = [e.em_width, e.em_height, e.error_margin_x, e.error_margin_y];
            if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(PDFError::Configuration(format!(
                    "font metrics for {font} must be positive"
                )));
            }
        }
        Ok(())
    }
}

impl FontMetrics for FontTable {
    fn em_box_width(&self, font: FontSelector) -> f32 {
        self.entry(font).em_width
    }

    fn em_box_height(&self, font: FontSelector) -> f32 {
        self.entry(font).em_height
    }

    fn error_margin_x(&self, font: FontSelector) -> f32 {
        self.entry(font).error_margin_x
    }

    fn error_margin_y(&self, font: FontSelector) -> f32 {
        self.entry(font).error_margin_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pt;

    #[test]
    fn parses_supported_names() {
        assert_eq!("COURIER".parse::<FontSelector>().unwrap(), FontSelector::Courier);
        assert_eq!(
            "HELVETICA_BOLD".parse::<FontSelector>().unwrap(),
            FontSelector::HelveticaBold
        );
        assert!(matches!(
            "HELVETICA_OBLIQUE".parse::<FontSelector>(),
            Err(PDFError::Configuration(_))
        ));
        for font in FontSelector::ALL {
            assert_eq!(font.to_string().parse::<FontSelector>().unwrap(), font);
        }
    }

    #[test]
    fn line_height_uses_calibration() {
        let table = FontTable::default();
        let h = table.nominal_line_height(FontSelector::Courier, Pt(10.0));
        assert!((h.0 - 1055.0 / 1000.0 * 10.0 * 0.375).abs() < 1e-4);
    }

    #[test]
    fn horizontal_margin_is_stored_but_not_applied() {
        let table = FontTable::default();
        assert_eq!(table.error_margin_x(FontSelector::Courier), 0.8);
        let char_width =
            crate::layout::approximate_char_width(&table, FontSelector::Courier, Pt(10.0));
        assert!((char_width.0 - 7.38).abs() < 1e-4);
    }

    #[test]
    fn rejects_non_positive_metrics() {
        let mut table = FontTable::default();
        assert!(table.validate().is_ok());
        table.helvetica.error_margin_y = 0.0;
        assert!(matches!(table.validate(), Err(PDFError::Configuration(_))));
    }
}
