use crate::font::FontTable;
use crate::layout::PageSetup;
use crate::style::StyleContext;
use crate::PDFError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a document build starts from: the page setup, the initial
/// style and the font calibration table.
///
/// Loaded from JSON; every section and field is optional and falls back to
/// its default, but unknown fields are rejected.
///
/// ```json
/// {
///   "page": { "size": "A4", "margin_top": 36, "margin_bottom": 36 },
///   "style": { "font": "COURIER", "font_size": 10, "margin_left": 50 },
///   "fonts": {
///     "courier": { "em_width": 738, "em_height": 1055,
///                  "error_margin_x": 0.8, "error_margin_y": 0.375 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub page: PageSetup,
    pub style: StyleContext,
    pub fonts: FontTable,
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<LayoutConfig, PDFError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LayoutConfig, PDFError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading configuration from {}", path.as_ref().display());
        LayoutConfig::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), PDFError> {
        self.page.validate()?;
        self.style.validate()?;
        self.fonts.validate()
    }
}
