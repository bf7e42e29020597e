//! Page size presets. Only A4 is offered; every page of a document has the
//! same size.

use crate::units::*;
use serde::{Deserialize, Serialize};

/// ISO A4 in portrait orientation, (width, height) in points
pub const A4: (Pt, Pt) = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageSize {
    #[default]
    A4,
}

impl PageSize {
    /// (width, height) in points
    pub fn dimensions(&self) -> (Pt, Pt) {
        match self {
            PageSize::A4 => A4,
        }
    }
}
