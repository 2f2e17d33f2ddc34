use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::{BarViewData, HeatmapViewData, MapViewData, PieViewData};
use crate::error::{ErrorContext, ExplorerError};

/// Arrangement of the linked views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Map and bar on the left, pie and heatmap on the right.
    #[default]
    Grid,
    /// Map, bar and pie side by side.
    Row,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 2] = [LayoutVariant::Grid, LayoutVariant::Row];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Grid => "grid",
            LayoutVariant::Row => "row",
        }
    }

    pub fn includes_heatmap(&self) -> bool {
        matches!(self, LayoutVariant::Grid)
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutVariant {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(LayoutVariant::Grid),
            "row" => Ok(LayoutVariant::Row),
            other => Err(ExplorerError::validation_with_context(
                format!("Unknown layout variant: {}", other),
                ErrorContext::new("set_layout").with_entity("layout"),
            )),
        }
    }
}

/// All views for one layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutData {
    pub variant: LayoutVariant,
    /// Each side of the layout resolves its color scale on its own.
    pub independent_color_scales: bool,
    pub map: MapViewData,
    pub bar: BarViewData,
    pub pie: PieViewData,
    pub heatmap: Option<HeatmapViewData>,
}
