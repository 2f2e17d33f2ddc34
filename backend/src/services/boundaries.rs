//! Administrative boundary layers drawn under the map.
//!
//! Geometry is never loaded here; the view only names the TopoJSON source and
//! the object keys to draw from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::{BoundaryLayerSpec, BoundaryOption, LayerStyle};
use crate::error::{ErrorContext, ExplorerError};

/// ONS UK TopoJSON with every boundary layer.
pub const TOPOJSON_URL: &str =
    "https://raw.githubusercontent.com/ONSdigital/uk-topojson/refs/heads/main/output/topo.json";
/// Object key of the national outline.
pub const OUTLINE_FEATURE: &str = "uk";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryLayer {
    Cty,
    #[default]
    Utla,
    Ltla,
}

impl BoundaryLayer {
    pub const ALL: [BoundaryLayer; 3] = [
        BoundaryLayer::Cty,
        BoundaryLayer::Utla,
        BoundaryLayer::Ltla,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BoundaryLayer::Cty => "cty",
            BoundaryLayer::Utla => "utla",
            BoundaryLayer::Ltla => "ltla",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoundaryLayer::Cty => "Counties (England)",
            BoundaryLayer::Utla => "Upper-tier / unitary authorities (UK)",
            BoundaryLayer::Ltla => "Lower-tier / unitary authorities (UK)",
        }
    }

    pub fn option(&self) -> BoundaryOption {
        BoundaryOption {
            key: self.key().to_string(),
            label: self.label().to_string(),
        }
    }

    /// Render description for this layer over the national outline.
    pub fn spec(&self) -> BoundaryLayerSpec {
        BoundaryLayerSpec {
            url: TOPOJSON_URL.to_string(),
            layer: self.key().to_string(),
            label: self.label().to_string(),
            outline_feature: OUTLINE_FEATURE.to_string(),
            outline_style: LayerStyle {
                fill: Some("lightgray".to_string()),
                stroke: "white".to_string(),
                stroke_width: 1.0,
            },
            layer_style: LayerStyle {
                fill: None,
                stroke: "white".to_string(),
                stroke_width: 0.7,
            },
        }
    }
}

/// Selector entries in display order.
pub fn boundary_options() -> Vec<BoundaryOption> {
    BoundaryLayer::ALL.iter().map(BoundaryLayer::option).collect()
}

impl fmt::Display for BoundaryLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BoundaryLayer {
    type Err = ExplorerError;

    /// Accepts the layer key or its label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BoundaryLayer::ALL
            .into_iter()
            .find(|l| l.key().eq_ignore_ascii_case(wanted) || l.label() == wanted)
            .ok_or_else(|| {
                ExplorerError::not_found_with_context(
                    format!("Unknown boundary layer: {}", wanted),
                    ErrorContext::new("set_boundary_layer").with_entity("boundary_layer"),
                )
            })
    }
}
