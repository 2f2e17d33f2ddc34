//! Public API surface for the explorer.
//!
//! This file consolidates the DTO types served over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::data::DatasetSummary;
pub use crate::models::{AttributeValue, EncodingDescriptor, FieldDescriptor, FieldKind};
pub use crate::routes::bar::BarEntry;
pub use crate::routes::bar::BarViewData;
pub use crate::routes::boundaries::BoundaryLayerSpec;
pub use crate::routes::boundaries::BoundaryOption;
pub use crate::routes::boundaries::LayerStyle;
pub use crate::routes::controls::ControlsData;
pub use crate::routes::controls::DatasetInfo;
pub use crate::routes::controls::FieldOptions;
pub use crate::routes::controls::OpacityControl;
pub use crate::routes::controls::SampleSizeControl;
pub use crate::routes::heatmap::HeatmapCell;
pub use crate::routes::heatmap::HeatmapViewData;
pub use crate::routes::layout::LayoutData;
pub use crate::routes::layout::LayoutVariant;
pub use crate::routes::map::MapPoint;
pub use crate::routes::map::MapViewData;
pub use crate::routes::pie::PieSlice;
pub use crate::routes::pie::PieViewData;
pub use crate::routes::selections::BrushUpdate;
pub use crate::routes::selections::PickUpdate;
pub use crate::routes::settings::DashboardSettings;
pub use crate::routes::settings::SettingsUpdate;
pub use crate::services::boundaries::BoundaryLayer;
pub use crate::services::palette::{CategoryResolution, ColorScale, PaletteRegime};
pub use crate::services::selection::{BrushRegion, CategoricalPick, PickRole, SelectionState};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row identifier: position in the dataset after invalid rows were dropped.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RowId(pub usize);

impl RowId {
    pub fn new(value: usize) -> Self {
        RowId(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
