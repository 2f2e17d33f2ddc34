use serde::{Deserialize, Serialize};

use crate::api::{ColorScale, EncodingDescriptor};

/// One bar per category of the map/bar color field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    pub category: String,
    pub count: usize,
    pub color: Option<String>,
    pub opacity: f64,
    pub selected: bool,
}

/// Bar chart of filtered counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarViewData {
    pub field: String,
    pub encoding: EncodingDescriptor,
    pub color_scale: ColorScale,
    pub tooltip: Vec<EncodingDescriptor>,
    pub bars: Vec<BarEntry>,
    pub picked: Option<String>,
    pub total: usize,
}
