use serde::{Deserialize, Serialize};

use crate::api::BrushRegion;

/// Body of a brush update; `null` clears the brush.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrushUpdate {
    #[serde(default)]
    pub region: Option<BrushRegion>,
}

/// Body of a click on a bar or slice; `null` clears the pick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickUpdate {
    #[serde(default)]
    pub value: Option<String>,
}
