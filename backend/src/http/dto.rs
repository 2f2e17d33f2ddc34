//! Data Transfer Objects for the HTTP API.
//!
//! View and control DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Views
    BarViewData, HeatmapViewData, LayoutData, MapViewData, PieViewData,
    // Controls
    BoundaryLayerSpec, ControlsData, DashboardSettings, DatasetInfo, SettingsUpdate,
    // Selections
    BrushUpdate, PickUpdate, SelectionState,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Records in the loaded dataset
    pub records: usize,
}
