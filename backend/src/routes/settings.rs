use serde::{Deserialize, Serialize};

use crate::api::{BoundaryLayer, LayoutVariant};

/// Current values of every dashboard control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Requested sample size before clamping.
    pub sample_size: usize,
    pub point_opacity: f64,
    pub boundary_layer: BoundaryLayer,
    pub color_field: String,
    pub pie_field: String,
    pub shape_field: Option<String>,
    pub size_field: Option<String>,
    pub layout: LayoutVariant,
}

/// Partial settings change; absent keys are left alone.
///
/// Shape and size are unset with `"(none)"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    pub sample_size: Option<usize>,
    pub point_opacity: Option<f64>,
    pub boundary_layer: Option<String>,
    pub color_field: Option<String>,
    pub pie_field: Option<String>,
    pub shape_field: Option<String>,
    pub size_field: Option<String>,
    pub layout: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == SettingsUpdate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_deserializes() {
        let update: SettingsUpdate =
            serde_json::from_str(r#"{"point_opacity": 0.3, "shape_field": "(none)"}"#).unwrap();
        assert_eq!(update.point_opacity, Some(0.3));
        assert_eq!(update.shape_field.as_deref(), Some("(none)"));
        assert!(update.color_field.is_none());
        assert!(!update.is_empty());
        assert!(SettingsUpdate::default().is_empty());
    }
}
