use serde::{Deserialize, Serialize};

use crate::api::{
    AttributeValue, BoundaryLayerSpec, BrushRegion, ColorScale, EncodingDescriptor, RowId,
};

/// Projection used by the map view.
pub const MAP_PROJECTION: &str = "mercator";

/// One rendered accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: RowId,
    pub longitude: f64,
    pub latitude: f64,
    pub color_value: AttributeValue,
    /// Explicit fill when the color scale assigns one.
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_value: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_value: Option<AttributeValue>,
    pub opacity: f64,
}

/// Point layer over the boundary layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapViewData {
    pub projection: String,
    pub color: EncodingDescriptor,
    /// Present when the color field is categorical.
    pub color_scale: Option<ColorScale>,
    pub shape: Option<EncodingDescriptor>,
    pub size: Option<EncodingDescriptor>,
    pub tooltip: Vec<EncodingDescriptor>,
    pub brush: Option<BrushRegion>,
    pub target_opacity: f64,
    pub points: Vec<MapPoint>,
    /// Points at full target opacity.
    pub highlighted_count: usize,
    pub boundaries: BoundaryLayerSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_point_omits_unset_channels() {
        let point = MapPoint {
            id: RowId::new(3),
            longitude: -0.12,
            latitude: 51.5,
            color_value: AttributeValue::from("fatal"),
            fill: Some("#E44848".to_string()),
            shape_value: None,
            size_value: None,
            opacity: 0.5,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["color_value"], "fatal");
        assert!(json.get("shape_value").is_none());
        assert!(json.get("size_value").is_none());
    }
}
