use serde::{Deserialize, Serialize};

/// Stroke and fill for one geometry layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// `None` renders the shapes unfilled.
    pub fill: Option<String>,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Geometry source reference for the map background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLayerSpec {
    pub url: String,
    /// TopoJSON object key of the selected administrative layer.
    pub layer: String,
    pub label: String,
    pub outline_feature: String,
    pub outline_style: LayerStyle,
    pub layer_style: LayerStyle,
}

/// One entry of the boundary layer selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryOption {
    pub key: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfilled_style_serializes_null_fill() {
        let style = LayerStyle {
            fill: None,
            stroke: "white".to_string(),
            stroke_width: 0.7,
        };
        let json = serde_json::to_value(&style).unwrap();
        assert!(json["fill"].is_null());
        assert_eq!(json["stroke_width"], 0.7);
    }
}
