use serde::{Deserialize, Serialize};

use crate::api::{BoundaryOption, DatasetSummary};

/// Integer slider bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSizeControl {
    pub min: usize,
    pub max: usize,
    pub step: usize,
    pub default: usize,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpacityControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub value: f64,
}

/// Choices offered by each field selector.
///
/// Shape and size lists start with `(none)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    pub color: Vec<String>,
    pub pie: Vec<String>,
    pub shape: Vec<String>,
    pub size: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsData {
    pub sample_size: SampleSizeControl,
    pub opacity: OpacityControl,
    pub boundary_layers: Vec<BoundaryOption>,
    pub boundary_layer: String,
    pub fields: FieldOptions,
    pub layouts: Vec<String>,
}

/// Dataset summary plus the sampling caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub summary: DatasetSummary,
    pub sample_size: usize,
    pub sample_generation: u64,
    pub sampled: bool,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_options_serialize() {
        let options = FieldOptions {
            color: vec!["accident_severity".to_string()],
            pie: vec!["day_of_week".to_string()],
            shape: vec!["(none)".to_string(), "road_type".to_string()],
            size: vec!["(none)".to_string()],
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["shape"][0], "(none)");
        assert_eq!(json["size"].as_array().map(Vec::len), Some(1));
    }
}
