use serde::{Deserialize, Serialize};

use crate::api::{ColorScale, EncodingDescriptor};

/// One slice per category of the pie field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub category: String,
    pub count: usize,
    /// Share of the filtered total in `[0, 1]`.
    pub percent: f64,
    pub color: Option<String>,
    pub opacity: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieViewData {
    pub field: String,
    pub encoding: EncodingDescriptor,
    pub color_scale: ColorScale,
    pub tooltip: Vec<EncodingDescriptor>,
    pub slices: Vec<PieSlice>,
    pub picked: Option<String>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_slice_debug() {
        let slice = PieSlice {
            category: "Monday".to_string(),
            count: 4,
            percent: 0.25,
            color: None,
            opacity: 1.0,
            selected: false,
        };
        assert!(format!("{:?}", slice).contains("PieSlice"));
    }
}
