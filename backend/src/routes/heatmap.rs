use serde::{Deserialize, Serialize};

/// Count for one day and hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub day: String,
    pub hour: u8,
    pub count: usize,
}

/// Day-of-week by hour-of-day grid, or a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HeatmapViewData {
    Available {
        day_field: String,
        time_field: String,
        days: Vec<String>,
        hours: Vec<u8>,
        cells: Vec<HeatmapCell>,
        max_count: usize,
    },
    Unavailable {
        message: String,
    },
}

impl HeatmapViewData {
    pub fn is_available(&self) -> bool {
        matches!(self, HeatmapViewData::Available { .. })
    }

    /// Count of one cell; `None` when unavailable or out of range.
    pub fn cell(&self, day: &str, hour: u8) -> Option<usize> {
        match self {
            HeatmapViewData::Available { cells, .. } => cells
                .iter()
                .find(|c| c.day == day && c.hour == hour)
                .map(|c| c.count),
            HeatmapViewData::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_tagged() {
        let view = HeatmapViewData::Unavailable {
            message: "no time column".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert!(!view.is_available());
        assert_eq!(view.cell("Monday", 8), None);
    }
}
