//! Selection state shared by all linked views.
//!
//! There are exactly three live selections: the map brush and two categorical
//! picks, one for the map/bar color field and one for the pie field. Views
//! never look at each other; they read and write selections only through
//! [`SelectionState`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ErrorContext, ExplorerError, ExplorerResult};
use crate::models::Record;

/// Owner of a categorical pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickRole {
    /// Picked by clicking the bar chart; bound to the map color field.
    MapBar,
    /// Picked by clicking a pie slice; bound to the pie field.
    Pie,
}

impl PickRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickRole::MapBar => "map_bar",
            PickRole::Pie => "pie",
        }
    }
}

impl fmt::Display for PickRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickRole {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "map_bar" | "map-bar" | "mapbar" | "bar" => Ok(Self::MapBar),
            "pie" => Ok(Self::Pie),
            _ => Err(ExplorerError::not_found_with_context(
                format!("Unknown selection role: {}", s),
                ErrorContext::new("parse_role").with_entity("selection"),
            )),
        }
    }
}

/// Closed lon/lat rectangle drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRegion {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl BrushRegion {
    /// Region spanning two corners, in any drag direction.
    pub fn new(lon_a: f64, lon_b: f64, lat_a: f64, lat_b: f64) -> Self {
        Self {
            lon_min: lon_a.min(lon_b),
            lon_max: lon_a.max(lon_b),
            lat_min: lat_a.min(lat_b),
            lat_max: lat_a.max(lat_b),
        }
    }

    /// Reorder bounds and reject non-finite ones.
    pub fn normalized(self) -> ExplorerResult<Self> {
        let bounds = [self.lon_min, self.lon_max, self.lat_min, self.lat_max];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(ExplorerError::validation_with_context(
                "Brush bounds must be finite numbers",
                ErrorContext::new("set_brush").with_entity("brush"),
            ));
        }
        Ok(Self::new(self.lon_min, self.lon_max, self.lat_min, self.lat_max))
    }

    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&longitude)
            && (self.lat_min..=self.lat_max).contains(&latitude)
    }

    pub fn contains_record(&self, record: &Record) -> bool {
        self.contains(record.longitude, record.latitude)
    }
}

/// Single-select click selection on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalPick {
    pub field: String,
    /// `None` means nothing is picked and every row passes.
    pub value: Option<String>,
}

impl CategoricalPick {
    pub fn empty(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    /// Row predicate; a null cell never matches an active pick.
    pub fn matches(&self, record: &Record) -> bool {
        match &self.value {
            None => true,
            Some(picked) => record.category(&self.field).as_deref() == Some(picked.as_str()),
        }
    }

    /// Whether `category` is the highlighted one (all are when nothing is picked).
    pub fn highlights(&self, category: &str) -> bool {
        self.value.as_deref().map_or(true, |v| v == category)
    }
}

/// The brush and both picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    brush: Option<BrushRegion>,
    map_bar: CategoricalPick,
    pie: CategoricalPick,
}

impl SelectionState {
    /// Empty selections bound to the initial fields.
    pub fn new(map_bar_field: impl Into<String>, pie_field: impl Into<String>) -> Self {
        Self {
            brush: None,
            map_bar: CategoricalPick::empty(map_bar_field),
            pie: CategoricalPick::empty(pie_field),
        }
    }

    pub fn brush(&self) -> Option<&BrushRegion> {
        self.brush.as_ref()
    }

    /// Replace the brush; `None` clears it.
    pub fn set_brush(&mut self, region: Option<BrushRegion>) {
        self.brush = region;
    }

    pub fn pick(&self, role: PickRole) -> &CategoricalPick {
        match role {
            PickRole::MapBar => &self.map_bar,
            PickRole::Pie => &self.pie,
        }
    }

    fn pick_mut(&mut self, role: PickRole) -> &mut CategoricalPick {
        match role {
            PickRole::MapBar => &mut self.map_bar,
            PickRole::Pie => &mut self.pie,
        }
    }

    /// Set the pick for `role` on `field`; the previous pick is replaced whole.
    pub fn set_pick(&mut self, role: PickRole, field: &str, value: Option<String>) {
        let pick = self.pick_mut(role);
        pick.field = field.to_string();
        pick.value = value;
    }

    /// Rebind `role` to `field`. A pick on a different field is cleared.
    ///
    /// Returns true when an active pick was dropped.
    pub fn bind_field(&mut self, role: PickRole, field: &str) -> bool {
        let pick = self.pick_mut(role);
        if pick.field == field {
            return false;
        }
        let dropped = pick.value.take().is_some();
        pick.field = field.to_string();
        if dropped {
            debug!("Cleared {} pick after switching field to '{}'", role, field);
        }
        dropped
    }

    /// Clear gesture: nothing picked, bound field unchanged.
    pub fn clear_pick(&mut self, role: PickRole) {
        self.pick_mut(role).value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RowId;
    use crate::models::AttributeValue;
    use std::collections::HashMap;

    fn record(lat: f64, lon: f64, severity: Option<&str>) -> Record {
        let mut attrs = HashMap::new();
        if let Some(s) = severity {
            attrs.insert("accident_severity".to_string(), AttributeValue::from(s));
        }
        Record::new(RowId::new(0), lat, lon, attrs)
    }

    #[test]
    fn test_brush_is_closed_and_direction_independent() {
        let brush = BrushRegion::new(-1.0, -2.0, 53.0, 52.0);
        assert_eq!(brush.lon_min, -2.0);
        assert_eq!(brush.lat_max, 53.0);
        assert!(brush.contains(-2.0, 52.0));
        assert!(brush.contains(-1.5, 52.5));
        assert!(!brush.contains(-0.5, 52.5));
    }

    #[test]
    fn test_non_finite_brush_rejected() {
        let brush = BrushRegion {
            lon_min: f64::NAN,
            lon_max: 0.0,
            lat_min: 50.0,
            lat_max: 51.0,
        };
        assert!(brush.normalized().is_err());
    }

    #[test]
    fn test_switching_field_clears_pick() {
        let mut state = SelectionState::new("accident_severity", "day_of_week");
        state.set_pick(PickRole::MapBar, "accident_severity", Some("fatal".to_string()));
        assert!(state.pick(PickRole::MapBar).is_active());

        let dropped = state.bind_field(PickRole::MapBar, "weather_conditions");
        assert!(dropped);
        let pick = state.pick(PickRole::MapBar);
        assert_eq!(pick.field, "weather_conditions");
        assert_eq!(pick.value, None);
    }

    #[test]
    fn test_rebinding_same_field_keeps_pick() {
        let mut state = SelectionState::new("accident_severity", "day_of_week");
        state.set_pick(PickRole::Pie, "day_of_week", Some("Monday".to_string()));
        assert!(!state.bind_field(PickRole::Pie, "day_of_week"));
        assert_eq!(state.pick(PickRole::Pie).value.as_deref(), Some("Monday"));
    }

    #[test]
    fn test_clear_keeps_bound_field() {
        let mut state = SelectionState::new("accident_severity", "day_of_week");
        state.set_pick(PickRole::Pie, "day_of_week", Some("Friday".to_string()));
        state.clear_pick(PickRole::Pie);
        assert_eq!(state.pick(PickRole::Pie), &CategoricalPick::empty("day_of_week"));
    }

    #[test]
    fn test_picks_are_independent() {
        let mut state = SelectionState::new("accident_severity", "day_of_week");
        state.set_pick(PickRole::MapBar, "accident_severity", Some("fatal".to_string()));
        assert!(!state.pick(PickRole::Pie).is_active());
    }

    #[test]
    fn test_pick_matching() {
        let pick = CategoricalPick {
            field: "accident_severity".to_string(),
            value: Some("fatal".to_string()),
        };
        assert!(pick.matches(&record(51.0, -1.0, Some("fatal"))));
        assert!(!pick.matches(&record(51.0, -1.0, Some("slight"))));
        assert!(!pick.matches(&record(51.0, -1.0, None)));
        assert!(CategoricalPick::empty("accident_severity").matches(&record(51.0, -1.0, None)));
        assert!(pick.highlights("fatal"));
        assert!(!pick.highlights("slight"));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("map_bar".parse::<PickRole>().unwrap(), PickRole::MapBar);
        assert_eq!("PIE".parse::<PickRole>().unwrap(), PickRole::Pie);
        assert!("heatmap".parse::<PickRole>().is_err());
    }
}
