//! Filter composition for the linked views.
//!
//! Each view is filtered by the conjunction of the selections listed for it
//! below. An unset selection passes every row.
//!
//! | view    | brush        | map/bar pick | pie pick |
//! |---------|--------------|--------------|----------|
//! | map     | opacity only | yes          | yes      |
//! | bar     | yes          | no           | yes      |
//! | pie     | yes          | yes          | no       |
//! | heatmap | yes          | yes          | yes      |
//!
//! A view is never filtered by its own pick.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::selection::{BrushRegion, CategoricalPick, PickRole, SelectionState};
use crate::error::{ErrorContext, ExplorerError};
use crate::models::Record;

/// Opacity for map points outside an active brush.
pub const DIMMED_OPACITY: f64 = 0.05;

/// The four dependent views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Map,
    Bar,
    Pie,
    Heatmap,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Map,
        ViewKind::Bar,
        ViewKind::Pie,
        ViewKind::Heatmap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Map => "map",
            ViewKind::Bar => "bar",
            ViewKind::Pie => "pie",
            ViewKind::Heatmap => "heatmap",
        }
    }

    /// Pick owned by this view, if any.
    pub fn own_pick(&self) -> Option<PickRole> {
        match self {
            ViewKind::Bar => Some(PickRole::MapBar),
            ViewKind::Pie => Some(PickRole::Pie),
            ViewKind::Map | ViewKind::Heatmap => None,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ExplorerError::not_found_with_context(
                    format!("Unknown view: {}", s),
                    ErrorContext::new("parse_view").with_entity("view"),
                )
            })
    }
}

/// Which selections take part in a view's row filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPlan {
    pub brush: bool,
    pub map_bar_pick: bool,
    pub pie_pick: bool,
}

impl FilterPlan {
    pub fn for_view(view: ViewKind) -> Self {
        let own = view.own_pick();
        Self {
            // the map brush only dims points
            brush: view != ViewKind::Map,
            map_bar_pick: own != Some(PickRole::MapBar),
            pie_pick: own != Some(PickRole::Pie),
        }
    }

    pub fn includes_pick(&self, role: PickRole) -> bool {
        match role {
            PickRole::MapBar => self.map_bar_pick,
            PickRole::Pie => self.pie_pick,
        }
    }
}

/// Conjunction of the selections that apply to one view.
#[derive(Debug, Clone)]
pub struct RowFilter<'a> {
    brush: Option<&'a BrushRegion>,
    picks: Vec<&'a CategoricalPick>,
}

impl<'a> RowFilter<'a> {
    pub fn matches(&self, record: &Record) -> bool {
        self.brush.map_or(true, |b| b.contains_record(record))
            && self.picks.iter().all(|p| p.matches(record))
    }
}

/// Row predicate for `view` under the current selections.
pub fn rows_for(view: ViewKind, state: &SelectionState) -> RowFilter<'_> {
    let plan = FilterPlan::for_view(view);
    let brush = if plan.brush { state.brush() } else { None };
    let picks = [PickRole::MapBar, PickRole::Pie]
        .into_iter()
        .filter(|role| plan.includes_pick(*role))
        .map(|role| state.pick(role))
        .filter(|pick| pick.is_active())
        .collect();

    RowFilter { brush, picks }
}

/// Map point opacity: the target inside the brush (or with no brush), dimmed outside.
pub fn point_opacity(brush: Option<&BrushRegion>, record: &Record, target: f64) -> f64 {
    match brush {
        Some(b) if !b.contains_record(record) => DIMMED_OPACITY,
        _ => target,
    }
}
