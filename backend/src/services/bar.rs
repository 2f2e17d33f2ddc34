//! Bar view: counts per category of the map/bar color field.
//!
//! Bars come from the unfiltered sample's category domain, so the axis never
//! changes while the user brushes or picks. Lengths are filtered counts.

use std::collections::HashMap;

use super::fields::FieldResolver;
use super::filter::{rows_for, ViewKind};
use super::palette::CategoryResolution;
use super::selection::{PickRole, SelectionState};
use crate::api::{BarEntry, BarViewData, EncodingDescriptor};
use crate::models::Record;

pub const BAR_SELECTED_OPACITY: f64 = 1.0;
pub const BAR_UNSELECTED_OPACITY: f64 = 0.35;

/// Filtered count per category key.
pub(crate) fn count_categories<'r, I, F>(field: &str, records: I, keep: F) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'r Record>,
    F: Fn(&Record) -> bool,
{
    let mut counts = HashMap::new();
    for record in records {
        if !keep(record) {
            continue;
        }
        if let Some(key) = record.category(field) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

pub fn compute_bar_view<'r, I>(
    records: I,
    fields: &FieldResolver,
    palette: &CategoryResolution,
    state: &SelectionState,
) -> BarViewData
where
    I: IntoIterator<Item = &'r Record>,
{
    let field = palette.field.as_str();
    let filter = rows_for(ViewKind::Bar, state);
    let counts = count_categories(field, records, |r| filter.matches(r));

    let pick = state.pick(PickRole::MapBar);
    let bars: Vec<BarEntry> = palette
        .domain
        .iter()
        .map(|category| {
            let highlighted = pick.highlights(category);
            BarEntry {
                category: category.clone(),
                count: counts.get(category).copied().unwrap_or(0),
                color: palette.scale.color_for(category).map(str::to_string),
                opacity: if highlighted {
                    BAR_SELECTED_OPACITY
                } else {
                    BAR_UNSELECTED_OPACITY
                },
                selected: pick.is_active() && highlighted,
            }
        })
        .collect();

    BarViewData {
        field: field.to_string(),
        encoding: EncodingDescriptor::from_field(&fields.bind_categorical(field)),
        color_scale: palette.scale.clone(),
        tooltip: fields.bar_tooltips(field),
        total: bars.iter().map(|b| b.count).sum(),
        picked: pick.value.clone(),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RowId;
    use crate::data::{Dataset, WorkingSample};
    use crate::models::AttributeValue;
    use crate::services::palette::resolve;
    use crate::services::selection::BrushRegion;
    use std::sync::Arc;

    fn sample() -> WorkingSample {
        let rows = [
            (51.5, -0.1, "fatal", "Monday"),
            (51.6, -0.2, "slight", "Monday"),
            (53.4, -2.2, "slight", "Tuesday"),
            (55.9, -3.2, "serious", "Sunday"),
        ];
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, (lat, lon, sev, day))| {
                let mut attrs = HashMap::new();
                attrs.insert("accident_severity".to_string(), AttributeValue::from(*sev));
                attrs.insert("day_of_week".to_string(), AttributeValue::from(*day));
                Record::new(RowId::new(i), *lat, *lon, attrs)
            })
            .collect();
        let columns = ["accident_severity", "day_of_week", "latitude", "longitude"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        WorkingSample::draw(Arc::new(Dataset::from_records(columns, records)), 1_000, 42, 1)
    }

    fn counts(view: &BarViewData) -> Vec<(String, usize)> {
        view.bars.iter().map(|b| (b.category.clone(), b.count)).collect()
    }

    #[test]
    fn test_domain_fixed_under_brush() {
        let sample = sample();
        let fields = FieldResolver::new(sample.dataset());
        let palette = resolve("accident_severity", sample.iter());
        let mut state = SelectionState::new("accident_severity", "day_of_week");
        state.set_brush(Some(BrushRegion::new(-1.0, 0.0, 51.0, 52.0)));

        let view = compute_bar_view(sample.iter(), &fields, &palette, &state);
        assert_eq!(
            counts(&view),
            vec![
                ("slight".to_string(), 1),
                ("serious".to_string(), 0),
                ("fatal".to_string(), 1)
            ]
        );
        assert_eq!(view.total, 2);
    }

    #[test]
    fn test_own_pick_changes_opacity_not_counts() {
        let sample = sample();
        let fields = FieldResolver::new(sample.dataset());
        let palette = resolve("accident_severity", sample.iter());
        let mut state = SelectionState::new("accident_severity", "day_of_week");
        let before = counts(&compute_bar_view(sample.iter(), &fields, &palette, &state));

        state.set_pick(PickRole::MapBar, "accident_severity", Some("fatal".to_string()));
        let view = compute_bar_view(sample.iter(), &fields, &palette, &state);
        assert_eq!(counts(&view), before);
        let fatal = view.bars.iter().find(|b| b.category == "fatal").unwrap();
        assert!(fatal.selected);
        assert_eq!(fatal.opacity, BAR_SELECTED_OPACITY);
        assert_eq!(fatal.color.as_deref(), Some("#E44848"));
        let slight = view.bars.iter().find(|b| b.category == "slight").unwrap();
        assert_eq!(slight.opacity, BAR_UNSELECTED_OPACITY);
        assert_eq!(view.picked.as_deref(), Some("fatal"));
    }

    #[test]
    fn test_pie_pick_filters_bars() {
        let sample = sample();
        let fields = FieldResolver::new(sample.dataset());
        let palette = resolve("accident_severity", sample.iter());
        let mut state = SelectionState::new("accident_severity", "day_of_week");
        state.set_pick(PickRole::Pie, "day_of_week", Some("Monday".to_string()));

        let view = compute_bar_view(sample.iter(), &fields, &palette, &state);
        assert_eq!(
            counts(&view),
            vec![
                ("slight".to_string(), 1),
                ("serious".to_string(), 0),
                ("fatal".to_string(), 1)
            ]
        );
        assert!(view.bars.iter().all(|b| b.opacity == BAR_SELECTED_OPACITY));
    }
}
