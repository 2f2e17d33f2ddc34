//! Pie view: share of each category of the pie field after its filter.

use super::bar::count_categories;
use super::fields::FieldResolver;
use super::filter::{rows_for, ViewKind};
use super::palette::CategoryResolution;
use super::selection::{PickRole, SelectionState};
use crate::api::{EncodingDescriptor, PieSlice, PieViewData};
use crate::models::Record;

pub const PIE_SELECTED_OPACITY: f64 = 1.0;
pub const PIE_UNSELECTED_OPACITY: f64 = 0.4;

/// `count / total`, or 0 when there is nothing to divide.
pub fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

pub fn compute_pie_view<'r, I>(
    records: I,
    fields: &FieldResolver,
    palette: &CategoryResolution,
    state: &SelectionState,
) -> PieViewData
where
    I: IntoIterator<Item = &'r Record>,
{
    let field = palette.field.as_str();
    let filter = rows_for(ViewKind::Pie, state);
    let counts = count_categories(field, records, |r| filter.matches(r));

    let per_category: Vec<(&String, usize)> = palette
        .domain
        .iter()
        .map(|c| (c, counts.get(c).copied().unwrap_or(0)))
        .collect();
    let total: usize = per_category.iter().map(|(_, n)| n).sum();

    let pick = state.pick(PickRole::Pie);
    let slices = per_category
        .into_iter()
        .map(|(category, count)| {
            let highlighted = pick.highlights(category);
            PieSlice {
                category: category.clone(),
                count,
                percent: share(count, total),
                color: palette.scale.color_for(category).map(str::to_string),
                opacity: if highlighted {
                    PIE_SELECTED_OPACITY
                } else {
                    PIE_UNSELECTED_OPACITY
                },
                selected: pick.is_active() && highlighted,
            }
        })
        .collect();

    PieViewData {
        field: field.to_string(),
        encoding: EncodingDescriptor::from_field(&fields.bind_categorical(field)),
        color_scale: palette.scale.clone(),
        tooltip: fields.pie_tooltips(field),
        slices,
        picked: pick.value.clone(),
        total,
    }
}
