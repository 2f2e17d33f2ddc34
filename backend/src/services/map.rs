//! Map view: every sample point, filtered by both picks and dimmed by the brush.

use log::debug;

use super::fields::FieldResolver;
use super::filter::{point_opacity, rows_for, ViewKind};
use super::palette::CategoryResolution;
use super::selection::SelectionState;
use crate::api::{BoundaryLayerSpec, FieldKind, MapPoint, MapViewData};
use crate::models::Record;
use crate::routes::map::MAP_PROJECTION;

/// Field choices and appearance for the point layer.
#[derive(Debug, Clone, Copy)]
pub struct MapEncodings<'a> {
    pub color_field: &'a str,
    pub shape_field: Option<&'a str>,
    pub size_field: Option<&'a str>,
    pub target_opacity: f64,
}

pub fn compute_map_view<'r, I>(
    records: I,
    fields: &FieldResolver,
    palette: &CategoryResolution,
    encodings: MapEncodings<'_>,
    state: &SelectionState,
    boundaries: BoundaryLayerSpec,
) -> MapViewData
where
    I: IntoIterator<Item = &'r Record>,
{
    let color = fields.color_encoding(encodings.color_field);
    let categorical = color.kind != FieldKind::Quantitative;
    let filter = rows_for(ViewKind::Map, state);
    let brush = state.brush();

    let points: Vec<MapPoint> = records
        .into_iter()
        .filter(|r| filter.matches(r))
        .map(|r| {
            let fill = if categorical {
                r.category(encodings.color_field)
                    .and_then(|key| palette.scale.color_for(&key).map(str::to_string))
            } else {
                None
            };
            MapPoint {
                id: r.id,
                longitude: r.longitude,
                latitude: r.latitude,
                color_value: r.value(encodings.color_field).clone(),
                fill,
                shape_value: encodings.shape_field.map(|f| r.value(f).clone()),
                size_value: encodings.size_field.map(|f| r.value(f).clone()),
                opacity: point_opacity(brush, r, encodings.target_opacity),
            }
        })
        .collect();

    let highlighted_count = match brush {
        Some(b) => points.iter().filter(|p| b.contains(p.longitude, p.latitude)).count(),
        None => points.len(),
    };
    debug!(
        "Map view: {} points, {} highlighted",
        points.len(),
        highlighted_count
    );

    MapViewData {
        projection: MAP_PROJECTION.to_string(),
        color,
        color_scale: categorical.then(|| palette.scale.clone()),
        shape: encodings.shape_field.map(|f| fields.shape_encoding(f)),
        size: encodings.size_field.map(|f| fields.size_encoding(f)),
        tooltip: fields.map_tooltips(
            encodings.color_field,
            encodings.shape_field,
            encodings.size_field,
        ),
        brush: brush.copied(),
        target_opacity: encodings.target_opacity,
        points,
        highlighted_count,
        boundaries,
    }
}
