//! One explorer session.
//!
//! Every user gesture is a method call that mutates settings or selections.
//! Views are recomputed on demand in dependency order:
//!
//! ```text
//! working sample -> field kinds / category palettes -> row filters -> views
//! ```

use log::{debug, info};
use std::path::Path;
use std::sync::Arc;

use super::bar::compute_bar_view;
use super::boundaries::{boundary_options, BoundaryLayer};
use super::controls::{
    clamp_opacity, default_sample_size, field_options, opacity_control, sample_caption,
    sample_size_control,
};
use super::fields::{default_color_field, default_pie_field, FieldResolver};
use super::heatmap::compute_heatmap_view;
use super::map::{compute_map_view, MapEncodings};
use super::palette::{CategoryResolution, PaletteCache};
use super::pie::compute_pie_view;
use super::selection::{BrushRegion, PickRole, SelectionState};
use crate::api::{
    BarViewData, BoundaryLayerSpec, ControlsData, DashboardSettings, DatasetInfo,
    HeatmapViewData, LayoutData, LayoutVariant, MapViewData, PieViewData, SettingsUpdate,
};
use crate::config::{DefaultSettings, ExplorerConfig};
use crate::data::{dataset_cache, Dataset, WorkingSample};
use crate::error::ExplorerResult;
use crate::models::LATITUDE_FIELD;

/// Dataset, controls, sample and selections of one user.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    seed: u64,
    settings: DashboardSettings,
    sample: WorkingSample,
    fields: FieldResolver,
    palettes: PaletteCache,
    selections: SelectionState,
    default_color: String,
    default_pie: String,
}

impl Dashboard {
    /// Start a session over `dataset` with the configured initial controls.
    pub fn new(
        dataset: Arc<Dataset>,
        seed: u64,
        defaults: &DefaultSettings,
    ) -> ExplorerResult<Self> {
        let requested = defaults
            .sample_size
            .unwrap_or_else(|| default_sample_size(dataset.len()));
        let sample = WorkingSample::draw(Arc::clone(&dataset), requested, seed, 1);
        let fields = FieldResolver::new(&dataset);

        let columns = dataset.columns();
        let default_color =
            default_color_field(columns).unwrap_or_else(|| LATITUDE_FIELD.to_string());
        let default_pie = default_pie_field(columns).unwrap_or_else(|| default_color.clone());

        let color_field = fields.resolve_field(defaults.color_field.as_deref(), &default_color);
        let pie_field = fields.resolve_field(defaults.pie_field.as_deref(), &default_pie);
        let settings = DashboardSettings {
            sample_size: requested,
            point_opacity: clamp_opacity(defaults.point_opacity)
                .map_err(|e| e.with_operation("load_defaults"))?,
            boundary_layer: defaults
                .boundary_layer
                .parse::<BoundaryLayer>()
                .map_err(|e| e.with_operation("load_defaults"))?,
            shape_field: fields.resolve_optional(defaults.shape_field.as_deref()),
            size_field: fields.resolve_optional(defaults.size_field.as_deref()),
            layout: defaults
                .layout
                .parse::<LayoutVariant>()
                .map_err(|e| e.with_operation("load_defaults"))?,
            color_field,
            pie_field,
        };

        let selections = SelectionState::new(&settings.color_field, &settings.pie_field);
        Ok(Self {
            dataset,
            seed,
            settings,
            sample,
            fields,
            palettes: PaletteCache::new(),
            selections,
            default_color,
            default_pie,
        })
    }

    /// Load (or reuse) the configured dataset and start a session on it.
    pub fn from_config(config: &ExplorerConfig) -> ExplorerResult<Self> {
        let dataset = dataset_cache().load(Path::new(&config.dataset.path))?;
        info!(
            "Starting dashboard over {} records from {}",
            dataset.len(),
            config.dataset.path
        );
        Self::new(dataset, config.dataset.seed, &config.defaults)
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn sample(&self) -> &WorkingSample {
        &self.sample
    }

    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    pub fn fields(&self) -> &FieldResolver {
        &self.fields
    }

    // --- events ---

    /// Change the requested sample size; the sample is redrawn only when the
    /// effective size changes. Returns the effective size.
    pub fn set_sample_size(&mut self, requested: usize) -> usize {
        let total = self.dataset.len();
        let effective = WorkingSample::clamp_size(requested, total);
        self.settings.sample_size = requested;
        if effective == self.sample.len() {
            return effective;
        }

        let generation = self.sample.generation() + 1;
        self.sample = WorkingSample::draw(
            Arc::clone(&self.dataset),
            requested,
            self.seed,
            generation,
        );
        effective
    }

    pub fn set_opacity(&mut self, opacity: f64) -> ExplorerResult<f64> {
        self.settings.point_opacity = clamp_opacity(opacity)?;
        Ok(self.settings.point_opacity)
    }

    pub fn set_boundary_layer(&mut self, layer: &str) -> ExplorerResult<BoundaryLayer> {
        self.settings.boundary_layer = layer.parse()?;
        Ok(self.settings.boundary_layer)
    }

    /// Switch the map/bar color field. An active map/bar pick is cleared.
    pub fn set_color_field(&mut self, field: &str) -> &str {
        let resolved = self.fields.resolve_field(Some(field), &self.default_color);
        self.selections.bind_field(PickRole::MapBar, &resolved);
        self.settings.color_field = resolved;
        &self.settings.color_field
    }

    /// Switch the pie field. An active pie pick is cleared.
    pub fn set_pie_field(&mut self, field: &str) -> &str {
        let resolved = self.fields.resolve_field(Some(field), &self.default_pie);
        self.selections.bind_field(PickRole::Pie, &resolved);
        self.settings.pie_field = resolved;
        &self.settings.pie_field
    }

    pub fn set_shape_field(&mut self, field: Option<&str>) -> Option<&str> {
        self.settings.shape_field = self.fields.resolve_optional(field);
        self.settings.shape_field.as_deref()
    }

    pub fn set_size_field(&mut self, field: Option<&str>) -> Option<&str> {
        self.settings.size_field = self.fields.resolve_optional(field);
        self.settings.size_field.as_deref()
    }

    pub fn set_layout(&mut self, layout: &str) -> ExplorerResult<LayoutVariant> {
        self.settings.layout = layout.parse()?;
        Ok(self.settings.layout)
    }

    /// Apply a partial settings change, one event per present key.
    pub fn apply(&mut self, update: &SettingsUpdate) -> ExplorerResult<&DashboardSettings> {
        if let Some(size) = update.sample_size {
            self.set_sample_size(size);
        }
        if let Some(opacity) = update.point_opacity {
            self.set_opacity(opacity)?;
        }
        if let Some(layer) = update.boundary_layer.as_deref() {
            self.set_boundary_layer(layer)?;
        }
        if let Some(field) = update.color_field.as_deref() {
            self.set_color_field(field);
        }
        if let Some(field) = update.pie_field.as_deref() {
            self.set_pie_field(field);
        }
        if let Some(field) = update.shape_field.as_deref() {
            self.set_shape_field(Some(field));
        }
        if let Some(field) = update.size_field.as_deref() {
            self.set_size_field(Some(field));
        }
        if let Some(layout) = update.layout.as_deref() {
            self.set_layout(layout)?;
        }
        Ok(&self.settings)
    }

    /// Replace the map brush; `None` clears it.
    pub fn set_brush(&mut self, region: Option<BrushRegion>) -> ExplorerResult<()> {
        let region = region
            .map(BrushRegion::normalized)
            .transpose()
            .map_err(|e| e.with_operation("set_brush"))?;
        self.selections.set_brush(region);
        Ok(())
    }

    /// Click on a bar (map/bar role) or a slice (pie role).
    pub fn pick(&mut self, role: PickRole, value: Option<String>) {
        let field = match role {
            PickRole::MapBar => self.settings.color_field.clone(),
            PickRole::Pie => self.settings.pie_field.clone(),
        };
        debug!("Pick {} on '{}': {:?}", role, field, value);
        self.selections.set_pick(role, &field, value);
    }

    /// Double-click: nothing picked, bound field kept.
    pub fn clear_pick(&mut self, role: PickRole) {
        self.selections.clear_pick(role);
    }

    // --- renders ---

    pub fn caption(&self) -> String {
        sample_caption(self.dataset.len(), self.sample.len())
    }

    pub fn dataset_info(&self) -> DatasetInfo {
        DatasetInfo {
            summary: self.dataset.summary(),
            sample_size: self.sample.len(),
            sample_generation: self.sample.generation(),
            sampled: !self.sample.is_complete(),
            caption: self.caption(),
        }
    }

    pub fn controls(&self) -> ControlsData {
        ControlsData {
            sample_size: sample_size_control(self.dataset.len(), self.settings.sample_size),
            opacity: opacity_control(self.settings.point_opacity),
            boundary_layers: boundary_options(),
            boundary_layer: self.settings.boundary_layer.key().to_string(),
            fields: field_options(self.dataset.columns()),
            layouts: LayoutVariant::ALL.iter().map(|l| l.as_str().to_string()).collect(),
        }
    }

    pub fn boundaries(&self) -> BoundaryLayerSpec {
        self.settings.boundary_layer.spec()
    }

    fn resolution(&mut self, field: &str) -> Arc<CategoryResolution> {
        self.palettes.get_or_resolve(field, &self.sample)
    }

    pub fn map_view(&mut self) -> MapViewData {
        let color_field = self.settings.color_field.clone();
        let palette = self.resolution(&color_field);
        compute_map_view(
            self.sample.iter(),
            &self.fields,
            &palette,
            MapEncodings {
                color_field: &color_field,
                shape_field: self.settings.shape_field.as_deref(),
                size_field: self.settings.size_field.as_deref(),
                target_opacity: self.settings.point_opacity,
            },
            &self.selections,
            self.boundaries(),
        )
    }

    pub fn bar_view(&mut self) -> BarViewData {
        let color_field = self.settings.color_field.clone();
        let palette = self.resolution(&color_field);
        compute_bar_view(self.sample.iter(), &self.fields, &palette, &self.selections)
    }

    pub fn pie_view(&mut self) -> PieViewData {
        let pie_field = self.settings.pie_field.clone();
        let palette = self.resolution(&pie_field);
        compute_pie_view(self.sample.iter(), &self.fields, &palette, &self.selections)
    }

    pub fn heatmap_view(&self) -> HeatmapViewData {
        compute_heatmap_view(self.sample.iter(), self.dataset.columns(), &self.selections)
    }

    /// Every view of the current layout variant.
    pub fn layout(&mut self) -> LayoutData {
        let variant = self.settings.layout;
        LayoutData {
            variant,
            independent_color_scales: true,
            map: self.map_view(),
            bar: self.bar_view(),
            pie: self.pie_view(),
            heatmap: variant.includes_heatmap().then(|| self.heatmap_view()),
        }
    }
}
