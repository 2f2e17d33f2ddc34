//! HTTP handlers for the REST API.
//!
//! Each handler is one dashboard event or one render. Renders run on the
//! blocking pool since a large sample makes them CPU bound.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    BarViewData, BoundaryLayerSpec, BrushUpdate, ControlsData, DashboardSettings, DatasetInfo,
    HealthResponse, HeatmapViewData, LayoutData, MapViewData, PickUpdate, PieViewData,
    SelectionState, SettingsUpdate,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{Dashboard, PickRole};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run a render against the session on the blocking pool.
async fn render<T, F>(state: AppState, f: F) -> HandlerResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Dashboard) -> T + Send + 'static,
{
    let data = tokio::task::spawn_blocking(move || {
        let mut dashboard = state.dashboard.write();
        f(&mut dashboard)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(data))
}

fn parse_role(role: &str) -> Result<PickRole, AppError> {
    Ok(role.parse::<PickRole>()?)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let records = state.dashboard.read().dataset().len();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records,
    }))
}

// =============================================================================
// Dataset, controls and settings
// =============================================================================

/// GET /v1/dataset
pub async fn get_dataset(State(state): State<AppState>) -> HandlerResult<DatasetInfo> {
    Ok(Json(state.dashboard.read().dataset_info()))
}

/// GET /v1/controls
pub async fn get_controls(State(state): State<AppState>) -> HandlerResult<ControlsData> {
    Ok(Json(state.dashboard.read().controls()))
}

/// GET /v1/settings
pub async fn get_settings(State(state): State<AppState>) -> HandlerResult<DashboardSettings> {
    Ok(Json(state.dashboard.read().settings().clone()))
}

/// PUT /v1/settings
///
/// Partial update. A changed sample size redraws the working sample.
pub async fn put_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> HandlerResult<DashboardSettings> {
    if update.is_empty() {
        return Err(AppError::BadRequest("Settings update has no fields".to_string()));
    }
    let settings = render(state, move |dashboard| dashboard.apply(&update).cloned())
        .await?
        .0?;
    Ok(Json(settings))
}

/// GET /v1/boundaries
pub async fn get_boundaries(State(state): State<AppState>) -> HandlerResult<BoundaryLayerSpec> {
    Ok(Json(state.dashboard.read().boundaries()))
}

// =============================================================================
// Selections
// =============================================================================

/// GET /v1/selections
pub async fn get_selections(State(state): State<AppState>) -> HandlerResult<SelectionState> {
    Ok(Json(state.dashboard.read().selections().clone()))
}

/// PUT /v1/selections/brush
pub async fn put_brush(
    State(state): State<AppState>,
    Json(body): Json<BrushUpdate>,
) -> HandlerResult<SelectionState> {
    let mut dashboard = state.dashboard.write();
    dashboard.set_brush(body.region)?;
    Ok(Json(dashboard.selections().clone()))
}

/// DELETE /v1/selections/brush
pub async fn delete_brush(State(state): State<AppState>) -> HandlerResult<SelectionState> {
    let mut dashboard = state.dashboard.write();
    dashboard.set_brush(None)?;
    Ok(Json(dashboard.selections().clone()))
}

/// PUT /v1/selections/{role}
///
/// Click on a bar or slice; a null value clears the pick.
pub async fn put_pick(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Json(body): Json<PickUpdate>,
) -> HandlerResult<SelectionState> {
    let role = parse_role(&role)?;
    let mut dashboard = state.dashboard.write();
    dashboard.pick(role, body.value);
    Ok(Json(dashboard.selections().clone()))
}

/// DELETE /v1/selections/{role}
///
/// Double-click clear gesture.
pub async fn delete_pick(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> HandlerResult<SelectionState> {
    let role = parse_role(&role)?;
    let mut dashboard = state.dashboard.write();
    dashboard.clear_pick(role);
    Ok(Json(dashboard.selections().clone()))
}

// =============================================================================
// Views
// =============================================================================

/// GET /v1/views/map
pub async fn get_map_view(State(state): State<AppState>) -> HandlerResult<MapViewData> {
    render(state, Dashboard::map_view).await
}

/// GET /v1/views/bar
pub async fn get_bar_view(State(state): State<AppState>) -> HandlerResult<BarViewData> {
    render(state, Dashboard::bar_view).await
}

/// GET /v1/views/pie
pub async fn get_pie_view(State(state): State<AppState>) -> HandlerResult<PieViewData> {
    render(state, Dashboard::pie_view).await
}

/// GET /v1/views/heatmap
pub async fn get_heatmap_view(State(state): State<AppState>) -> HandlerResult<HeatmapViewData> {
    render(state, |dashboard| dashboard.heatmap_view()).await
}

/// GET /v1/layout
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<LayoutData> {
    render(state, Dashboard::layout).await
}
