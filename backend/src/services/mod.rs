//! Linked-view engine.
//!
//! Selections live in [`selection::SelectionState`]; [`filter`] turns them
//! into one row predicate per view; the view modules compute render-ready
//! data from the working sample; [`dashboard::Dashboard`] runs the whole
//! graph for one session.

pub mod bar;
pub mod boundaries;
pub mod controls;
pub mod dashboard;
pub mod fields;
pub mod filter;
pub mod heatmap;
pub mod map;
pub mod palette;
pub mod pie;
pub mod selection;

pub use bar::compute_bar_view;
pub use dashboard::Dashboard;
pub use filter::{rows_for, RowFilter, ViewKind};
pub use heatmap::compute_heatmap_view;
pub use map::compute_map_view;
pub use palette::{resolve, PaletteCache};
pub use pie::compute_pie_view;
pub use selection::{BrushRegion, CategoricalPick, PickRole, SelectionState};
