//! # Accident Explorer
//!
//! Linked multi-view exploration engine for geocoded accident records.
//!
//! A map of accident locations and three summary charts (bar, pie and a
//! day/hour heatmap) cross-filter each other through three selections: a
//! spatial brush on the map and two independent categorical picks. This crate
//! holds the rules for how those selections combine per view, the category
//! ordering and palette logic that keeps colors consistent across charts, and
//! an HTTP service that serves render-ready view data to a browser front end.
//!
//! ## Architecture
//!
//! - [`data`]: dataset loading, caching and the seeded working sample
//! - [`models`]: records, attribute values and field descriptors
//! - [`services`]: selection state, filter composition, palettes and views
//! - [`routes`]: per-view DTO types
//! - [`api`]: flat re-export of the DTOs and identifiers
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: TOML configuration with environment overrides

// Errors carry a structured context for logging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ErrorContext, ExplorerError, ExplorerResult};
