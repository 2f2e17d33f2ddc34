//! HTTP server module for the explorer.
//!
//! This module provides an axum-based HTTP server that exposes one dashboard
//! session as a JSON API. Every request is one event against the session.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │  RwLock<Dashboard>
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dashboard session (services/)                            │
//! │  - Settings and selection events                          │
//! │  - View recomputation                                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Data layer (data/)                                       │
//! │  - Dataset cache and working sample                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
