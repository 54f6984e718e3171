//! Host-framework integration for serving the documentation page
//!
//! Two thin adapters over the framework-independent settings/render core:
//! an axum `Router` for applications already on axum, and a plain `tower`
//! service for any other `http`-based host.

pub mod app;
pub mod handlers;
pub mod service;

pub use app::{AppState, create_app};
pub use service::RapiDocService;
