//! Configuration management for the sample application
//!
//! This module handles loading and merging configuration for the demo
//! server from defaults, a TOML file, and environment variables.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;
