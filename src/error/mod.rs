//! Error handling for the RapiDoc UI crate
//!
//! This module defines error types and handling patterns used throughout the library.

pub mod types;

pub use types::{Error, Result};
