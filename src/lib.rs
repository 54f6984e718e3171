//! RapiDoc UI - Settings binding and host integration
//!
//! A settings-binding layer for the RapiDoc API-documentation viewer: a
//! typed configuration object over a generic attribute map, rendered into a
//! static HTML page served from a web-application request pipeline.
//!
//! # Architecture
//!
//! - **Settings core**: [`RapiDocSettings`] exposes one typed accessor pair
//!   per viewer attribute, backed by an [`AttributeMap`](settings::AttributeMap)
//!   with documented defaults.
//! - **Rendering**: [`RapiDocSettings::render_page`] substitutes the
//!   JSON-serialized attribute map and a few string fields into the page
//!   template, per request.
//! - **Host adapters**: an axum router ([`server::create_app`]) and a plain
//!   tower service ([`server::RapiDocService`]) over the same core.
//!
//! # Examples
//!
//! ```rust
//! use rapidoc_ui::{RapiDocSettings, RequestContext, Theme, RAPIDOC_TEMPLATE};
//!
//! # fn example() -> rapidoc_ui::Result<()> {
//! let mut settings = RapiDocSettings::new();
//! settings.set_theme(Theme::Light);
//! settings.document_path = "/swagger/v1/swagger.json".to_string();
//!
//! let html = settings.render_page(RAPIDOC_TEMPLATE, &RequestContext::default())?;
//! assert!(html.contains("rapi-doc"));
//! # Ok(())
//! # }
//! ```
//!
//! Configure once at application start and treat the settings as immutable
//! afterwards; shared instances are safe for concurrent reads only.

pub mod config;
pub mod error;
pub mod render;
pub mod server;
pub mod settings;

pub use error::{Error, Result};
pub use render::{RAPIDOC_TEMPLATE, RequestContext};
pub use settings::{
    AttributeEnum, AttributeMap, DefaultSchemaTab, FontSize, Layout, NavItemSpacing, RapiDocSettings,
    RenderStyle, SchemaHideReadOnly, SchemaHideWriteOnly, SchemaStyle, SortEndpointsBy, Theme,
};
