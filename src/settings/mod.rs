//! Typed settings surface for the RapiDoc viewer
//!
//! This module contains the attribute store backing all settings, the closed
//! enumerations understood by the viewer, and the typed accessor surface.

pub mod attributes;
pub mod enums;
pub mod rapidoc;

pub use attributes::AttributeMap;
pub use enums::{
    AttributeEnum, DefaultSchemaTab, FontSize, Layout, NavItemSpacing, RenderStyle, SchemaHideReadOnly,
    SchemaHideWriteOnly, SchemaStyle, SortEndpointsBy, Theme,
};
pub use rapidoc::RapiDocSettings;
