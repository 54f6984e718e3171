//! Typed accessor surface over the viewer attribute map
//!
//! [`RapiDocSettings`] is the configuration object the host application
//! mutates at startup and the render step reads on every request. Each
//! accessor pair owns one attribute key; getters fall back to the documented
//! default when the key is absent.

use crate::error::Result;
use crate::settings::attributes::AttributeMap;
use crate::settings::enums::{
    DefaultSchemaTab, FontSize, Layout, NavItemSpacing, RenderStyle, SchemaHideReadOnly,
    SchemaHideWriteOnly, SchemaStyle, SortEndpointsBy, Theme,
};

/// Default font stack for regular text
pub const DEFAULT_REGULAR_FONT: &str = "'Open Sans', Avenir, 'Segoe UI', Arial, sans-serif";

/// Default font stack for mono-spaced text
pub const DEFAULT_MONO_FONT: &str = "Monaco, 'Andale Mono', 'Roboto Mono', 'Consolas' monospace";

/// Settings for the embedded RapiDoc documentation viewer
///
/// Construct once at application start, mutate before accepting traffic,
/// then share behind an `Arc`. Concurrent reads are safe; concurrent writes
/// are not synchronized, so mutation after startup is a caller obligation
/// to avoid.
#[derive(Debug, Clone)]
pub struct RapiDocSettings {
    /// Title of the served HTML page
    pub document_title: String,

    /// Additional content placed verbatim in the page head
    pub custom_head_content: String,

    /// Inline CSS placed in a `<style>` block
    pub custom_inline_styles: Option<String>,

    /// Stylesheet link, resolved against the request base path when relative
    pub custom_stylesheet_path: Option<String>,

    /// Script link, resolved against the request base path when relative
    pub custom_javascript_path: Option<String>,

    /// URL of the OpenAPI document the viewer loads
    pub document_path: String,

    /// Route under which the documentation page is served
    pub path: String,

    attributes: AttributeMap,
}

impl Default for RapiDocSettings {
    fn default() -> Self {
        let mut attributes = AttributeMap::new();
        attributes.set_bool("update-route", true);
        attributes.set_bool("sort-tags", false);
        attributes.set_enum("sort-endpoints-by", SortEndpointsBy::Path);
        attributes.set_bool("fill-request-fields-with-example", true);
        attributes.set_bool("persist-auth", false);
        attributes.set_enum("theme", Theme::Dark);
        attributes.set_string("regular-font", DEFAULT_REGULAR_FONT);
        attributes.set_string("mono-font", DEFAULT_MONO_FONT);
        attributes.set_enum("font-size", FontSize::Default);
        attributes.set_string("show-method-in-nav-bar", "false");
        attributes.set_bool("use-path-in-nav-bar", false);
        attributes.set_string("nav-active-item-marker", "left-bar");
        attributes.set_enum("nav-item-spacing", NavItemSpacing::Default);
        attributes.set_string("on-nav-tag-click", "expand-collapse");
        attributes.set_enum("layout", Layout::Row);
        attributes.set_enum("render-style", RenderStyle::Read);
        attributes.set_string("response-area-height", "300px");
        attributes.set_bool("show-info", true);
        attributes.set_bool("info-description-headings-in-navbar", false);
        attributes.set_bool("show-components", false);
        attributes.set_bool("show-header", true);
        attributes.set_bool("allow-authentication", true);
        attributes.set_bool("allow-spec-url-load", false);
        attributes.set_bool("allow-spec-file-load", false);
        attributes.set_bool("allow-spec-file-download", true);
        attributes.set_bool("allow-search", true);
        attributes.set_bool("allow-advanced-search", true);
        attributes.set_bool("allow-try", true);
        attributes.set_bool("show-curl-before-try", false);
        attributes.set_bool("allow-server-selection", false);
        attributes.set_bool("allow-schema-description-expand-toggle", true);
        attributes.set_enum("schema-style", SchemaStyle::Tree);
        attributes.set_string("schema-expand-level", "999");
        attributes.set_bool("schema-description-expanded", false);
        attributes.set_enum("schema-hide-read-only", SchemaHideReadOnly::Default);
        attributes.set_enum("schema-hide-write-only", SchemaHideWriteOnly::Default);
        attributes.set_enum("default-schema-tab", DefaultSchemaTab::Model);

        Self {
            document_title: "RapiDoc UI".to_string(),
            custom_head_content: String::new(),
            custom_inline_styles: None,
            custom_stylesheet_path: None,
            custom_javascript_path: None,
            document_path: "/openapi.json".to_string(),
            path: "/api-docs".to_string(),
            attributes,
        }
    }
}

impl RapiDocSettings {
    /// Create settings populated with the viewer defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// The attribute map backing the typed accessors
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Mutable access to the attribute map
    ///
    /// Use for viewer attributes the typed surface does not cover; values
    /// are passed through to the browser verbatim.
    pub fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    /// Fail if any enum-backed attribute holds an unparseable value
    ///
    /// Called at the start of every render so that an invalid stored string
    /// fails the request instead of reaching the browser.
    pub fn validate(&self) -> Result<()> {
        self.sort_endpoints_by()?;
        self.theme()?;
        self.font_size()?;
        self.nav_item_spacing()?;
        self.layout()?;
        self.render_style()?;
        self.schema_style()?;
        self.schema_hide_read_only()?;
        self.schema_hide_write_only()?;
        self.default_schema_tab()?;
        Ok(())
    }

    /// Sync the browser URL to the section in view
    pub fn update_route(&self) -> bool {
        self.attributes.get_bool("update-route", true)
    }

    pub fn set_update_route(&mut self, value: bool) {
        self.attributes.set_bool("update-route", value);
    }

    /// Custom prefix applied to each operation path
    pub fn route_prefix(&self) -> Option<&str> {
        self.attributes.get_string("route-prefix")
    }

    pub fn set_route_prefix(&mut self, value: impl Into<String>) {
        self.attributes.set_string("route-prefix", value);
    }

    /// List tags in alphabetic order
    pub fn sort_tags(&self) -> bool {
        self.attributes.get_bool("sort-tags", false)
    }

    pub fn set_sort_tags(&mut self, value: bool) {
        self.attributes.set_bool("sort-tags", value);
    }

    /// Ordering of endpoints within each tag
    pub fn sort_endpoints_by(&self) -> Result<SortEndpointsBy> {
        self.attributes.get_enum("sort-endpoints-by", SortEndpointsBy::Path)
    }

    pub fn set_sort_endpoints_by(&mut self, value: SortEndpointsBy) {
        self.attributes.set_enum("sort-endpoints-by", value);
    }

    /// Heading text shown in the top-left corner
    pub fn heading_text(&self) -> Option<&str> {
        self.attributes.get_string("heading-text")
    }

    pub fn set_heading_text(&mut self, value: impl Into<String>) {
        self.attributes.set_string("heading-text", value);
    }

    /// Initial scroll target (identified by method and path) once the spec loads
    pub fn goto_path(&self) -> Option<&str> {
        self.attributes.get_string("goto-path")
    }

    pub fn set_goto_path(&mut self, value: impl Into<String>) {
        self.attributes.set_string("goto-path", value);
    }

    /// Prefill try-it request fields with example values from the spec
    pub fn fill_request_fields_with_example(&self) -> bool {
        self.attributes.get_bool("fill-request-fields-with-example", true)
    }

    pub fn set_fill_request_fields_with_example(&mut self, value: bool) {
        self.attributes.set_bool("fill-request-fields-with-example", value);
    }

    /// Persist authentication to browser local storage
    pub fn persist_auth(&self) -> bool {
        self.attributes.get_bool("persist-auth", false)
    }

    pub fn set_persist_auth(&mut self, value: bool) {
        self.attributes.set_bool("persist-auth", value);
    }

    /// Base color theme
    pub fn theme(&self) -> Result<Theme> {
        self.attributes.get_enum("theme", Theme::Dark)
    }

    pub fn set_theme(&mut self, value: Theme) {
        self.attributes.set_enum("theme", value);
    }

    /// Hex color for the main background
    pub fn bg_color(&self) -> Option<&str> {
        self.attributes.get_string("bg-color")
    }

    pub fn set_bg_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("bg-color", value);
    }

    /// Hex color for text
    pub fn text_color(&self) -> Option<&str> {
        self.attributes.get_string("text-color")
    }

    pub fn set_text_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("text-color", value);
    }

    /// Hex color for the header background
    pub fn header_color(&self) -> Option<&str> {
        self.attributes.get_string("header-color")
    }

    pub fn set_header_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("header-color", value);
    }

    /// Hex color for controls such as buttons and tabs
    pub fn primary_color(&self) -> Option<&str> {
        self.attributes.get_string("primary-color")
    }

    pub fn set_primary_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("primary-color", value);
    }

    /// Load fonts from CDN; set false for offline deployments
    pub fn load_fonts(&self) -> bool {
        self.attributes.get_bool("load-fonts", true)
    }

    pub fn set_load_fonts(&mut self, value: bool) {
        self.attributes.set_bool("load-fonts", value);
    }

    /// Font stack for regular text
    pub fn regular_font(&self) -> &str {
        self.attributes.get_string_or("regular-font", DEFAULT_REGULAR_FONT)
    }

    pub fn set_regular_font(&mut self, value: impl Into<String>) {
        self.attributes.set_string("regular-font", value);
    }

    /// Font stack for mono-spaced text
    pub fn mono_font(&self) -> &str {
        self.attributes.get_string_or("mono-font", DEFAULT_MONO_FONT)
    }

    pub fn set_mono_font(&mut self, value: impl Into<String>) {
        self.attributes.set_string("mono-font", value);
    }

    /// Relative font sizing for the entire document
    pub fn font_size(&self) -> Result<FontSize> {
        self.attributes.get_enum("font-size", FontSize::Default)
    }

    pub fn set_font_size(&mut self, value: FontSize) {
        self.attributes.set_enum("font-size", value);
    }

    /// Method display mode in the navigation bar
    ///
    /// Allowed: false | as-plain-text | as-colored-text | as-colored-block.
    /// Passed through verbatim; the viewer validates in the browser.
    pub fn show_method_in_nav_bar(&self) -> &str {
        self.attributes.get_string_or("show-method-in-nav-bar", "false")
    }

    pub fn set_show_method_in_nav_bar(&mut self, value: impl Into<String>) {
        self.attributes.set_string("show-method-in-nav-bar", value);
    }

    /// Show operation paths instead of summaries in the navigation bar
    pub fn use_path_in_nav_bar(&self) -> bool {
        self.attributes.get_bool("use-path-in-nav-bar", false)
    }

    pub fn set_use_path_in_nav_bar(&mut self, value: bool) {
        self.attributes.set_bool("use-path-in-nav-bar", value);
    }

    /// Navigation bar background color
    pub fn nav_bg_color(&self) -> Option<&str> {
        self.attributes.get_string("nav-bg-color")
    }

    pub fn set_nav_bg_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("nav-bg-color", value);
    }

    /// Text color of a navigation item on mouse-over
    pub fn nav_hover_text_color(&self) -> Option<&str> {
        self.attributes.get_string("nav-hover-text-color")
    }

    pub fn set_nav_hover_text_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("nav-hover-text-color", value);
    }

    /// Background color of a navigation item on mouse-over
    pub fn nav_hover_bg_color(&self) -> Option<&str> {
        self.attributes.get_string("nav-hover-bg-color")
    }

    pub fn set_nav_hover_bg_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("nav-hover-bg-color", value);
    }

    /// Accent color used in the navigation bar
    pub fn nav_accent_color(&self) -> Option<&str> {
        self.attributes.get_string("nav-accent-color")
    }

    pub fn set_nav_accent_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("nav-accent-color", value);
    }

    /// Text color of selected navigation items
    pub fn nav_accent_text_color(&self) -> Option<&str> {
        self.attributes.get_string("nav-accent-text-color")
    }

    pub fn set_nav_accent_text_color(&mut self, value: impl Into<String>) {
        self.attributes.set_string("nav-accent-text-color", value);
    }

    /// Active navigation item indicator style
    pub fn nav_active_item_marker(&self) -> &str {
        self.attributes.get_string_or("nav-active-item-marker", "left-bar")
    }

    pub fn set_nav_active_item_marker(&mut self, value: impl Into<String>) {
        self.attributes.set_string("nav-active-item-marker", value);
    }

    /// Spacing of navigation items
    pub fn nav_item_spacing(&self) -> Result<NavItemSpacing> {
        self.attributes.get_enum("nav-item-spacing", NavItemSpacing::Default)
    }

    pub fn set_nav_item_spacing(&mut self, value: NavItemSpacing) {
        self.attributes.set_enum("nav-item-spacing", value);
    }

    /// Behavior of clicking a tag in the navigation bar (focused mode only)
    ///
    /// Allowed: expand-collapse | show-description.
    pub fn on_nav_tag_click(&self) -> &str {
        self.attributes.get_string_or("on-nav-tag-click", "expand-collapse")
    }

    pub fn set_on_nav_tag_click(&mut self, value: impl Into<String>) {
        self.attributes.set_string("on-nav-tag-click", value);
    }

    /// Placement of request/response sections
    pub fn layout(&self) -> Result<Layout> {
        self.attributes.get_enum("layout", Layout::Row)
    }

    pub fn set_layout(&mut self, value: Layout) {
        self.attributes.set_enum("layout", value);
    }

    /// Overall display mode of the documentation
    pub fn render_style(&self) -> Result<RenderStyle> {
        self.attributes.get_enum("render-style", RenderStyle::Read)
    }

    pub fn set_render_style(&mut self, value: RenderStyle) {
        self.attributes.set_enum("render-style", value);
    }

    /// Height of the response panel, any valid CSS length
    pub fn response_area_height(&self) -> &str {
        self.attributes.get_string_or("response-area-height", "300px")
    }

    pub fn set_response_area_height(&mut self, value: impl Into<String>) {
        self.attributes.set_string("response-area-height", value);
    }

    /// Show the spec info section (title, description, version, terms)
    pub fn show_info(&self) -> bool {
        self.attributes.get_bool("show-info", true)
    }

    pub fn set_show_info(&mut self, value: bool) {
        self.attributes.set_bool("show-info", value);
    }

    /// Pull h1/h2 headings of the info description markdown into the navigation bar
    pub fn info_description_headings_in_navbar(&self) -> bool {
        self.attributes.get_bool("info-description-headings-in-navbar", false)
    }

    pub fn set_info_description_headings_in_navbar(&mut self, value: bool) {
        self.attributes.set_bool("info-description-headings-in-navbar", value);
    }

    /// Show the components section (schemas, responses, examples, ...)
    pub fn show_components(&self) -> bool {
        self.attributes.get_bool("show-components", false)
    }

    pub fn set_show_components(&mut self, value: bool) {
        self.attributes.set_bool("show-components", value);
    }

    /// Show the header bar
    pub fn show_header(&self) -> bool {
        self.attributes.get_bool("show-header", true)
    }

    pub fn set_show_header(&mut self, value: bool) {
        self.attributes.set_bool("show-header", value);
    }

    /// Show the authentication section
    pub fn allow_authentication(&self) -> bool {
        self.attributes.get_bool("allow-authentication", true)
    }

    pub fn set_allow_authentication(&mut self, value: bool) {
        self.attributes.set_bool("allow-authentication", value);
    }

    /// Allow loading a spec by URL from the UI
    pub fn allow_spec_url_load(&self) -> bool {
        self.attributes.get_bool("allow-spec-url-load", false)
    }

    pub fn set_allow_spec_url_load(&mut self, value: bool) {
        self.attributes.set_bool("allow-spec-url-load", value);
    }

    /// Allow loading a spec file from the local drive
    pub fn allow_spec_file_load(&self) -> bool {
        self.attributes.get_bool("allow-spec-file-load", false)
    }

    pub fn set_allow_spec_file_load(&mut self, value: bool) {
        self.attributes.set_bool("allow-spec-file-load", value);
    }

    /// Offer download buttons for the spec in the overview section
    pub fn allow_spec_file_download(&self) -> bool {
        self.attributes.get_bool("allow-spec-file-download", true)
    }

    pub fn set_allow_spec_file_download(&mut self, value: bool) {
        self.attributes.set_bool("allow-spec-file-download", value);
    }

    /// Quick filtering of the API list
    pub fn allow_search(&self) -> bool {
        self.attributes.get_bool("allow-search", true)
    }

    pub fn set_allow_search(&mut self, value: bool) {
        self.attributes.set_bool("allow-search", value);
    }

    /// Search across paths, descriptions, parameters and responses
    pub fn allow_advanced_search(&self) -> bool {
        self.attributes.get_bool("allow-advanced-search", true)
    }

    pub fn set_allow_advanced_search(&mut self, value: bool) {
        self.attributes.set_bool("allow-advanced-search", value);
    }

    /// The try-it feature for making calls to the API server
    pub fn allow_try(&self) -> bool {
        self.attributes.get_bool("allow-try", true)
    }

    pub fn set_allow_try(&mut self, value: bool) {
        self.attributes.set_bool("allow-try", value);
    }

    /// Show the cURL snippet without clicking try
    pub fn show_curl_before_try(&self) -> bool {
        self.attributes.get_bool("show-curl-before-try", false)
    }

    pub fn set_show_curl_before_try(&mut self, value: bool) {
        self.attributes.set_bool("show-curl-before-try", value);
    }

    /// Let the user pick an API server from the server list
    pub fn allow_server_selection(&self) -> bool {
        self.attributes.get_bool("allow-server-selection", false)
    }

    pub fn set_allow_server_selection(&mut self, value: bool) {
        self.attributes.set_bool("allow-server-selection", value);
    }

    /// Expand/collapse toggle for field descriptions in the schema
    pub fn allow_schema_description_expand_toggle(&self) -> bool {
        self.attributes.get_bool("allow-schema-description-expand-toggle", true)
    }

    pub fn set_allow_schema_description_expand_toggle(&mut self, value: bool) {
        self.attributes.set_bool("allow-schema-description-expand-toggle", value);
    }

    /// Display mode for object schemas
    pub fn schema_style(&self) -> Result<SchemaStyle> {
        self.attributes.get_enum("schema-style", SchemaStyle::Tree)
    }

    pub fn set_schema_style(&mut self, value: SchemaStyle) {
        self.attributes.set_enum("schema-style", value);
    }

    /// How many schema levels are expanded by default
    pub fn schema_expand_level(&self) -> &str {
        self.attributes.get_string_or("schema-expand-level", "999")
    }

    pub fn set_schema_expand_level(&mut self, value: impl Into<String>) {
        self.attributes.set_string("schema-expand-level", value);
    }

    /// Fully expand field constraint and description texts
    pub fn schema_description_expanded(&self) -> bool {
        self.attributes.get_bool("schema-description-expanded", false)
    }

    pub fn set_schema_description_expanded(&mut self, value: bool) {
        self.attributes.set_bool("schema-description-expanded", value);
    }

    /// Visibility rule for read-only schema fields
    pub fn schema_hide_read_only(&self) -> Result<SchemaHideReadOnly> {
        self.attributes.get_enum("schema-hide-read-only", SchemaHideReadOnly::Default)
    }

    pub fn set_schema_hide_read_only(&mut self, value: SchemaHideReadOnly) {
        self.attributes.set_enum("schema-hide-read-only", value);
    }

    /// Visibility rule for write-only schema fields
    pub fn schema_hide_write_only(&self) -> Result<SchemaHideWriteOnly> {
        self.attributes.get_enum("schema-hide-write-only", SchemaHideWriteOnly::Default)
    }

    pub fn set_schema_hide_write_only(&mut self, value: SchemaHideWriteOnly) {
        self.attributes.set_enum("schema-hide-write-only", value);
    }

    /// Default active tab in the schema view
    pub fn default_schema_tab(&self) -> Result<DefaultSchemaTab> {
        self.attributes.get_enum("default-schema-tab", DefaultSchemaTab::Model)
    }

    pub fn set_default_schema_tab(&mut self, value: DefaultSchemaTab) {
        self.attributes.set_enum("default-schema-tab", value);
    }

    /// API server used for try-it calls when not listed in the spec
    pub fn server_url(&self) -> Option<&str> {
        self.attributes.get_string("server-url")
    }

    pub fn set_server_url(&mut self, value: impl Into<String>) {
        self.attributes.set_string("server-url", value);
    }

    /// Default API server selected among those listed in the spec
    pub fn default_api_server(&self) -> Option<&str> {
        self.attributes.get_string("default-api-server")
    }

    pub fn set_default_api_server(&mut self, value: impl Into<String>) {
        self.attributes.set_string("default-api-server", value);
    }

    /// Name of the API key sent with try-it requests
    pub fn api_key_name(&self) -> Option<&str> {
        self.attributes.get_string("api-key-name")
    }

    pub fn set_api_key_name(&mut self, value: impl Into<String>) {
        self.attributes.set_string("api-key-name", value);
    }

    /// Where the API key is sent: header or query
    pub fn api_key_location(&self) -> Option<&str> {
        self.attributes.get_string("api-key-location")
    }

    pub fn set_api_key_location(&mut self, value: impl Into<String>) {
        self.attributes.set_string("api-key-location", value);
    }

    /// Value of the API key sent with try-it requests
    pub fn api_key_value(&self) -> Option<&str> {
        self.attributes.get_string("api-key-value")
    }

    pub fn set_api_key_value(&mut self, value: impl Into<String>) {
        self.attributes.set_string("api-key-value", value);
    }

    /// Credentials mode for cross-origin try-it calls
    ///
    /// Allowed: omit | same-origin | include, per the Fetch standard.
    pub fn fetch_credentials(&self) -> Option<&str> {
        self.attributes.get_string("fetch-credentials")
    }

    pub fn set_fetch_credentials(&mut self, value: impl Into<String>) {
        self.attributes.set_string("fetch-credentials", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_constructor_defaults() {
        let settings = RapiDocSettings::new();

        assert!(settings.update_route());
        assert!(!settings.sort_tags());
        assert_eq!(settings.sort_endpoints_by().unwrap(), SortEndpointsBy::Path);
        assert!(settings.fill_request_fields_with_example());
        assert!(!settings.persist_auth());
        assert_eq!(settings.theme().unwrap(), Theme::Dark);
        assert_eq!(settings.regular_font(), DEFAULT_REGULAR_FONT);
        assert_eq!(settings.mono_font(), DEFAULT_MONO_FONT);
        assert_eq!(settings.font_size().unwrap(), FontSize::Default);
        assert_eq!(settings.show_method_in_nav_bar(), "false");
        assert!(!settings.use_path_in_nav_bar());
        assert_eq!(settings.nav_active_item_marker(), "left-bar");
        assert_eq!(settings.nav_item_spacing().unwrap(), NavItemSpacing::Default);
        assert_eq!(settings.on_nav_tag_click(), "expand-collapse");
        assert_eq!(settings.layout().unwrap(), Layout::Row);
        assert_eq!(settings.render_style().unwrap(), RenderStyle::Read);
        assert_eq!(settings.response_area_height(), "300px");
        assert!(settings.show_info());
        assert!(!settings.info_description_headings_in_navbar());
        assert!(!settings.show_components());
        assert!(settings.show_header());
        assert!(settings.allow_authentication());
        assert!(!settings.allow_spec_url_load());
        assert!(!settings.allow_spec_file_load());
        assert!(settings.allow_spec_file_download());
        assert!(settings.allow_search());
        assert!(settings.allow_advanced_search());
        assert!(settings.allow_try());
        assert!(!settings.show_curl_before_try());
        assert!(!settings.allow_server_selection());
        assert!(settings.allow_schema_description_expand_toggle());
        assert_eq!(settings.schema_style().unwrap(), SchemaStyle::Tree);
        assert_eq!(settings.schema_expand_level(), "999");
        assert!(!settings.schema_description_expanded());
        assert_eq!(settings.schema_hide_read_only().unwrap(), SchemaHideReadOnly::Default);
        assert_eq!(settings.schema_hide_write_only().unwrap(), SchemaHideWriteOnly::Default);
        assert_eq!(settings.default_schema_tab().unwrap(), DefaultSchemaTab::Model);
    }

    #[test]
    fn test_unset_keys_fall_back_to_documented_defaults() {
        let settings = RapiDocSettings::new();

        assert!(settings.load_fonts());
        assert_eq!(settings.route_prefix(), None);
        assert_eq!(settings.heading_text(), None);
        assert_eq!(settings.goto_path(), None);
        assert_eq!(settings.bg_color(), None);
        assert_eq!(settings.server_url(), None);
        assert_eq!(settings.fetch_credentials(), None);
    }

    #[test]
    fn test_document_field_defaults() {
        let settings = RapiDocSettings::new();
        assert_eq!(settings.document_title, "RapiDoc UI");
        assert_eq!(settings.custom_head_content, "");
        assert_eq!(settings.document_path, "/openapi.json");
        assert_eq!(settings.path, "/api-docs");
    }

    #[test]
    fn test_enum_setter_stores_lowercase_member_name() {
        let mut settings = RapiDocSettings::new();
        settings.set_sort_endpoints_by(SortEndpointsBy::Method);

        assert_eq!(settings.attributes().get_string("sort-endpoints-by"), Some("method"));
        assert_eq!(settings.sort_endpoints_by().unwrap(), SortEndpointsBy::Method);
    }

    #[test]
    fn test_string_setter_round_trip() {
        let mut settings = RapiDocSettings::new();
        settings.set_heading_text("Pet Store");
        settings.set_show_method_in_nav_bar("as-colored-block");
        settings.set_fetch_credentials("include");

        assert_eq!(settings.heading_text(), Some("Pet Store"));
        assert_eq!(settings.show_method_in_nav_bar(), "as-colored-block");
        assert_eq!(settings.fetch_credentials(), Some("include"));
    }

    #[test]
    fn test_free_form_strings_accepted_verbatim() {
        // Documented-only value sets are not validated server-side
        let mut settings = RapiDocSettings::new();
        settings.set_fetch_credentials("not-a-fetch-mode");
        assert_eq!(settings.fetch_credentials(), Some("not-a-fetch-mode"));
    }

    #[test]
    fn test_mono_font_independent_of_regular_font() {
        let mut settings = RapiDocSettings::new();
        settings.set_mono_font("'Fira Code', monospace");

        assert_eq!(settings.mono_font(), "'Fira Code', monospace");
        assert_eq!(settings.regular_font(), DEFAULT_REGULAR_FONT);
    }

    #[test]
    fn test_nav_hover_text_color_independent_of_show_method() {
        let mut settings = RapiDocSettings::new();
        settings.set_nav_hover_text_color("#ffffff");

        assert_eq!(settings.nav_hover_text_color(), Some("#ffffff"));
        assert_eq!(settings.show_method_in_nav_bar(), "false");
    }

    #[test]
    fn test_api_key_value_independent_of_api_key_name() {
        let mut settings = RapiDocSettings::new();
        settings.set_api_key_name("X-API-Key");
        settings.set_api_key_value("secret");

        assert_eq!(settings.api_key_name(), Some("X-API-Key"));
        assert_eq!(settings.api_key_value(), Some("secret"));
    }

    #[test]
    fn test_injected_invalid_enum_value_fails_read() {
        let mut settings = RapiDocSettings::new();
        settings.attributes_mut().insert_raw("sort-endpoints-by", json!("bogus"));

        let err = settings.sort_endpoints_by().unwrap_err();
        assert!(matches!(err, Error::EnumParse { .. }));
    }

    #[test]
    fn test_validate_catches_poisoned_attribute() {
        let mut settings = RapiDocSettings::new();
        assert!(settings.validate().is_ok());

        settings.attributes_mut().insert_raw("theme", json!("solarized"));
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("theme"));
    }
}
