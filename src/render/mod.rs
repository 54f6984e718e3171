//! HTML page rendering for the documentation viewer
//!
//! Renders the static page template by verbatim placeholder substitution:
//! the serialized attribute map plus a handful of string fields. No
//! templating engine and no escaping; the template is a fixed internal
//! asset, not user input. Rendering is pure string processing, recomputed
//! on every request.

use crate::error::Result;
use crate::settings::RapiDocSettings;
use url::Url;

/// The built-in page template served to browsers
pub const RAPIDOC_TEMPLATE: &str = include_str!("../../assets/rapidoc.html");

/// Per-request context for rendering
///
/// Carries the base path the application is mounted under, used only to
/// resolve relative custom stylesheet/script links.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    base_path: String,
}

impl RequestContext {
    /// Create a context for the given mount base path (may be empty)
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// The mount base path
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve a custom asset link against the base path
    ///
    /// Absolute URLs and scheme-relative links pass through verbatim.
    pub fn resolve(&self, path: &str) -> String {
        if Url::parse(path).is_ok() || path.starts_with("//") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl RapiDocSettings {
    /// Render the final HTML document for one request
    ///
    /// Every enum-backed attribute is validated first: a previously-stored
    /// invalid string fails the render instead of being silently defaulted.
    /// Each placeholder token present in the template is replaced by plain
    /// substring substitution.
    pub fn render_page(&self, template: &str, ctx: &RequestContext) -> Result<String> {
        self.validate()?;

        let attributes = self.attributes().to_json()?;
        tracing::debug!(
            "Rendering documentation page with {} attributes",
            self.attributes().len()
        );

        Ok(template
            .replace("{AdditionalAttributes}", &attributes)
            .replace("{DocumentTitle}", &self.document_title)
            .replace("{CustomHeadContent}", &self.custom_head_content)
            .replace("{CustomStyle}", &self.custom_style_html(ctx))
            .replace("{CustomScript}", &self.custom_script_html(ctx))
            .replace("{DocumentPath}", &self.document_path))
    }

    /// Build the `{CustomStyle}` block from inline styles and stylesheet link
    fn custom_style_html(&self, ctx: &RequestContext) -> String {
        let mut html = String::new();
        if let Some(styles) = &self.custom_inline_styles {
            html.push_str("<style>");
            html.push_str(styles);
            html.push_str("</style>");
        }
        if let Some(path) = &self.custom_stylesheet_path {
            html.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">",
                ctx.resolve(path)
            ));
        }
        html
    }

    /// Build the `{CustomScript}` block from the script link
    fn custom_script_html(&self, ctx: &RequestContext) -> String {
        match &self.custom_javascript_path {
            Some(path) => format!("<script src=\"{}\"></script>", ctx.resolve(path)),
            None => String::new(),
        }
    }
}
