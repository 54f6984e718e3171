//! Configuration settings structure
//!
//! Defines the settings for the sample application: where the server
//! listens, where the documentation page and OpenAPI document are mounted,
//! and how the page presents itself.

use crate::error::{Error, Result};
use crate::settings::enums::{AttributeEnum, Theme};
use crate::settings::RapiDocSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the sample application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerSettings,
    /// Documentation page configuration
    pub docs: DocsSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Documentation page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSettings {
    /// Route under which the page is served
    pub route: String,
    /// URL of the OpenAPI document the viewer loads
    pub document_path: String,
    /// Page title
    pub title: String,
    /// Base color theme, "dark" or "light"
    pub theme: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: 8080,
        }
    }
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            route: "/api-docs".to_string(),
            document_path: "/openapi.json".to_string(),
            title: "RapiDoc UI".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::config(format!("Invalid config file: {}", e)))
    }

    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().merge_with_env()
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(mut self) -> Result<Self> {
        if let Ok(host) = std::env::var("RAPIDOC_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("RAPIDOC_SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| Error::config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(route) = std::env::var("RAPIDOC_DOCS_ROUTE") {
            self.docs.route = route;
        }
        if let Ok(document_path) = std::env::var("RAPIDOC_DOCS_DOCUMENT_PATH") {
            self.docs.document_path = document_path;
        }
        if let Ok(title) = std::env::var("RAPIDOC_DOCS_TITLE") {
            self.docs.title = title;
        }
        if let Ok(theme) = std::env::var("RAPIDOC_DOCS_THEME") {
            self.docs.theme = theme;
        }
        if let Ok(level) = std::env::var("RAPIDOC_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(self)
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<()> {
        if !self.docs.route.starts_with('/') {
            return Err(Error::config(format!(
                "Docs route must start with '/': {}",
                self.docs.route
            )));
        }
        if !self.docs.document_path.starts_with('/') {
            return Err(Error::config(format!(
                "Document path must start with '/': {}",
                self.docs.document_path
            )));
        }
        if Theme::from_attribute(&self.docs.theme).is_none() {
            return Err(Error::config(format!(
                "Unknown theme '{}', expected dark or light",
                self.docs.theme
            )));
        }
        Ok(())
    }

    /// Build the viewer settings described by this configuration
    pub fn rapidoc_settings(&self) -> Result<RapiDocSettings> {
        let theme = Theme::from_attribute(&self.docs.theme).ok_or_else(|| {
            Error::config(format!(
                "Unknown theme '{}', expected dark or light",
                self.docs.theme
            ))
        })?;

        let mut settings = RapiDocSettings::new();
        settings.path = self.docs.route.clone();
        settings.document_path = self.docs.document_path.clone();
        settings.document_title = self.docs.title.clone();
        settings.set_theme(theme);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "::");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.docs.route, "/api-docs");
        assert_eq!(settings.docs.theme, "dark");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_route() {
        let mut settings = Settings::default();
        settings.docs.route = "api-docs".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_theme() {
        let mut settings = Settings::default();
        settings.docs.theme = "solarized".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn test_rapidoc_settings_from_config() {
        let mut settings = Settings::default();
        settings.docs.route = "/docs".to_string();
        settings.docs.title = "Demo API".to_string();
        settings.docs.theme = "light".to_string();

        let viewer = settings.rapidoc_settings().unwrap();
        assert_eq!(viewer.path, "/docs");
        assert_eq!(viewer.document_title, "Demo API");
        assert_eq!(viewer.attributes().get_string("theme"), Some("light"));
    }
}
