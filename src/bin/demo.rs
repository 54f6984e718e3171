//! Sample application serving RapiDoc documentation
//!
//! Wires the axum adapter to a small embedded OpenAPI document, showing the
//! intended deployment pattern: configure the viewer settings once, then
//! serve them unchanged for the lifetime of the process.
//!
//! # Usage
//!
//! ```bash
//! rapidoc-demo --port 8080 --host 0.0.0.0 --theme light
//! ```
//!
//! # Endpoints
//!
//! - `GET /api-docs`: the documentation page (route configurable)
//! - `GET /openapi.json`: the demo OpenAPI document

use axum::{Json, Router, routing::get};
use clap::Parser;
use rapidoc_ui::config::{ConfigLoader, Settings};
use serde_json::{Value, json};
use std::path::PathBuf;

/// Demo server for the RapiDoc documentation viewer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "::")]
    host: String,

    /// Route under which the documentation page is served
    #[arg(long)]
    route: Option<String>,

    /// Title of the documentation page
    #[arg(long)]
    title: Option<String>,

    /// Base color theme: dark or light
    #[arg(long)]
    theme: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    // Load configuration and apply CLI overrides
    let config_file = cli.config.clone().or_else(ConfigLoader::default_config_path);
    let mut settings = ConfigLoader::new().load(config_file.as_deref())?;
    settings.server.host = cli.host.clone();
    settings.server.port = cli.port;
    if let Some(route) = cli.route {
        settings.docs.route = route;
    }
    if let Some(title) = cli.title {
        settings.docs.title = title;
    }
    if let Some(theme) = cli.theme {
        settings.docs.theme = theme;
    }
    settings.validate()?;

    tracing::info!("Starting RapiDoc demo server v{}", env!("CARGO_PKG_VERSION"));

    let app = build_app(&settings)?;

    let addr = parse_bind_address(&settings.server.host, settings.server.port)?;
    tracing::info!(
        "Documentation available at http://localhost:{}{}",
        settings.server.port,
        settings.docs.route
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the demo router: documentation page plus the demo OpenAPI document
fn build_app(settings: &Settings) -> anyhow::Result<Router> {
    let viewer = settings.rapidoc_settings()?;
    let document_route = settings.docs.document_path.clone();

    Ok(rapidoc_ui::server::create_app(viewer)
        .merge(Router::new().route(&document_route, get(openapi_document))))
}

/// Serve the embedded demo OpenAPI document
async fn openapi_document() -> Json<Value> {
    Json(sample_document())
}

/// A minimal OpenAPI 3.0 document for demonstration
fn sample_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Petstore Demo",
            "description": "Sample document served by rapidoc-demo",
            "version": "1.0.0"
        },
        "paths": {
            "/pets": {
                "get": {
                    "tags": ["pets"],
                    "summary": "List all pets",
                    "operationId": "listPets",
                    "responses": {
                        "200": {
                            "description": "A list of pets",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Pet" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "tag": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// Parse the configured host into a bind address
fn parse_bind_address(host: &str, port: u16) -> anyhow::Result<std::net::SocketAddr> {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }
    match host {
        "::" => Ok(SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port)),
        "0.0.0.0" => Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)),
        _ => anyhow::bail!(
            "Invalid host address: {}. Use '::' for IPv6 or '0.0.0.0' for IPv4",
            host
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["rapidoc-demo"]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.host, "::");
        assert!(cli.route.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_custom_values() {
        let cli = Cli::parse_from([
            "rapidoc-demo",
            "--port",
            "9090",
            "--host",
            "0.0.0.0",
            "--route",
            "/docs",
            "--theme",
            "light",
            "--verbose",
        ]);
        assert_eq!(cli.port, 9090);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.route.as_deref(), Some("/docs"));
        assert_eq!(cli.theme.as_deref(), Some("light"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_bind_address() {
        let addr = parse_bind_address("127.0.0.1", 8080).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");

        assert!(parse_bind_address("::", 8080).is_ok());
        assert!(parse_bind_address("0.0.0.0", 8080).is_ok());
        assert!(parse_bind_address("localhost", 8080).is_err());
    }

    #[test]
    fn test_sample_document_is_valid_openapi_shape() {
        let doc = sample_document();
        assert_eq!(doc["openapi"], "3.0.3");
        assert!(doc["paths"]["/pets"]["get"].is_object());
    }

    #[test]
    fn test_build_app() {
        let settings = Settings::default();
        assert!(build_app(&settings).is_ok());
    }
}
