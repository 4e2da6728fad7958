//! Widget render command.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use widgetry_widgets::{create_widget, DispatchError};

/// Configuration file structure (widgetry.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    render: RenderSettings,
}

#[derive(Debug, Deserialize, Default)]
struct RenderSettings {
    /// Platform used when none is given on the command line
    platform: Option<String>,
    #[serde(default)]
    format: OutputFormat,
}

/// How the rendered widget is written to stdout.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Debug, Serialize)]
struct RenderedWidget<'a> {
    platform: &'a str,
    markup: &'a str,
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(config_path: &Path) -> Result<ConfigFile> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path).map_err(|e| {
            anyhow::anyhow!("Failed to read {}: {}", config_path.display(), e)
        })?;
        let config: ConfigFile = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse {}: {}", config_path.display(), e)
        })?;
        tracing::debug!("Loaded config from {}", config_path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Assemble the widget for `platform` and format it for output.
fn render(platform: &str, format: OutputFormat) -> Result<String> {
    let widget = create_widget(platform)
        .ok_or_else(|| DispatchError::UnknownPlatform(platform.to_string()))?;

    let output = match format {
        OutputFormat::Html => widget.into_string(),
        OutputFormat::Json => {
            let token = platform.to_lowercase();
            serde_json::to_string_pretty(&RenderedWidget {
                platform: &token,
                markup: widget.as_str(),
            })?
        }
    };

    Ok(output)
}

/// Run the render command.
pub fn run(config_path: &Path, platform: Option<String>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;

    let platform = platform
        .or(config.render.platform)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No platform given; pass one or set render.platform in {}",
                config_path.display()
            )
        })?;
    let format = if json {
        OutputFormat::Json
    } else {
        config.render.format
    };

    tracing::info!("Rendering {} widget", platform);

    println!("{}", render(&platform, format)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_config_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("widgetry.toml")).unwrap();

        assert_eq!(config.render.platform, None);
        assert_eq!(config.render.format, OutputFormat::Html);
    }

    #[test]
    fn loads_render_settings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("widgetry.toml");
        fs::write(
            &path,
            r#"
[render]
platform = "android"
format = "json"
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.render.platform.as_deref(), Some("android"));
        assert_eq!(config.render.format, OutputFormat::Json);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("widgetry.toml");
        fs::write(&path, "[render]\nformat = \"pdf\"\n").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn renders_html() {
        let output = render("Android", OutputFormat::Html).unwrap();

        assert!(output.starts_with("<body class=\"android-ready\">"));
        assert!(output.ends_with("</body>"));
    }

    #[test]
    fn renders_json() {
        let output = render("IOS", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["platform"], "ios");
        assert!(value["markup"]
            .as_str()
            .unwrap()
            .contains("Hello World!"));
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let err = render("web", OutputFormat::Html).unwrap_err();

        assert!(err.to_string().contains("Unknown platform"));
    }
}
