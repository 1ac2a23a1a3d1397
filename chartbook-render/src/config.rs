//! Serializable render configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use chartbook_core::spec::Theme;

/// Errors loading or validating a render configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown theme '{0}' (expected gray, white, or dark)")]
    UnknownTheme(String),
}

/// Output file format for rendered figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Static vector image, rendered server-side.
    Svg,

    /// Self-contained interactive page.
    Html,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Html => "html",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown format '{other}' (expected svg or html)")),
        }
    }
}

/// Render settings loaded from a TOML file.
///
/// All fields are optional in the file; missing ones fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Figure width in pixels.
    pub width: u32,

    /// Figure height in pixels.
    pub height: u32,

    /// Output file format.
    pub format: OutputFormat,

    /// Theme applied to every figure, overriding each figure's own choice.
    pub theme: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            format: OutputFormat::Svg,
            theme: None,
        }
    }
}

impl RenderConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RenderConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.theme_override()?;
        Ok(config)
    }

    /// The parsed theme override, if the file named one.
    pub fn theme_override(&self) -> Result<Option<Theme>, ConfigError> {
        match &self.theme {
            None => Ok(None),
            Some(name) => Theme::parse(name)
                .map(Some)
                .ok_or_else(|| ConfigError::UnknownTheme(name.clone())),
        }
    }
}
