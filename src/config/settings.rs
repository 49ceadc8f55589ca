use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(skip)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// ssh config file used when `--path` is not given.
    #[serde(default)]
    pub ssh_config_path: Option<PathBuf>,
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Where the settings came from; `None` when built-in defaults are in use.
    pub config_path: Option<PathBuf>,
}

/// How a lookup result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The rendered `Host` block.
    #[default]
    Text,
    /// The whole lookup as JSON.
    Json,
    /// `Keyword=value` lines.
    Map,
}

impl OutputFormat {
    pub const VARIANTS: [&'static str; 3] = ["text", "json", "map"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Map => "map",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "map" => Ok(OutputFormat::Map),
            other => Err(format!("unknown output format '{}' (expected one of: {})", other, Self::VARIANTS.join(", "))),
        }
    }
}
