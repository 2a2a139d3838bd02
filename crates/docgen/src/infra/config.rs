//! Configuration for the docs generator.
//!
//! Built-in defaults overlaid with an optional `docgen.toml` at the project
//! root. The two pages and the two languages are fixed in code; configuration
//! covers paths and branding only.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: &str = include_str!("../../assets/default-config.toml");

const PROJECT_CONFIG_FILE: &str = "docgen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: Site,
}

/// Branding and path settings. Unset values fall back to the defaults of the
/// Battery Manager project this tool ships with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Site {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    docs_dir: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    stylesheet: Option<String>,
}

impl Site {
    fn default_name() -> &'static str {
        "Battery Manager"
    }

    fn default_subtitle() -> &'static str {
        "Docs • menu • FR/EN • thème"
    }

    fn default_docs_dir() -> &'static str {
        "docs"
    }

    fn default_icon() -> &'static str {
        "resources/icon.png"
    }

    fn default_stylesheet() -> &'static str {
        "style.css"
    }

    /// Product name shown in the sidebar brand and page titles.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| Self::default_name())
    }

    /// Subtitle shown under the product name.
    pub fn subtitle(&self) -> &str {
        self.subtitle
            .as_deref()
            .unwrap_or_else(|| Self::default_subtitle())
    }

    /// Directory holding the source documents and receiving the output,
    /// relative to the project root.
    pub fn docs_dir(&self) -> &str {
        self.docs_dir
            .as_deref()
            .unwrap_or_else(|| Self::default_docs_dir())
    }

    /// Icon source path relative to the project root.
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or_else(|| Self::default_icon())
    }

    /// Stylesheet file name the generated pages link to.
    pub fn stylesheet(&self) -> &str {
        self.stylesheet
            .as_deref()
            .unwrap_or_else(|| Self::default_stylesheet())
    }
}

impl Config {
    /// Load the built-in defaults overlaid with the project configuration.
    ///
    /// Without `explicit`, `<root>/docgen.toml` is used when present and
    /// silently skipped otherwise. An explicit path that cannot be read is an
    /// error.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let base = Self::from_str(DEFAULT_CONFIG)?;

        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(PROJECT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok(base);
                }
                candidate
            }
        };

        let overlay = Self::from_file(&path)?;
        Ok(base.merge(overlay))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).context("failed to parse TOML config")?;
        Ok(config)
    }

    fn merge(self, overlay: Self) -> Self {
        Self {
            site: Site {
                name: overlay.site.name.or(self.site.name),
                subtitle: overlay.site.subtitle.or(self.site.subtitle),
                docs_dir: overlay.site.docs_dir.or(self.site.docs_dir),
                icon: overlay.site.icon.or(self.site.icon),
                stylesheet: overlay.site.stylesheet.or(self.site.stylesheet),
            },
        }
    }
}
