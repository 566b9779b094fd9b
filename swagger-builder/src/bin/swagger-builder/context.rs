use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use swagger_builder_build::{BuilderGenerator, SetterStyle};

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE: &str = "swagger-builder.toml";

/// Project context for generator runs
pub struct ProjectContext {
    /// Root directory of the project (where Cargo.toml is)
    pub project_root: PathBuf,
    /// Path to config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: Option<SwaggerBuilderConfig>,
}

/// Configuration stored in swagger-builder.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwaggerBuilderConfig {
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_scan_paths")]
    pub scan_paths: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_crate_name")]
    pub crate_name: String,
    #[serde(default = "default_setter_style")]
    pub setter_style: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            scan_paths: default_scan_paths(),
            output_dir: default_output_dir(),
            crate_name: default_crate_name(),
            setter_style: default_setter_style(),
        }
    }
}

fn default_scan_paths() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_output_dir() -> String {
    "target/swagger_builders".to_string()
}

fn default_crate_name() -> String {
    "crate".to_string()
}

fn default_setter_style() -> String {
    SetterStyle::Prefixed.to_string()
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub scan_paths: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub crate_name: Option<String>,
    pub setter_style: Option<SetterStyle>,
}

impl ProjectContext {
    /// Find and load project context from current directory or ancestors
    pub fn find() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::find_from(&current_dir)
    }

    /// Find project context starting from the given directory
    pub fn find_from(start: &Path) -> Result<Self> {
        let project_root = Self::find_project_root(start)?;
        Self::from_root(project_root)
    }

    /// Create context from a known project root
    pub fn from_root(project_root: PathBuf) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {CONFIG_FILE}"))?;
            let config: SwaggerBuilderConfig =
                toml::from_str(&content).with_context(|| format!("Failed to parse {CONFIG_FILE}"))?;
            log::debug!("loaded {}", config_path.display());
            Some(config)
        } else {
            None
        };

        Ok(Self {
            project_root,
            config_path,
            config,
        })
    }

    /// Find project root by looking for Cargo.toml
    fn find_project_root(start: &Path) -> Result<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let cargo_toml = current.join("Cargo.toml");
            if cargo_toml.exists() {
                return Ok(current);
            }

            if !current.pop() {
                anyhow::bail!(
                    "Could not find Cargo.toml in {start:?} or any parent directory. \
                     Are you in a Rust project?"
                );
            }
        }
    }

    /// Settings from the config file, or the defaults when there is none.
    pub fn settings(&self) -> GeneratorSettings {
        self.config
            .as_ref()
            .map(|c| c.generator.clone())
            .unwrap_or_default()
    }

    /// Build a generator from the config file with `overrides` applied.
    ///
    /// Paths from the config file are relative to the project root; paths
    /// given on the command line are used as-is.
    pub fn generator(&self, overrides: &Overrides) -> Result<BuilderGenerator> {
        let settings = self.settings();

        let setter_style = match overrides.setter_style {
            Some(style) => style,
            None => settings
                .setter_style
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid setter_style in {CONFIG_FILE}"))?,
        };

        let crate_name = overrides
            .crate_name
            .clone()
            .unwrap_or(settings.crate_name);

        let output_dir = overrides
            .output_dir
            .clone()
            .unwrap_or_else(|| self.project_root.join(&settings.output_dir));

        let scan_paths: Vec<PathBuf> = if overrides.scan_paths.is_empty() {
            settings
                .scan_paths
                .iter()
                .map(|path| self.project_root.join(path))
                .collect()
        } else {
            overrides.scan_paths.clone()
        };

        let mut generator = BuilderGenerator::new()
            .output_dir(output_dir)
            .crate_name(crate_name)
            .setter_style(setter_style);
        for path in scan_paths {
            generator = generator.scan_path(path);
        }
        Ok(generator)
    }
}
