use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, VsError};

/// File name of the per-project configuration.
pub const PROJECT_CONFIG_FILE: &str = ".vskill.toml";

/// Output formats accepted by `[output] format`.
pub const OUTPUT_FORMATS: [&str; 5] = ["human", "json", "jsonl", "plain", "tsv"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration: defaults, then either the explicit file or the
    /// global and project files, then environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("VSKILL_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => warn!(path = %path.display(), "config file not found, using defaults"),
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        debug!(
            catalog = config.catalog.path.as_deref().unwrap_or("builtin"),
            strict = config.catalog.strict,
            format = %config.output.format,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Path of the per-user configuration file, if the platform has one.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vskill/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => {
                warn!("config directory not found, skipping global config");
                Ok(None)
            }
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| VsError::Config(format!("read config {}: {err}", path.display())))?;
        let mut patch: ConfigPatch = toml::from_str(&raw)
            .map_err(|err| VsError::Config(format!("parse config {}: {err}", path.display())))?;
        if let Some(dir) = path.parent() {
            patch.resolve_paths(dir);
        }
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if env_bool("VSKILL_MACHINE")?.unwrap_or(false) {
            self.output.format = "json".to_string();
        }
        if let Some(value) = env_string("VSKILL_CATALOG_PATH") {
            self.catalog.path = Some(value);
        }
        if let Some(value) = env_bool("VSKILL_CATALOG_STRICT")? {
            self.catalog.strict = value;
        }
        if let Some(value) = env_string("VSKILL_OUTPUT_FORMAT") {
            self.output.format = value;
        }
        if env_bool("VSKILL_NO_COLOR")?.unwrap_or(false) {
            self.output.color = false;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let format = self.output.format.to_lowercase();
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(VsError::Config(format!(
                "unknown output format '{}' (expected one of: {})",
                self.output.format,
                OUTPUT_FORMATS.join(", ")
            )));
        }
        if let Some(path) = &self.catalog.path
            && path.trim().is_empty()
        {
            return Err(VsError::Config("catalog path is empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// YAML or JSON catalog to load instead of the built-in one
    #[serde(default)]
    pub path: Option<String>,
    /// Fail the load on any validation issue
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            strict: true,
        }
    }
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
        if let Some(value) = patch.strict {
            self.strict = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.color {
            self.color = value;
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "human".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub catalog: Option<CatalogPatch>,
    pub output: Option<OutputPatch>,
}

impl ConfigPatch {
    /// Anchor a relative catalog path at the directory of the file that set it.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let Some(path) = self.catalog.as_mut().and_then(|catalog| catalog.path.as_mut()) else {
            return;
        };
        if path.starts_with('~') || Path::new(path.as_str()).is_absolute() {
            return;
        }
        *path = config_dir.join(path.as_str()).to_string_lossy().into_owned();
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub path: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
    pub color: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    match env_string(key) {
        Some(value) => parse_bool(&value)
            .map(Some)
            .ok_or_else(|| VsError::Config(format!("invalid {key} value {value}: expected a boolean"))),
        None => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
