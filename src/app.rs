//! Application context shared by every command.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::CatalogStore;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{Result, VsError};
use crate::query::SkillQueries;

pub struct AppContext {
    pub project_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub config: Config,
    pub queries: SkillQueries,
    pub output_format: OutputFormat,
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = load_config(cli, &project_root)?;
        let output_format = resolve_output_format(cli, &config)?;
        apply_color_mode(cli, &config, output_format);

        let store = CatalogStore::load(&config.catalog)?;
        debug!(catalog = %store.source(), skills = store.len(), "catalog ready");

        Ok(Self {
            project_root,
            config_path: cli.config.clone(),
            config,
            queries: SkillQueries::new(store),
            output_format,
            robot_mode: output_format.is_json(),
        })
    }

    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        self.queries.store()
    }
}

/// Load configuration and apply the `--catalog` override.
pub fn load_config(cli: &Cli, project_root: &Path) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref(), project_root)?;
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.display().to_string());
    }
    Ok(config)
}

/// Command-line flags win over `[output] format`.
pub fn resolve_output_format(cli: &Cli, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = cli.output_format() {
        return Ok(format);
    }
    OutputFormat::from_name(&config.output.format).ok_or_else(|| {
        VsError::Config(format!("unknown output format '{}'", config.output.format))
    })
}

pub fn apply_color_mode(cli: &Cli, config: &Config, format: OutputFormat) {
    if cli.plain || !config.output.color || !format.use_colors() {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
    }
}
