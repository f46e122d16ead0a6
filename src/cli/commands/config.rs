//! vskill config - Show the effective configuration

use clap::Args;
use itertools::Itertools;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{Formattable, HumanLayout, emit, tsv_row};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::{Result, VsError};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print a single key (e.g. `catalog.strict`)
    pub key: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct ConfigView {
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit_path: Option<String>,
    global_path: Option<String>,
    project_path: String,
    #[serde(flatten)]
    config: Config,
}

impl ConfigView {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "catalog.path",
                self.config
                    .catalog
                    .path
                    .clone()
                    .unwrap_or_else(|| "(builtin)".to_string()),
            ),
            ("catalog.strict", self.config.catalog.strict.to_string()),
            ("output.format", self.config.output.format.clone()),
            ("output.color", self.config.output.color.to_string()),
        ]
    }
}

impl Formattable for ConfigView {
    fn format_human(&self) -> String {
        let mut layout = HumanLayout::new();
        layout.title("Configuration");
        for (key, value) in self.entries() {
            layout.kv(key, &value);
        }
        layout.blank().section("Sources");
        if let Some(path) = &self.explicit_path {
            layout.kv("explicit", path);
        } else {
            layout.kv("global", self.global_path.as_deref().unwrap_or("-"));
            layout.kv("project", &self.project_path);
        }
        layout.build()
    }

    fn format_plain(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["key", "value"])];
        rows.extend(
            self.entries()
                .into_iter()
                .map(|(key, value)| tsv_row([key, value.as_str()])),
        );
        rows.join("\n")
    }
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let view = ConfigView {
        explicit_path: ctx
            .config_path
            .as_ref()
            .map(|path| path.display().to_string()),
        global_path: Config::global_path().map(|path| path.display().to_string()),
        project_path: ctx
            .project_root
            .join(PROJECT_CONFIG_FILE)
            .display()
            .to_string(),
        config: ctx.config.clone(),
    };

    match &args.key {
        Some(key) => {
            let value = view
                .entries()
                .into_iter()
                .find(|(name, _)| *name == key.as_str())
                .map(|(_, value)| value)
                .ok_or_else(|| VsError::Config(format!("unknown config key '{key}'")))?;
            println!("{value}");
            Ok(())
        }
        None => emit(&view, ctx.output_format),
    }
}
