//! vskill validate - Validate a skill catalog

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::app::{self, AppContext};
use crate::catalog::{self, CatalogSource, validate_document};
use crate::cli::formatters::ValidationReport;
use crate::cli::output::{OutputFormat, emit};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file to validate instead of the configured one
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Returns whether the catalog is valid.
pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<bool> {
    check(&ctx.config, ctx.output_format, args)
}

/// Validate without an [`AppContext`], for when the configured catalog
/// fails a strict load.
pub fn run_without_context(cli: &Cli, args: &ValidateArgs) -> Result<bool> {
    let project_root = std::env::current_dir()?;
    let config = app::load_config(cli, &project_root)?;
    let format = app::resolve_output_format(cli, &config)?;
    app::apply_color_mode(cli, &config, format);
    check(&config, format, args)
}

fn check(config: &Config, format: OutputFormat, args: &ValidateArgs) -> Result<bool> {
    let (doc, source) = match &args.file {
        Some(path) => (
            catalog::read_document(path)?,
            CatalogSource::File(path.clone()),
        ),
        None => catalog::configured_document(&config.catalog)?,
    };

    let issues = validate_document(&doc);
    info!(catalog = %source, issues = issues.len(), "validated catalog");

    let report = ValidationReport::new(source.to_string(), doc.skills.len(), issues);
    emit(&report, format)?;
    Ok(report.valid)
}
