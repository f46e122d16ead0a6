//! vskill - Verified Skill taxonomy explorer
//!
//! Shows how a skill's core transfers across roles and industries.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vskill::app::AppContext;
use vskill::cli::output::{emit_json, robot_error_from_structured};
use vskill::cli::{Cli, Commands, commands};
use vskill::error::{StructuredError, VsError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ctx = match AppContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            return match &cli.command {
                // still report the issues of a catalog that failed to load
                Commands::Validate(args) => exit_status(
                    &cli,
                    None,
                    commands::validate::run_without_context(&cli, args),
                ),
                _ => report(&cli, None, &err),
            };
        }
    };

    exit_status(&cli, Some(&ctx), commands::run(&ctx, &cli.command))
}

fn exit_status(cli: &Cli, ctx: Option<&AppContext>, outcome: vskill::Result<bool>) -> ExitCode {
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => report(cli, ctx, &err),
    }
}

fn report(cli: &Cli, ctx: Option<&AppContext>, err: &VsError) -> ExitCode {
    let structured: StructuredError = match ctx {
        Some(ctx) => ctx.queries.structured_error(err),
        None => err.to_structured(),
    };
    let machine = ctx.map_or_else(|| cli.json_logs(), |ctx| ctx.robot_mode);

    if machine {
        // Machine mode: structured error envelope on stdout
        if emit_json(&robot_error_from_structured(structured.clone())).is_err() {
            eprintln!("Error: {structured}");
        }
    } else {
        eprintln!("Error: {err}");
        eprintln!("Hint: {}", structured.suggestion);
    }
    ExitCode::FAILURE
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,vskill=info",
        1 => "info,vskill=debug",
        2 => "debug,vskill=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.json_logs() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
