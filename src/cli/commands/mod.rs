//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command
//!
//! `validate` reports an invalid catalog through its exit status, so
//! [`run`] returns whether the command succeeded.

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod anatomy;
pub mod config;
pub mod context;
pub mod hierarchy;
pub mod industries;
pub mod list;
pub mod show;
pub mod transfer;
pub mod validate;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<bool> {
    let ran = match command {
        Commands::Validate(args) => return validate::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Hierarchy(args) => hierarchy::run(ctx, args),
        Commands::Transfer(args) => transfer::run(ctx, args),
        Commands::Context(args) => context::run(ctx, args),
        Commands::Industries(args) => industries::run(ctx, args),
        Commands::Anatomy(args) => anatomy::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    };
    ran.map(|()| true)
}
