//! vskill transfer - Compare a skill between two roles

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::TransferReport;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Skill ID to compare
    pub skill: String,

    /// Source role ID (default: the skill's first role)
    pub source: Option<String>,

    /// Target role ID (default: the skill's second role)
    pub target: Option<String>,
}

pub fn run(ctx: &AppContext, args: &TransferArgs) -> Result<()> {
    let result = ctx.queries.compare_roles_or_default(
        &args.skill,
        args.source.as_deref(),
        args.target.as_deref(),
    )?;
    emit(&TransferReport::new(result), ctx.output_format)
}
