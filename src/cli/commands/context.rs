//! vskill context - Compare a skill across industries

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::IndustryReport;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Skill ID to compare
    pub skill: String,

    /// Industry ID (default: every industry the skill carries)
    pub industry: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ContextArgs) -> Result<()> {
    let skill = ctx.queries.get_skill(&args.skill)?;
    let results = match &args.industry {
        Some(industry) => vec![ctx.queries.compare_industry(&args.skill, industry)?],
        None => ctx.queries.compare_all_industries(&args.skill)?,
    };
    emit(&IndustryReport::new(skill, results), ctx.output_format)
}
