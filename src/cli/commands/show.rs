//! vskill show - Show skill details

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::SkillCard;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Skill ID to show
    pub skill: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let skill = ctx.queries.get_skill(&args.skill)?;
    emit(&SkillCard::new(skill), ctx.output_format)
}
