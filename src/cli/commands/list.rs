//! vskill list - List every skill in the catalog

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::SkillTable;
use crate::cli::output::emit;
use crate::error::Result;
use crate::query::SkillSummary;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only skills in this Skill Area (case-insensitive)
    #[arg(long)]
    pub area: Option<String>,

    /// Only skills that carry industry-specific expressions
    #[arg(long)]
    pub industry_sensitive: bool,
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let skills: Vec<SkillSummary> = ctx
        .queries
        .list_skills()
        .filter(|skill| {
            args.area
                .as_deref()
                .is_none_or(|area| skill.category.eq_ignore_ascii_case(area))
        })
        .filter(|skill| !args.industry_sensitive || skill.is_industry_sensitive())
        .map(SkillSummary::from)
        .collect();

    emit(&SkillTable::new(skills), ctx.output_format)
}
