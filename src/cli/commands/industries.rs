//! vskill industries - Show the industry annotation table

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::IndustryTable;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct IndustriesArgs {
    /// Show only this industry (fails if it has no annotation)
    pub industry: Option<String>,
}

pub fn run(ctx: &AppContext, args: &IndustriesArgs) -> Result<()> {
    let mut table = IndustryTable::from_store(ctx.store());
    if let Some(industry_id) = &args.industry {
        ctx.store().industry_annotation(industry_id)?;
        table.industries.retain(|row| &row.id == industry_id);
    }
    emit(&table, ctx.output_format)
}
