//! vskill anatomy - Expression layers and the naming formula

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::AnatomyView;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AnatomyArgs {}

pub fn run(ctx: &AppContext, _args: &AnatomyArgs) -> Result<()> {
    emit(&AnatomyView::new(), ctx.output_format)
}
