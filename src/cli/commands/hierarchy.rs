//! vskill hierarchy - Resolve a skill's hierarchy path

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::HierarchyView;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct HierarchyArgs {
    /// Skill ID to resolve
    pub skill: String,

    /// Bind Level 1 to a role transition
    #[arg(long, num_args = 2, value_names = ["SOURCE", "TARGET"])]
    pub bind: Option<Vec<String>>,

    /// Bind Level 1 to a single role
    #[arg(long, conflicts_with = "bind")]
    pub role: Option<String>,
}

pub fn run(ctx: &AppContext, args: &HierarchyArgs) -> Result<()> {
    let path = match (args.bind.as_deref(), args.role.as_deref()) {
        (Some([source, target]), _) => ctx
            .queries
            .compare_roles(&args.skill, source, target)?
            .hierarchy(),
        (_, Some(role_id)) => {
            let role = ctx.store().get_role(&args.skill, role_id)?;
            ctx.queries
                .resolve_hierarchy(&args.skill)?
                .bind_role(role.title.clone())
        }
        _ => ctx.queries.resolve_hierarchy(&args.skill)?,
    };

    emit(&HierarchyView::new(path), ctx.output_format)
}
