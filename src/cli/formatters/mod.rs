//! Output formatters for CLI commands
//!
//! Each formatter wraps a query result and renders it to every output
//! format (Human, JSON, JSONL, Plain, TSV).

mod anatomy;
mod hierarchy;
mod industry;
mod skill_card;
mod skill_table;
mod transfer;
mod validation;

pub use anatomy::AnatomyView;
pub use hierarchy::HierarchyView;
pub use industry::{IndustryReport, IndustryTable};
pub use skill_card::SkillCard;
pub use skill_table::SkillTable;
pub use transfer::TransferReport;
pub use validation::ValidationReport;

use crate::cli::output::HumanLayout;
use crate::core::ExecutionContext;

/// Placeholder line for an empty expression list.
pub(crate) const NONE_MARKER: &str = "(none)";

/// Append an execution context as key/value lines.
pub(crate) fn push_context(layout: &mut HumanLayout, context: &ExecutionContext) {
    if context.is_empty() {
        layout.push_line(NONE_MARKER);
        return;
    }
    for (key, value) in context.attributes() {
        layout.kv(&key, &value);
    }
}

/// Bulleted expressions, or the placeholder when there are none.
pub(crate) fn push_expressions(layout: &mut HumanLayout, marker: &str, expressions: &[String]) {
    if expressions.is_empty() {
        layout.push_line(NONE_MARKER);
        return;
    }
    for expression in expressions {
        layout.marked(marker, expression);
    }
}
