use colored::Colorize;
use serde::Serialize;

use crate::cli::formatters::{push_context, push_expressions};
use crate::cli::output::{Formattable, HumanLayout, tsv_row};
use crate::core::{AttributedExpression, HierarchyPath, TransferResult, attribute_transfer};

/// A role comparison together with its bound hierarchy path
#[derive(Debug, Clone, Serialize)]
pub struct TransferReport {
    #[serde(flatten)]
    pub transfer: TransferResult,
    pub summary: String,
    pub hierarchy: HierarchyPath,
    /// What the worker needs in the target role, by layer
    pub required: Vec<AttributedExpression>,
}

impl TransferReport {
    pub fn new(transfer: TransferResult) -> Self {
        Self {
            summary: transfer.summary(),
            hierarchy: transfer.hierarchy(),
            required: attribute_transfer(&transfer),
            transfer,
        }
    }

    fn buckets(&self) -> [(&'static str, &[String]); 3] {
        [
            ("core", self.transfer.core.as_slice()),
            ("left_behind", self.transfer.left_behind.as_slice()),
            ("newly_required", self.transfer.newly_required.as_slice()),
        ]
    }
}

impl Formattable for TransferReport {
    fn format_human(&self) -> String {
        let t = &self.transfer;
        let mut layout = HumanLayout::new();
        layout.title(&format!("Transfer: {}", t.skill_name));
        layout.kv("Skill Area", &t.category);
        layout.kv(
            "Move",
            &format!("{} → {}", t.source_title, t.target_title),
        );
        if t.is_same_role() {
            layout.kv("Note", "source and target are the same role");
        }

        layout
            .blank()
            .section(&format!("Retained Core ({})", t.core.len()));
        push_expressions(&mut layout, &"✓".green().to_string(), &t.core);

        layout
            .blank()
            .section(&format!("Left Behind ({})", t.left_behind.len()));
        push_expressions(&mut layout, &"-".red().to_string(), &t.left_behind);

        layout
            .blank()
            .section(&format!("Newly Required ({})", t.newly_required.len()));
        push_expressions(&mut layout, &"+".yellow().to_string(), &t.newly_required);

        layout
            .blank()
            .section(&format!("Source Context: {}", t.source_title));
        push_context(&mut layout, &t.source_context);
        layout
            .blank()
            .section(&format!("Target Context: {}", t.target_title));
        push_context(&mut layout, &t.target_context);

        layout.blank().kv("Summary", &self.summary.bold().to_string());
        layout.build()
    }

    fn format_plain(&self) -> String {
        let t = &self.transfer;
        let mut lines = vec![format!(
            "{} {} -> {}: {}",
            t.skill_id, t.source_role, t.target_role, self.summary
        )];
        for (bucket, expressions) in self.buckets() {
            lines.extend(expressions.iter().map(|expr| format!("{bucket}: {expr}")));
        }
        lines.join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["bucket", "expression"])];
        for (bucket, expressions) in self.buckets() {
            rows.extend(expressions.iter().map(|expr| tsv_row([bucket, expr.as_str()])));
        }
        rows.join("\n")
    }
}
