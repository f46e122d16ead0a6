use serde::Serialize;

use crate::cli::output::{Formattable, HumanLayout, tsv_row};
use crate::core::anatomy::{ExpressionLayer, FormulaPart, NAMING_FORMULA, formula_line};

#[derive(Debug, Clone, Serialize)]
pub struct LayerRow {
    pub layer: ExpressionLayer,
    pub label: &'static str,
    pub description: &'static str,
    pub term: &'static str,
    pub portable: bool,
}

/// The three expression layers and the naming formula
#[derive(Debug, Clone, Serialize)]
pub struct AnatomyView {
    pub layers: Vec<LayerRow>,
    pub formula: Vec<FormulaPart>,
}

impl Default for AnatomyView {
    fn default() -> Self {
        Self::new()
    }
}

impl AnatomyView {
    pub fn new() -> Self {
        Self {
            layers: ExpressionLayer::ALL
                .iter()
                .map(|&layer| LayerRow {
                    layer,
                    label: layer.label(),
                    description: layer.description(),
                    term: layer.term(),
                    portable: layer.is_portable(),
                })
                .collect(),
            formula: NAMING_FORMULA.to_vec(),
        }
    }
}

impl Formattable for AnatomyView {
    fn format_human(&self) -> String {
        let mut layout = HumanLayout::new().with_key_width(12);
        layout.title("Skill Anatomy");
        layout.section("Naming Formula");
        layout.push_line(formula_line());
        for part in &self.formula {
            layout.kv(part.name, part.role);
        }
        for row in &self.layers {
            layout.blank().section(row.label);
            layout.push_line(row.description);
            layout.kv("Term", row.term);
        }
        layout.build()
    }

    fn format_plain(&self) -> String {
        let mut lines = vec![formula_line()];
        lines.extend(
            self.layers
                .iter()
                .map(|row| format!("{}: {}", row.label, row.term)),
        );
        lines.join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["layer", "label", "term", "description"])];
        rows.extend(self.layers.iter().map(|row| {
            tsv_row([row.layer.key(), row.label, row.term, row.description])
        }));
        rows.join("\n")
    }
}
