use std::path::PathBuf;

use tempfile::TempDir;

use crate::catalog::{CatalogSource, CatalogStore};
use crate::core::skill::{
    CatalogDocument, ExecutionContext, IndustryAnnotation, RoleVariant, Skill,
};

/// Isolated directory for catalog and config files.
pub struct CatalogFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl CatalogFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        println!("[FIXTURE] Created temp directory: {root:?}");
        Self { temp_dir, root }
    }

    /// Write a file relative to the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Serialize a document as YAML and write it.
    pub fn write_catalog(&self, relative_path: &str, doc: &CatalogDocument) -> PathBuf {
        let raw = if relative_path.ends_with(".json") {
            serde_json::to_string_pretty(doc).expect("Failed to serialize catalog")
        } else {
            serde_yaml::to_string(doc).expect("Failed to serialize catalog")
        };
        self.create_file(relative_path, &raw)
    }
}

/// Two-skill catalog small enough to reason about by hand.
///
/// `charting` has two roles and no industries; `forecasting` has three
/// roles and one annotated industry.
pub fn minimal_document() -> CatalogDocument {
    let mut doc = CatalogDocument::default();
    doc.industries.insert(
        "energy".to_string(),
        IndustryAnnotation::new("Energy", "Grid Reliability", "Add load context"),
    );
    doc.industries.insert(
        "media".to_string(),
        IndustryAnnotation::new("Media", "Audience Trust", "Add editorial context"),
    );

    doc.skills.push(
        Skill::new("charting", "Charting", "Communication")
            .with_core(["Pick a chart type", "Label axes"])
            .with_role(
                "analyst",
                RoleVariant::new("Analyst").with_expressions(["Build dashboard"]),
            )
            .with_role(
                "designer",
                RoleVariant::new("Designer")
                    .with_expressions(["Apply brand palette", "Export vector art"])
                    .with_context(ExecutionContext::narrative("Visual storytelling", "Media")),
            ),
    );
    doc.skills.push(
        Skill::new("forecasting", "Forecasting", "Analytics")
            .with_core(["Choose a horizon", "Backtest the model"])
            .with_role(
                "planner",
                RoleVariant::new("Planner").with_expressions(["Set inventory targets"]),
            )
            .with_role(
                "scientist",
                RoleVariant::new("Scientist")
                    .with_expressions(["Tune seasonal terms", "Report intervals"]),
            )
            .with_role("executive", RoleVariant::new("Executive"))
            .with_industry("energy", ["Model peak demand"]),
    );
    doc
}

pub fn minimal_store() -> CatalogStore {
    CatalogStore::from_document(minimal_document(), CatalogSource::Builtin, true)
        .expect("minimal document is valid")
}
