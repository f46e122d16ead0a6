//! Catalog loading through the public API.

use std::path::PathBuf;

use tempfile::TempDir;
use vskill::VsError;
use vskill::catalog::{CatalogSource, CatalogStore, builtin_document, validate_document};
use vskill::config::CatalogConfig;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn builtin_catalog_is_valid() {
    let doc = builtin_document().unwrap();
    assert!(validate_document(&doc).is_empty());
    assert_eq!(doc.skills.len(), 2);
    assert_eq!(doc.industries.len(), 3);
}

#[test]
fn duplicate_role_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "dup.yaml",
        "skills:\n  - id: a\n    name: A\n    category: X\n    core_expressions: [c]\n    roles:\n      r:\n        title: R\n      r:\n        title: R again\n",
    );
    let err = CatalogStore::from_path(&path, true).unwrap_err();
    assert!(matches!(err, VsError::CatalogParse(ref msg) if msg.contains("duplicate")));
}

#[test]
fn unannotated_industry_is_an_issue() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "industry.yaml",
        "skills:
  - id: a
    name: A
    category: X
    core_expressions: [c]
    roles:
      r1: {title: One}
      r2: {title: Two}
    industries:
      mining: [Check ventilation]
",
    );
    let err = CatalogStore::from_path(&path, true).unwrap_err();
    let VsError::InvalidCatalog { issues, .. } = err else {
        panic!("expected invalid catalog");
    };
    insta::assert_snapshot!(issues[0].to_string(), @"a: industry 'mining' has no annotation in the catalog");

    let lenient = CatalogStore::from_path(&path, false).unwrap();
    assert_eq!(lenient.industries_for("a").unwrap(), vec!["mining"]);
    assert!(lenient.industry_annotation("mining").is_err());
}

#[test]
fn role_repeating_core_is_an_issue() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "repeat.json",
        r#"{"skills":[{"id":"a","name":"A","category":"X","core_expressions":["c"],
            "roles":{"r1":{"title":"One","expressions":["c"]},"r2":{"title":"Two"}}}]}"#,
    );
    let err = CatalogStore::load(&CatalogConfig {
        path: Some(path.display().to_string()),
        strict: true,
    })
    .unwrap_err();
    assert!(err.to_string().contains("role 'r1' repeats core expression 'c'"));
}

#[test]
fn lenient_store_keeps_first_duplicate_skill() {
    let mut doc = builtin_document().unwrap();
    let mut copy = doc.skills[0].clone();
    copy.name = "Second definition".to_string();
    doc.skills.push(copy);

    assert!(CatalogStore::from_document(doc.clone(), CatalogSource::Builtin, true).is_err());
    let store = CatalogStore::from_document(doc, CatalogSource::Builtin, false).unwrap();
    assert_eq!(store.len(), 2);
    assert_ne!(store.get_skill("data_prep").unwrap().name, "Second definition");
}
