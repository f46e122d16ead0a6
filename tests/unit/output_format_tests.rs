//! Rendered output for each format.

use serde_json::Value;
use vskill::SkillQueries;
use vskill::cli::OutputFormat;
use vskill::cli::formatters::{AnatomyView, HierarchyView, IndustryReport, SkillCard, TransferReport};
use vskill::cli::output::Formattable;

fn queries() -> SkillQueries {
    SkillQueries::builtin().unwrap()
}

#[test]
fn json_envelope_wraps_data() {
    let queries = queries();
    let json = SkillCard::new(queries.get_skill("gen_ai").unwrap())
        .format(OutputFormat::Json)
        .unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["data"]["id"], "gen_ai");
    assert_eq!(parsed["data"]["industries"]["retail"][2], "Ensure brand consistency");
}

#[test]
fn jsonl_is_a_single_line() {
    let queries = queries();
    let report = TransferReport::new(
        queries
            .compare_roles("gen_ai", "software", "data")
            .unwrap(),
    );
    let output = report.format(OutputFormat::Jsonl).unwrap();
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn hierarchy_tsv_rows() {
    let view = HierarchyView::new(queries().resolve_hierarchy("data_prep").unwrap());
    let output = view.format(OutputFormat::Tsv).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[2], "2\tSkill Area\ttrue\tData");
    assert_eq!(lines[5], "4\tExpression\tfalse\tHandle missing or null values");
}

#[test]
fn industry_plain_lists_execution_expressions() {
    let queries = queries();
    let results = vec![queries.compare_industry("gen_ai", "retail").unwrap()];
    let report = IndustryReport::new(queries.get_skill("gen_ai").unwrap(), results);
    let output = report.format(OutputFormat::Plain).unwrap();
    insta::assert_snapshot!(output.lines().next().unwrap(), @"retail: Use product and pricing context");
    assert_eq!(output.lines().count(), 3);
}

#[test]
fn anatomy_json_marks_core_portable() {
    let json = AnatomyView::new().format(OutputFormat::Json).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["data"]["layers"][0]["layer"], "core");
    assert_eq!(parsed["data"]["layers"][0]["portable"], true);
    assert_eq!(parsed["data"]["formula"][2]["optional"], true);
}
