use serde_json::Value;

use super::fixture::{FORECASTING_CATALOG, TestFixture};

fn parse_json(output: &str) -> Value {
    serde_json::from_str(output).expect("stdout should be valid JSON")
}

#[test]
fn test_custom_catalog_workflow() {
    let fixture = TestFixture::with_catalog("test_custom_catalog_workflow", FORECASTING_CATALOG);

    let validate = fixture.run_vskill(&["-m", "validate"]);
    assert!(validate.success, "validate failed: {}", validate.stderr);
    let json = parse_json(&validate.stdout);
    assert_eq!(json["data"]["valid"], true);
    assert_eq!(json["data"]["skills"], 1);

    let list = fixture.run_vskill(&["-m", "list"]);
    assert!(list.success, "list failed: {}", list.stderr);
    assert_eq!(parse_json(&list.stdout)["data"]["skills"][0]["id"], "forecasting");

    let transfer = fixture.run_vskill(&["-m", "transfer", "forecasting"]);
    assert!(transfer.success, "transfer failed: {}", transfer.stderr);
    let data = &parse_json(&transfer.stdout)["data"];
    assert_eq!(data["summary"], "2 Core + 2 New");
    assert_eq!(data["left_behind"][0], "Set inventory targets");
    assert_eq!(data["target_context"]["owner"], "Forecasting guild");

    let context = fixture.run_vskill(&["--plain", "context", "forecasting"]);
    assert!(context.success, "context failed: {}", context.stderr);
    assert_eq!(context.stdout, "energy: Model peak demand\n");
}

#[test]
fn test_builtin_is_not_visible_with_custom_catalog() {
    let fixture = TestFixture::with_catalog("test_builtin_hidden", FORECASTING_CATALOG);

    let show = fixture.run_vskill(&["show", "gen_ai"]);
    assert!(!show.success);
    assert_eq!(show.exit_code, 1);
    assert!(show.stderr.contains("Not found: skill 'gen_ai'"));
}

#[test]
fn test_validate_reports_every_issue() {
    let fixture = TestFixture::new("test_validate_reports_every_issue");
    let path = fixture.write_file(
        "broken.yaml",
        "\
industries:
  energy: {title: Energy, risk: '', task: Add load context}
skills:
  - id: a
    name: ''
    category: X
    core_expressions: [c, c]
    roles:
      r1: {title: One}
",
    );

    let output = fixture.run_vskill(&["-m", "validate", "--file", path.to_str().unwrap()]);
    assert!(!output.success);
    let json = parse_json(&output.stdout);
    assert_eq!(json["data"]["valid"], false);
    let messages: Vec<&str> = json["data"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"industry 'energy' has a blank risk"));
    assert!(messages.contains(&"name is blank"));
    assert!(messages.contains(&"core_expressions lists 'c' more than once"));
    assert!(messages.iter().any(|msg| msg.starts_with("needs at least 2 roles")));
}

#[test]
fn test_unparseable_catalog_is_catalog_error() {
    let fixture = TestFixture::with_catalog("test_unparseable_catalog", "skills: [ {");

    let output = fixture.run_vskill(&["-m", "list"]);
    assert!(!output.success);
    let json = parse_json(&output.stdout);
    assert_eq!(json["status"]["error"]["category"], "catalog");
    assert_eq!(json["status"]["error"]["code"], "CATALOG_PARSE_ERROR");
}

#[test]
fn test_env_catalog_path_overrides_config() {
    let fixture = TestFixture::with_catalog("test_env_catalog_path", FORECASTING_CATALOG);
    let missing = fixture.path("missing.yaml");

    let output = fixture.run_vskill_with_env(
        &["list"],
        &[("VSKILL_CATALOG_PATH", missing.to_str().unwrap())],
    );
    assert!(!output.success);
    assert!(output.stderr.contains("missing.yaml"));
}
