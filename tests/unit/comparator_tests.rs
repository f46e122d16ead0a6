//! Comparators against the built-in catalog.

use vskill::SkillQueries;
use vskill::core::{ExecutionContext, ExpressionLayer, OccupationSlot, attribute_transfer};
use vskill::error::{ErrorCode, Lookup};

fn queries() -> SkillQueries {
    SkillQueries::builtin().unwrap()
}

#[test]
fn analyst_to_ml_engineer() {
    let result = queries()
        .compare_roles("data_prep", "analytics", "ml_engineering")
        .unwrap();
    assert_eq!(result.core.len(), 5);
    assert!(result.left_behind.is_empty());
    assert_eq!(
        result.newly_required,
        vec![
            "Design robust data partitioning schemes",
            "Validate representativeness (distribution checks)",
            "Generate synthetic datasets",
        ]
    );
    insta::assert_snapshot!(result.summary(), @"5 Core + 3 New");
}

#[test]
fn contexts_are_carried_not_compared() {
    let result = queries()
        .compare_roles("gen_ai", "data", "marketing")
        .unwrap();
    assert_eq!(
        result.source_context,
        ExecutionContext::narrative("Analysis Helper", "Healthcare")
    );
    insta::assert_snapshot!(result.target_context.summary(), @"Content Creation");
}

#[test]
fn transfer_layers_tag_core_and_career() {
    let result = queries()
        .compare_roles("data_prep", "engineering", "ml_engineering")
        .unwrap();
    let layers: Vec<ExpressionLayer> = attribute_transfer(&result)
        .into_iter()
        .map(|expr| expr.layer)
        .collect();
    assert_eq!(layers.len(), 8);
    assert!(layers[..5].iter().all(|layer| *layer == ExpressionLayer::Core));
    assert!(layers[5..].iter().all(|layer| *layer == ExpressionLayer::Career));
}

#[test]
fn hierarchy_binds_transition() {
    let path = queries()
        .compare_roles("gen_ai", "marketing", "software")
        .unwrap()
        .hierarchy();
    assert_eq!(
        path.occupation,
        OccupationSlot::Transition {
            source_title: "Marketing Specialist".to_string(),
            target_title: "Software Developer".to_string(),
        }
    );
    assert_eq!(path.expressions.len(), 2);
    assert_eq!(path.expression_summary.as_deref(), Some("4 Core + 3 New"));
}

#[test]
fn tech_industry_overlaps_software_role() {
    let queries = queries();
    let industry = queries.compare_industry("gen_ai", "tech").unwrap();
    let role = queries.store().get_role("gen_ai", "software").unwrap();
    assert_eq!(industry.industry_expressions, role.expressions);
    assert_eq!(industry.display_title(), "Software / IT");
}

#[test]
fn unknown_industry_is_not_an_error() {
    let result = queries().compare_industry("gen_ai", "mining").unwrap();
    assert!(!result.is_annotated());
    assert!(!result.has_industry_context());
    assert_eq!(result.display_title(), "mining");
    assert_eq!(result.core.len(), 4);
}

#[test]
fn lookup_errors_name_what_is_missing() {
    let queries = queries();
    let err = queries
        .compare_roles("data_prep", "analytics", "pilot")
        .unwrap_err();
    assert_eq!(err.lookup(), Some(&Lookup::role("data_prep", "pilot")));
    assert_eq!(err.code(), ErrorCode::RoleNotFound);

    let err = queries.compare_industry("nope", "retail").unwrap_err();
    assert_eq!(err.lookup(), Some(&Lookup::skill("nope")));
    assert!(queries.structured_error(&err).suggestion.contains("vskill list"));
}
