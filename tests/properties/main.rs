//! Property tests over the built-in catalog.

use proptest::prelude::*;

use vskill::SkillQueries;
use vskill::core::EXPRESSION_SAMPLE_LIMIT;
use vskill::error::suggest_similar_ids;

fn queries() -> SkillQueries {
    SkillQueries::builtin().unwrap()
}

/// (skill id, source role, target role) drawn from the built-in catalog.
fn arb_transition() -> impl Strategy<Value = (String, String, String)> {
    let queries = queries();
    let triples: Vec<(String, String, String)> = queries
        .list_skills()
        .flat_map(|skill| {
            skill.role_ids().flat_map(move |source| {
                skill
                    .role_ids()
                    .map(move |target| (skill.id.clone(), source.to_string(), target.to_string()))
            })
        })
        .collect();
    prop::sample::select(triples)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transfer_buckets_match_role_definitions((skill_id, source, target) in arb_transition()) {
        let queries = queries();
        let skill = queries.get_skill(&skill_id).unwrap();
        let result = queries.compare_roles(&skill_id, &source, &target).unwrap();

        prop_assert_eq!(&result.core, &skill.core_expressions);
        prop_assert_eq!(&result.left_behind, &skill.roles[source.as_str()].expressions);
        prop_assert_eq!(&result.newly_required, &skill.roles[target.as_str()].expressions);
        prop_assert_eq!(
            result.summary(),
            format!("{} Core + {} New", result.core.len(), result.newly_required.len())
        );
    }

    #[test]
    fn reversed_transfer_swaps_buckets((skill_id, source, target) in arb_transition()) {
        let queries = queries();
        let forward = queries.compare_roles(&skill_id, &source, &target).unwrap();
        let back = queries.compare_roles(&skill_id, &target, &source).unwrap();
        prop_assert_eq!(forward.left_behind, back.newly_required);
        prop_assert_eq!(forward.newly_required, back.left_behind);
        prop_assert_eq!(forward.core, back.core);
    }

    #[test]
    fn any_industry_keeps_core(skill_idx in 0usize..2, industry in "[a-z]{1,12}") {
        let queries = queries();
        let skill = queries.list_skills().nth(skill_idx).unwrap();
        let result = queries.compare_industry(&skill.id, &industry).unwrap();
        prop_assert_eq!(&result.core, &skill.core_expressions);
        prop_assert_eq!(
            result.industry_expressions.as_slice(),
            skill.industry_expressions(&industry)
        );
    }

    #[test]
    fn unknown_skills_never_resolve(id in "[a-z_]{1,16}") {
        let queries = queries();
        prop_assume!(queries.store().skill_ids().all(|known| known != id));
        prop_assert!(queries.resolve_hierarchy(&id).is_err());
        prop_assert!(queries.compare_industry(&id, "retail").is_err());
    }

    #[test]
    fn suggestions_respect_limit(query in "[a-z_]{0,12}", limit in 0usize..4) {
        let ids = ["data_prep", "gen_ai", "data_viz", "data_ops", "gen_text"];
        let suggestions = suggest_similar_ids(&query, ids, limit);
        prop_assert!(suggestions.len() <= limit);
        prop_assert!(suggestions.iter().all(|s| ids.contains(&s.as_str())));
    }
}

#[test]
fn hierarchy_sample_is_capped() {
    let queries = queries();
    for skill in queries.list_skills() {
        let path = queries.resolve_hierarchy(&skill.id).unwrap();
        assert!(path.expressions.len() <= EXPRESSION_SAMPLE_LIMIT);
        assert!(!path.is_bound());
    }
}
