//! Proptest strategies for well-formed catalogs.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use crate::core::skill::{
    CatalogDocument, ExecutionContext, IndustryAnnotation, RoleVariant, Skill,
};

const INDUSTRY_IDS: [&str; 4] = ["energy", "finance", "media", "public_sector"];

fn arb_id() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{2,12}"
}

fn arb_expression() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}( [a-z]{2,8}){0,3}"
}

fn arb_expressions(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arb_expression(), 0..max).prop_map(|set| set.into_iter().collect())
}

fn arb_context() -> impl Strategy<Value = ExecutionContext> {
    prop_oneof![
        Just(ExecutionContext::default()),
        (
            prop::collection::vec("[A-Z][a-z]{2,8}", 1..4),
            arb_expression(),
            arb_expression()
        )
            .prop_map(|(tools, purpose, constraints)| {
                ExecutionContext::toolchain(tools, purpose, constraints)
            }),
        (arb_expression(), "[A-Z][a-z]{3,10}").prop_map(|(context, industry_example)| {
            ExecutionContext::narrative(context, industry_example)
        }),
        (arb_id(), 1u32..500).prop_map(|(key, count)| ExecutionContext::new().with(key, count)),
    ]
}

fn arb_role() -> impl Strategy<Value = RoleVariant> {
    ("[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?", arb_expressions(5), arb_context()).prop_map(
        |(title, expressions, context)| {
            RoleVariant::new(title)
                .with_expressions(expressions)
                .with_context(context)
        },
    )
}

/// A skill that passes validation: non-empty core, at least two roles,
/// role expressions disjoint from the core, industries from [`INDUSTRY_IDS`].
pub fn arb_skill() -> impl Strategy<Value = Skill> {
    (
        arb_id(),
        "[A-Z][a-z]{2,10}( [a-z]{2,10}){1,3}",
        "[A-Z][a-z]{3,12}",
        prop::collection::btree_set(arb_expression(), 1..6),
        prop::collection::btree_map(arb_id(), arb_role(), 2..5),
        prop::option::of(prop::collection::btree_map(
            prop::sample::select(INDUSTRY_IDS.to_vec()),
            arb_expressions(4),
            1..4,
        )),
    )
        .prop_map(|(id, name, category, core, roles, industries)| {
            build_skill(id, name, category, &core, roles, industries)
        })
}

fn build_skill(
    id: String,
    name: String,
    category: String,
    core: &BTreeSet<String>,
    roles: BTreeMap<String, RoleVariant>,
    industries: Option<BTreeMap<&'static str, Vec<String>>>,
) -> Skill {
    let mut skill = Skill::new(id, name, category).with_core(core.iter().cloned());
    for (role_id, mut role) in roles {
        role.expressions.retain(|expression| !core.contains(expression));
        skill = skill.with_role(role_id, role);
    }
    for (industry_id, expressions) in industries.into_iter().flatten() {
        skill = skill.with_industry(industry_id, expressions);
    }
    skill
}

/// A valid document: every industry annotated, skill ids unique.
pub fn arb_document() -> impl Strategy<Value = CatalogDocument> {
    prop::collection::vec(arb_skill(), 1..6).prop_map(|skills| {
        let mut doc = CatalogDocument::default();
        for id in INDUSTRY_IDS {
            doc.industries.insert(
                id.to_string(),
                IndustryAnnotation::new(id.to_uppercase(), "Regulatory exposure", "Add context"),
            );
        }
        let mut seen = BTreeSet::new();
        doc.skills = skills
            .into_iter()
            .filter(|skill| seen.insert(skill.id.clone()))
            .collect();
        doc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, CatalogStore, validate_document};
    use crate::core::{compare_all_industries, compare_roles, hierarchy};

    fn store_for(doc: CatalogDocument) -> CatalogStore {
        CatalogStore::from_document(doc, CatalogSource::Builtin, true).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn generated_documents_validate(doc in arb_document()) {
            prop_assert!(validate_document(&doc).is_empty());
        }

        #[test]
        fn yaml_round_trip_preserves_catalog(doc in arb_document()) {
            let raw = serde_yaml::to_string(&doc).unwrap();
            let parsed: CatalogDocument = serde_yaml::from_str(&raw).unwrap();
            prop_assert_eq!(parsed, doc);
        }

        #[test]
        fn core_is_invariant_across_role_pairs(skill in arb_skill()) {
            let doc = CatalogDocument { skills: vec![skill.clone()], ..arb_annotations() };
            let store = store_for(doc);
            for source in skill.role_ids() {
                for target in skill.role_ids() {
                    let result = compare_roles(&store, &skill.id, source, target).unwrap();
                    prop_assert_eq!(&result.core, &skill.core_expressions);
                    prop_assert_eq!(&result.left_behind, &skill.roles[source].expressions);
                    prop_assert_eq!(&result.newly_required, &skill.roles[target].expressions);
                }
            }
        }

        #[test]
        fn core_is_invariant_across_industries(skill in arb_skill()) {
            let doc = CatalogDocument { skills: vec![skill.clone()], ..arb_annotations() };
            let store = store_for(doc);
            let results = compare_all_industries(&store, &skill.id).unwrap();
            prop_assert_eq!(results.len(), skill.industry_ids().count());
            for result in results {
                prop_assert_eq!(&result.core, &skill.core_expressions);
                prop_assert!(result.is_annotated());
            }
        }

        #[test]
        fn hierarchy_samples_at_most_two(skill in arb_skill()) {
            let doc = CatalogDocument { skills: vec![skill.clone()], ..arb_annotations() };
            let path = hierarchy::resolve(&store_for(doc), &skill.id).unwrap();
            prop_assert!(path.expressions.len() <= hierarchy::EXPRESSION_SAMPLE_LIMIT);
            prop_assert!(skill.core_expressions.starts_with(&path.expressions));
        }
    }

    fn arb_annotations() -> CatalogDocument {
        let mut doc = CatalogDocument::default();
        for id in INDUSTRY_IDS {
            doc.industries.insert(
                id.to_string(),
                IndustryAnnotation::new(id, "Risk", "Task"),
            );
        }
        doc
    }
}
