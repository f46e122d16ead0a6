//! Load-time catalog validation.
//!
//! Every rule is checked and every violation collected, so a malformed
//! catalog is reported in one pass instead of one `NotFound` at a time.

use std::collections::HashSet;

use tracing::trace;

use crate::core::skill::{CatalogDocument, Skill};
use crate::error::CatalogIssue;

/// Minimum number of roles a skill needs to be comparable.
pub const MIN_ROLES_PER_SKILL: usize = 2;

/// Validate a catalog document and return every issue found.
pub fn validate_document(doc: &CatalogDocument) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if doc.skills.is_empty() {
        issues.push(CatalogIssue::catalog("catalog defines no skills"));
    }

    for (industry_id, annotation) in &doc.industries {
        for (field, value) in [
            ("title", &annotation.title),
            ("risk", &annotation.risk),
            ("task", &annotation.task),
        ] {
            if value.trim().is_empty() {
                issues.push(CatalogIssue::catalog(format!(
                    "industry '{industry_id}' has a blank {field}"
                )));
            }
        }
    }

    let mut seen_ids = HashSet::new();
    for skill in &doc.skills {
        if !seen_ids.insert(skill.id.as_str()) {
            issues.push(CatalogIssue::catalog(format!(
                "duplicate skill id '{}'",
                skill.id
            )));
        }
        validate_skill(skill, doc, &mut issues);
    }

    trace!(skills = doc.skills.len(), issues = issues.len(), "validated catalog document");
    issues
}

fn validate_skill(skill: &Skill, doc: &CatalogDocument, issues: &mut Vec<CatalogIssue>) {
    let id = skill.id.as_str();
    let mut push = |message: String| issues.push(CatalogIssue::skill(id, message));

    if id.trim().is_empty() {
        push("skill id is blank".to_string());
    }
    if skill.name.trim().is_empty() {
        push("name is blank".to_string());
    }
    if skill.category.trim().is_empty() {
        push("category is blank".to_string());
    }

    if skill.core_expressions.is_empty() {
        push("core_expressions is empty".to_string());
    }
    check_expressions("core_expressions", &skill.core_expressions, &mut push);

    if skill.roles.len() < MIN_ROLES_PER_SKILL {
        push(format!(
            "needs at least {MIN_ROLES_PER_SKILL} roles to be comparable, found {}",
            skill.roles.len()
        ));
    }

    let core: HashSet<&str> = skill.core_expressions.iter().map(String::as_str).collect();
    for (role_id, role) in &skill.roles {
        if role_id.trim().is_empty() {
            push("role id is blank".to_string());
        }
        if role.title.trim().is_empty() {
            push(format!("role '{role_id}' has a blank title"));
        }
        check_expressions(&format!("role '{role_id}'"), &role.expressions, &mut push);
        for expression in &role.expressions {
            if core.contains(expression.as_str()) {
                push(format!(
                    "role '{role_id}' repeats core expression '{expression}'"
                ));
            }
        }
    }

    if let Some(industries) = &skill.industries {
        if industries.is_empty() {
            push("industries map is present but empty".to_string());
        }
        for (industry_id, expressions) in industries {
            if !doc.industries.contains_key(industry_id) {
                push(format!(
                    "industry '{industry_id}' has no annotation in the catalog"
                ));
            }
            check_expressions(&format!("industry '{industry_id}'"), expressions, &mut push);
        }
    }
}

fn check_expressions(owner: &str, expressions: &[String], push: &mut impl FnMut(String)) {
    let mut seen = HashSet::new();
    for expression in expressions {
        if expression.trim().is_empty() {
            push(format!("{owner} contains a blank expression"));
        } else if !seen.insert(expression.as_str()) {
            push(format!("{owner} lists '{expression}' more than once"));
        }
    }
}
