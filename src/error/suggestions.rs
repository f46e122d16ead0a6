//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints built
//! from the error context (the failed identifier, close matches, issue lists).

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    let base = match code {
        ErrorCode::SkillNotFound => suggest_skill_not_found(context),
        ErrorCode::RoleNotFound => suggest_role_not_found(context),
        ErrorCode::IndustryNotFound => suggest_industry_not_found(context),
        ErrorCode::CatalogInvalid => suggest_catalog_invalid(context),
        _ => code.suggestion().to_string(),
    };

    match did_you_mean(context) {
        Some(hint) => format!("{hint}\n{base}"),
        None => base,
    }
}

fn context_str<'a>(context: Option<&'a Value>, key: &str) -> Option<&'a str> {
    context.and_then(|c| c.get(key)).and_then(Value::as_str)
}

fn did_you_mean(context: Option<&Value>) -> Option<String> {
    let candidates = context
        .and_then(|c| c.get("did_you_mean"))
        .and_then(Value::as_array)?;
    let names: Vec<String> = candidates
        .iter()
        .filter_map(Value::as_str)
        .map(|s| format!("'{s}'"))
        .collect();
    if names.is_empty() {
        return None;
    }
    Some(format!("Did you mean {}?", names.join(" or ")))
}

fn suggest_skill_not_found(context: Option<&Value>) -> String {
    match context_str(context, "skill_id") {
        Some(skill_id) => format!(
            "Skill '{skill_id}' is not in the catalog. Run `vskill list` to see every skill id"
        ),
        None => ErrorCode::SkillNotFound.suggestion().to_string(),
    }
}

fn suggest_role_not_found(context: Option<&Value>) -> String {
    match context_str(context, "skill_id") {
        Some(skill_id) => format!(
            "Run `vskill show {skill_id}` to see the roles defined for '{skill_id}'"
        ),
        None => ErrorCode::RoleNotFound.suggestion().to_string(),
    }
}

fn suggest_industry_not_found(context: Option<&Value>) -> String {
    match context_str(context, "industry_id") {
        Some(industry_id) => format!(
            "Industry '{industry_id}' has no annotation. Run `vskill industries` to see the annotated industries"
        ),
        None => ErrorCode::IndustryNotFound.suggestion().to_string(),
    }
}

fn suggest_catalog_invalid(context: Option<&Value>) -> String {
    let issues = context
        .and_then(|c| c.get("issues"))
        .and_then(Value::as_array);
    match (context_str(context, "source"), issues) {
        (Some(source), Some(issues)) if !issues.is_empty() => format!(
            "Catalog {source} has {} issue(s). Run `vskill validate` to see each one",
            issues.len()
        ),
        _ => ErrorCode::CatalogInvalid.suggestion().to_string(),
    }
}

/// Rank known identifiers by similarity to an unknown one.
///
/// Used to build "did you mean" hints for `NotFound` errors.
pub fn suggest_similar_ids<'a>(
    query: &str,
    available: impl IntoIterator<Item = &'a str>,
    max_suggestions: usize,
) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<_> = available
        .into_iter()
        .map(|s| (s, similarity_score(&query_lower, &s.to_lowercase())))
        .filter(|(_, score)| *score > 0.3)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(s, _)| s.to_string())
        .collect()
}

/// Jaccard similarity over character trigrams, with a prefix fallback for
/// strings too short to have trigrams.
fn similarity_score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_trigrams: std::collections::HashSet<_> = trigrams(a).collect();
    let b_trigrams: std::collections::HashSet<_> = trigrams(b).collect();

    if a_trigrams.is_empty() || b_trigrams.is_empty() {
        if a.starts_with(b) || b.starts_with(a) {
            return 0.8;
        }
        if a.contains(b) || b.contains(a) {
            return 0.5;
        }
        return 0.0;
    }

    let intersection = a_trigrams.intersection(&b_trigrams).count();
    let union = a_trigrams.union(&b_trigrams).count();

    #[allow(clippy::cast_precision_loss)]
    let score = intersection as f64 / union as f64;
    score
}

fn trigrams(s: &str) -> impl Iterator<Item = &str> {
    (0..s.len().saturating_sub(2)).filter_map(move |i| s.get(i..i + 3))
}
