//! Verified Skill data structures
//!
//! A skill is a stable core of expressions plus role-specific and
//! industry-specific context expressions. These types are the declared schema
//! of a catalog document; validation lives in [`crate::catalog::validation`].

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Verified Skill: the portable, role-independent unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique symbolic key
    pub id: String,
    /// Descriptive phrase (Action + Result + optional Context)
    pub name: String,
    /// Skill Area this skill belongs to
    pub category: String,
    /// Expressions that hold for every role and industry, in display order
    pub core_expressions: Vec<String>,
    /// Role variants keyed by role id; insertion order is the default
    /// source/target ordering
    #[serde(deserialize_with = "deserialize_unique_map")]
    pub roles: IndexMap<String, RoleVariant>,
    /// Industry-specific expressions, only for industry-sensitive skills
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_unique_map"
    )]
    pub industries: Option<IndexMap<String, Vec<String>>>,
}

impl Skill {
    /// Create a skill with no roles or industries.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            core_expressions: Vec::new(),
            roles: IndexMap::new(),
            industries: None,
        }
    }

    #[must_use]
    pub fn with_core<I, S>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_expressions = expressions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_role(mut self, role_id: impl Into<String>, role: RoleVariant) -> Self {
        self.roles.insert(role_id.into(), role);
        self
    }

    #[must_use]
    pub fn with_industry<I, S>(mut self, industry_id: impl Into<String>, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.industries
            .get_or_insert_with(IndexMap::new)
            .insert(
                industry_id.into(),
                expressions.into_iter().map(Into::into).collect(),
            );
        self
    }

    pub fn role(&self, role_id: &str) -> Option<&RoleVariant> {
        self.roles.get(role_id)
    }

    pub fn role_ids(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Industry ids this skill carries, in catalog order.
    pub fn industry_ids(&self) -> impl Iterator<Item = &str> {
        self.industries
            .iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Industry-specific expressions; empty when the skill is not
    /// industry-sensitive or does not list the industry.
    pub fn industry_expressions(&self, industry_id: &str) -> &[String] {
        self.industries
            .as_ref()
            .and_then(|map| map.get(industry_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[must_use]
    pub const fn is_industry_sensitive(&self) -> bool {
        self.industries.is_some()
    }

    /// The first two role ids in insertion order.
    pub fn default_role_pair(&self) -> Option<(&str, &str)> {
        let mut ids = self.role_ids();
        Some((ids.next()?, ids.next()?))
    }
}

/// The role-specific facet of a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleVariant {
    /// Display name of the occupation
    pub title: String,
    /// Expressions required in addition to the core in this role
    #[serde(default)]
    pub expressions: Vec<String>,
    /// Display-only description of the working environment
    #[serde(default)]
    pub execution_context: ExecutionContext,
}

impl RoleVariant {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            expressions: Vec::new(),
            execution_context: ExecutionContext::default(),
        }
    }

    #[must_use]
    pub fn with_expressions<I, S>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expressions = expressions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.execution_context = context;
        self
    }
}

/// Where and how a skill is exercised. Never compared, only displayed.
///
/// A free-form attribute set in catalog order. `tools`/`purpose`/`constraints`
/// and `context`/`industry_example` are the conventional keys; any other key
/// and any scalar or list value is kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionContext {
    #[serde(deserialize_with = "deserialize_unique_map")]
    attributes: IndexMap<String, Value>,
}

impl ExecutionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tools, purpose and constraints of a role.
    pub fn toolchain<I, S>(
        tools: I,
        purpose: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tools: Vec<Value> = tools
            .into_iter()
            .map(|tool| Value::String(tool.into()))
            .collect();
        Self::new()
            .with("tools", tools)
            .with("purpose", purpose.into())
            .with("constraints", constraints.into())
    }

    /// Narrative context with an example industry.
    pub fn narrative(context: impl Into<String>, industry_example: impl Into<String>) -> Self {
        Self::new()
            .with("context", context.into())
            .with("industry_example", industry_example.into())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// One-line description: the tool list, else the narrative context, else
    /// every attribute.
    #[must_use]
    pub fn summary(&self) -> String {
        if let Some(tools) = self.get("tools") {
            return render_value(tools);
        }
        if let Some(context) = self.get("context") {
            return render_value(context);
        }
        self.attributes
            .iter()
            .map(|(key, value)| format!("{key}: {}", render_value(value)))
            .join(", ")
    }

    /// Labelled attributes in display order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.attributes
            .iter()
            .map(|(key, value)| (attribute_label(key), render_value(value)))
            .collect()
    }
}

fn attribute_label(key: &str) -> String {
    match key {
        "tools" => "Tools".to_string(),
        "purpose" => "Purpose".to_string(),
        "constraints" => "Constraints".to_string(),
        "context" => "Context".to_string(),
        "industry_example" => "Industry example".to_string(),
        other => other.to_string(),
    }
}

/// Display form of an attribute value: strings bare, lists comma-joined.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(render_value).join(", "),
        other => other.to_string(),
    }
}

/// Static `{title, risk, task}` annotation attached to an industry id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryAnnotation {
    pub title: String,
    pub risk: String,
    pub task: String,
}

impl IndustryAnnotation {
    pub fn new(
        title: impl Into<String>,
        risk: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            risk: risk.into(),
            task: task.into(),
        }
    }
}

/// A whole catalog as written in a YAML or JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Annotation table keyed by industry id
    #[serde(default, deserialize_with = "deserialize_unique_map")]
    pub industries: IndexMap<String, IndustryAnnotation>,
    /// Skills in listing order
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Deserialize a map, rejecting repeated keys instead of letting the last
/// one win.
fn deserialize_unique_map<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueMapVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueMapVisitor<V> {
        type Value = IndexMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map with unique keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                if map.contains_key(&key) {
                    return Err(de::Error::custom(format!("duplicate key `{key}`")));
                }
                map.insert(key, value);
            }
            Ok(map)
        }
    }

    deserializer.deserialize_map(UniqueMapVisitor(PhantomData))
}

fn deserialize_optional_unique_map<'de, D, V>(
    deserializer: D,
) -> Result<Option<IndexMap<String, V>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserialize_unique_map(deserializer).map(Some)
}
