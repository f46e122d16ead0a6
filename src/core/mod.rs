//! Core skill types and taxonomy logic

pub mod anatomy;
pub mod context;
pub mod hierarchy;
pub mod skill;
pub mod transfer;

pub use anatomy::{
    AttributedExpression, ExpressionLayer, NAMING_FORMULA, attribute_industry, attribute_transfer,
};
pub use context::{IndustryResult, compare_all_industries, compare_industry};
pub use hierarchy::{
    EXPRESSION_SAMPLE_LIMIT, HierarchyEntry, HierarchyLevel, HierarchyPath, OccupationSlot,
};
pub use skill::{CatalogDocument, ExecutionContext, IndustryAnnotation, RoleVariant, Skill};
pub use transfer::{TransferResult, compare_roles};
