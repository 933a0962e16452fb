//! Filter pipeline
//!
//! One pass over the collection with every predicate ANDed together.
//! Survivors keep their relative order, so downstream stages see load
//! order until the sort runs.

use chrono::Utc;

use crate::models::Design;

use super::params::DesignQuery;
use super::predicates::*;

/// Run `query` against `designs`, preserving the relative order of
/// survivors.
///
/// Duplicate suppression is positional against the input order, so the
/// collection must still be in load order (the upstream sheet is sorted
/// by design number) for it to catch anything. Duplicates that are not
/// adjacent survive.
pub fn filter_designs(designs: &[Design], query: &DesignQuery) -> Vec<Design> {
    let reference = query.age_reference.unwrap_or_else(Utc::now);
    let similar_reference = query
        .similar_to_id
        .and_then(|id| designs.iter().find(|design| design.id == id));

    // query.tags is intentionally not consulted; see DesignQuery::tags.
    designs
        .iter()
        .enumerate()
        .filter(|(index, design)| {
            is_published(design)
                && has_real_design_number(design)
                && (query.allow_duplicate_design_numbers || is_not_duplicate(designs, *index))
                && matches_type(design, query.design_type)
                && matches_category(design, query.category.as_deref())
                && matches_subcategories(design, query.subcategories.as_deref(), reference)
                && (!query.only_featured || design.effectively_featured_at(reference))
                && matches_keywords(design, query.keywords.as_deref())
                && (!query.exclude_prioritized || design.priority.is_none())
                && similar_reference.is_none_or(|reference_design| {
                    is_similar(design, reference_design, DEFAULT_MIN_SHARED_TAGS)
                })
        })
        .map(|(_, design)| design.clone())
        .collect()
}
