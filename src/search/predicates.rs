//! Predicate library for the filter pipeline
//!
//! Every predicate is pure and returns true when its parameter is
//! absent, so the pipeline can AND them together unconditionally.
//! Matching is case-insensitive throughout; the upstream sheets are
//! hand-edited and inconsistent about casing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{AgeClass, Design, DesignStatus, DesignType, split_hierarchy};

/// Umbrella category that matches every design.
pub const QUICK_SEARCH_CATEGORY: &str = "Quick Search";

/// Virtual shelf resolved from the design age, not the hierarchy slots.
const NEW_DESIGNS_SHELF: &str = "new designs";

/// Virtual shelf for everything that is not New.
const CLASSICS_SHELF: &str = "classics";

/// Tag ignored by similarity scoring. Nearly every design carries it,
/// so sharing it carries no signal.
const UNINFORMATIVE_TAG: &str = "union";

/// Shared-tag count required for two designs to count as similar.
pub const DEFAULT_MIN_SHARED_TAGS: usize = 3;

/// Draft rows never leave the pipeline.
pub fn is_published(design: &Design) -> bool {
    design.status != DesignStatus::Draft
}

/// Guards against rows whose design-number cell was empty upstream and
/// got stringified into the literal `"undefined"`.
pub fn has_real_design_number(design: &Design) -> bool {
    design.design_number != "undefined"
}

/// Positional duplicate suppression: drops a design whose immediate
/// predecessor in `designs` carries the same design number.
///
/// This only catches duplicates that are adjacent, which holds when the
/// collection is still in load order (the upstream sheet is sorted by
/// design number). Duplicates separated by another row are kept.
pub fn is_not_duplicate(designs: &[Design], index: usize) -> bool {
    index == 0 || designs[index - 1].design_number != designs[index].design_number
}

pub fn matches_type(design: &Design, wanted: Option<DesignType>) -> bool {
    wanted.is_none_or(|design_type| design.design_type == design_type)
}

/// Category match against the category half of any hierarchy slot.
pub fn matches_category(design: &Design, wanted: Option<&str>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    if wanted == QUICK_SEARCH_CATEGORY {
        return true;
    }
    let wanted = wanted.to_lowercase();
    design
        .hierarchy_values()
        .any(|hierarchy| split_hierarchy(hierarchy).0.to_lowercase() == wanted)
}

/// Subcategory match against the subcategory half of any hierarchy
/// slot, plus the two virtual shelves ("New Designs" and "Classics")
/// resolved from the design age at `reference`.
pub fn matches_subcategories(
    design: &Design,
    wanted: Option<&[String]>,
    reference: DateTime<Utc>,
) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    let wanted: Vec<String> = wanted.iter().map(|name| name.to_lowercase()).collect();
    if wanted.iter().any(|name| name == NEW_DESIGNS_SHELF)
        && design.age_class_at(reference) == AgeClass::New
    {
        return true;
    }
    if wanted.iter().any(|name| name == CLASSICS_SHELF)
        && design.age_class_at(reference) == AgeClass::Classic
    {
        return true;
    }
    design.hierarchy_values().any(|hierarchy| {
        split_hierarchy(hierarchy)
            .1
            .is_some_and(|subcategory| wanted.contains(&subcategory.to_lowercase()))
    })
}

/// Free-text match: any keyword appearing as a substring of the name,
/// description, any tag value, the joined hierarchy text, or the design
/// number keeps the design.
pub fn matches_keywords(design: &Design, wanted: Option<&[String]>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    let name = design.name.to_lowercase();
    let description = design
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let tags: Vec<String> = design.tag_values().map(|tag| tag.to_lowercase()).collect();
    let hierarchies = design
        .hierarchy_values()
        .map(|hierarchy| hierarchy.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let design_number = design.design_number.to_lowercase();

    wanted.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        name.contains(&keyword)
            || description.contains(&keyword)
            || tags.iter().any(|tag| tag.contains(&keyword))
            || hierarchies.contains(&keyword)
            || design_number.contains(&keyword)
    })
}

/// Exact (not substring) case-insensitive membership of any tag slot in
/// the wanted list.
///
/// Available to callers, but the combined pipeline deliberately does not
/// apply it; see [`DesignQuery::tags`](crate::search::DesignQuery::tags).
pub fn matches_tags(design: &Design, wanted: Option<&[String]>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    let wanted: Vec<String> = wanted.iter().map(|name| name.to_lowercase()).collect();
    design
        .tag_values()
        .any(|tag| wanted.contains(&tag.to_lowercase()))
}

/// Whether `design` shares at least `min_shared` informative tags with
/// `reference_design`.
pub fn is_similar(design: &Design, reference_design: &Design, min_shared: usize) -> bool {
    shared_tag_count(design, reference_design) >= min_shared
}

/// Count of distinct tags two designs share, compared case-insensitively
/// with the uninformative "union" tag left out of both sides.
pub fn shared_tag_count(design: &Design, other: &Design) -> usize {
    let informative = |design: &Design| -> HashSet<String> {
        design
            .tag_values()
            .map(|tag| tag.to_lowercase())
            .filter(|tag| tag != UNINFORMATIVE_TAG)
            .collect()
    };
    informative(design)
        .intersection(&informative(other))
        .count()
}
