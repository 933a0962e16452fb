//! Query parameters for design searches

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DesignType;

/// Parameter bundle recognized by the filter pipeline.
///
/// Every field is optional; an absent field never constrains the
/// result, so the default value is the browse-everything query. Wire
/// names are camelCase to match the public query API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignQuery {
    /// Free-text terms, each matched as a case-insensitive substring of
    /// the name, description, tag values, hierarchy text, and design
    /// number. One hit on any term keeps the design.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Category name, matched case-insensitively against the category
    /// half of each hierarchy slot. The literal "Quick Search" is an
    /// umbrella that matches every design.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Subcategory names, matched case-insensitively against the
    /// subcategory half of each hierarchy slot. "New Designs" and
    /// "Classics" are virtual shelves resolved from the design age
    /// instead of the slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<String>>,
    /// Accepted for wire compatibility but never applied; tag browsing
    /// reaches tags through `keywords`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_type: Option<DesignType>,
    /// Keep only effectively featured designs.
    pub only_featured: bool,
    /// Disable adjacent-duplicate suppression and return every variant
    /// of a design number.
    pub allow_duplicate_design_numbers: bool,
    /// Drop designs that carry a manual priority rank.
    pub exclude_prioritized: bool,
    /// Keep only designs sharing enough tags with the referenced design.
    /// An id that resolves to no design applies no constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_to_id: Option<u32>,
    /// Instant used for age classification; `None` means now. Pin this
    /// for reproducible results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_reference: Option<DateTime<Utc>>,
}

impl DesignQuery {
    /// Add free-text search terms.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to designs shelved under any of the given subcategories.
    pub fn with_subcategories<I, S>(mut self, subcategories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subcategories = Some(subcategories.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to one production method.
    pub fn with_design_type(mut self, design_type: DesignType) -> Self {
        self.design_type = Some(design_type);
        self
    }

    /// Keep only effectively featured designs.
    pub fn featured_only(mut self) -> Self {
        self.only_featured = true;
        self
    }

    /// Return every variant of a duplicated design number.
    pub fn with_duplicates(mut self) -> Self {
        self.allow_duplicate_design_numbers = true;
        self
    }

    /// Drop designs that carry a manual priority rank.
    pub fn without_prioritized(mut self) -> Self {
        self.exclude_prioritized = true;
        self
    }

    /// Keep only designs similar to the one with the given id.
    pub fn similar_to(mut self, id: u32) -> Self {
        self.similar_to_id = Some(id);
        self
    }

    /// Pin the instant used for age classification.
    pub fn at(mut self, reference: DateTime<Utc>) -> Self {
        self.age_reference = Some(reference);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_unconstrained() {
        let query = DesignQuery::default();
        assert!(query.keywords.is_none());
        assert!(query.category.is_none());
        assert!(query.subcategories.is_none());
        assert!(query.design_type.is_none());
        assert!(!query.only_featured);
        assert!(!query.allow_duplicate_design_numbers);
        assert!(!query.exclude_prioritized);
        assert!(query.similar_to_id.is_none());
    }

    #[test]
    fn test_builders_set_fields() {
        let query = DesignQuery::default()
            .with_keywords(["Tough"])
            .with_category("Screen Print")
            .with_subcategories(["Staff Favorites"])
            .with_design_type(DesignType::ScreenPrint)
            .featured_only()
            .similar_to(7);
        assert_eq!(query.keywords.as_deref(), Some(&["Tough".to_string()][..]));
        assert_eq!(query.category.as_deref(), Some("Screen Print"));
        assert_eq!(query.design_type, Some(DesignType::ScreenPrint));
        assert!(query.only_featured);
        assert_eq!(query.similar_to_id, Some(7));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_string(&DesignQuery::default().with_duplicates()).unwrap();
        assert!(json.contains("allowDuplicateDesignNumbers"));

        let parsed: DesignQuery =
            serde_json::from_str(r#"{"onlyFeatured":true,"similarToId":3}"#).unwrap();
        assert!(parsed.only_featured);
        assert_eq!(parsed.similar_to_id, Some(3));
    }
}
