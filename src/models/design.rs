//! Design Model
//!
//! The design record as loaded from the upstream sheets, plus the derived
//! facts the query pipeline consumes. Derived values (age class, effective
//! featured status, numeric design number) are computed on demand from the
//! stored fields and never cached on the record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of tag slots on a design row.
pub const TAG_SLOTS: usize = 12;

/// Number of category-hierarchy slots on a design row.
pub const SUBCATEGORY_SLOTS: usize = 5;

/// Separator between the category and subcategory halves of a hierarchy.
pub const HIERARCHY_SEPARATOR: &str = " > ";

/// Designs younger than this many days classify as New (two years).
const NEW_AGE_DAYS: i64 = 730;

/// Subcategory that promotes a New design to effectively featured.
const BEST_SELLERS: &str = "Best Sellers";

/// Production method of a design, as labeled in the source sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignType {
    #[serde(rename = "Screen Print")]
    ScreenPrint,
    Embroidery,
}

impl std::fmt::Display for DesignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScreenPrint => write!(f, "Screen Print"),
            Self::Embroidery => write!(f, "Embroidery"),
        }
    }
}

/// Publication status of a design row.
///
/// Draft rows are loaded and addressable by id but never appear in
/// query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignStatus {
    Draft,
    Published,
}

/// Two-bucket age classification. Designs younger than two years are
/// New; everything else, including undated designs, is Classic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeClass {
    New,
    Classic,
}

/// One design row.
///
/// The `id` is positional: it is assigned from the row's index at load
/// time and is only stable within a single collection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: u32,
    /// Display identifier, e.g. `"1320"` or `"1320 (Sleeve)"`. Not unique.
    pub design_number: String,
    pub design_type: DesignType,
    pub status: DesignStatus,
    /// Curator-set flag; see [`Design::effectively_featured`] for the
    /// value queries actually use.
    #[serde(default)]
    pub featured: bool,
    /// Manual ordering rank, smaller is more prominent. Most designs
    /// carry none.
    #[serde(default)]
    pub priority: Option<u32>,
    /// Release date in its upstream string form; parsed on demand.
    #[serde(default)]
    pub date: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Fixed tag slots in sheet order. Empty slots never match anything.
    #[serde(default)]
    pub tags: [Option<String>; TAG_SLOTS],
    /// Fixed `"Category > Subcategory"` hierarchy slots in sheet order.
    #[serde(default)]
    pub subcategories: [Option<String>; SUBCATEGORY_SLOTS],
}

impl Design {
    /// Iterate the filled tag slots.
    pub fn tag_values(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|tag| tag.as_deref())
    }

    /// Iterate the filled hierarchy slots.
    pub fn hierarchy_values(&self) -> impl Iterator<Item = &str> {
        self.subcategories.iter().filter_map(|sub| sub.as_deref())
    }

    /// Leading whitespace-delimited token of the design number parsed as
    /// an integer. `"1320 (Sleeve)"` yields `Some(1320)`; a fully
    /// non-numeric number like `"E11292"` yields `None`.
    pub fn numeric_design_number(&self) -> Option<i64> {
        self.design_number
            .split_whitespace()
            .next()
            .and_then(|token| token.parse().ok())
    }

    /// The release date parsed from its upstream string form.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD`, and `MM/DD/YYYY`; anything else
    /// yields `None`.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        ["%Y-%m-%d", "%m/%d/%Y"].iter().find_map(|format| {
            NaiveDate::parse_from_str(raw, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
    }

    /// Age classification relative to `reference`. A missing or
    /// unparseable date counts as infinitely old.
    pub fn age_class_at(&self, reference: DateTime<Utc>) -> AgeClass {
        match self.parsed_date() {
            Some(date) if (reference - date).num_days() < NEW_AGE_DAYS => AgeClass::New,
            _ => AgeClass::Classic,
        }
    }

    /// Age classification relative to the current instant.
    pub fn age_class(&self) -> AgeClass {
        self.age_class_at(Utc::now())
    }

    /// Whether the design counts as featured for query purposes: either
    /// the curator flag is set, or the design is New and shelved under
    /// "Best Sellers".
    pub fn effectively_featured_at(&self, reference: DateTime<Utc>) -> bool {
        if self.featured {
            return true;
        }
        self.age_class_at(reference) == AgeClass::New
            && self
                .hierarchy_values()
                .any(|hierarchy| split_hierarchy(hierarchy).1 == Some(BEST_SELLERS))
    }

    /// [`Design::effectively_featured_at`] against the current instant.
    pub fn effectively_featured(&self) -> bool {
        self.effectively_featured_at(Utc::now())
    }
}

/// Split a `"Category > Subcategory"` hierarchy into its two halves.
/// A string without the separator is all category and has no
/// subcategory half.
pub fn split_hierarchy(hierarchy: &str) -> (&str, Option<&str>) {
    match hierarchy.split_once(HIERARCHY_SEPARATOR) {
        Some((category, subcategory)) => (category, Some(subcategory)),
        None => (hierarchy, None),
    }
}

/// Fill a fixed slot array from a list of values, leaving the tail
/// empty. Values beyond the slot count are dropped.
pub fn fill_slots<const N: usize>(values: &[&str]) -> [Option<String>; N] {
    let mut slots: [Option<String>; N] = std::array::from_fn(|_| None);
    for (slot, value) in slots.iter_mut().zip(values) {
        *slot = Some((*value).to_string());
    }
    slots
}
