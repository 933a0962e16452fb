//! Sort strategies and the featured-first ordering
//!
//! Every strategy sorts effectively featured designs ahead of the rest,
//! then applies its own comparator within each partition. The sort is
//! stable, so designs tied under the comparator keep their filter-output
//! order.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Design;

/// Raised when a sort-strategy name is not recognized. Callers fall
/// back to the default with `name.parse().unwrap_or_default()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort strategy: {0}")]
pub struct InvalidSortStrategy(pub String);

/// Pairwise ordering applied within each featured partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortStrategy {
    /// Numerically highest design number first, the catalog's
    /// newest-first order.
    #[default]
    #[serde(rename = "design number")]
    DesignNumber,
    /// Smallest priority rank first; unranked designs sink.
    #[serde(rename = "priority")]
    Priority,
}

impl FromStr for SortStrategy {
    type Err = InvalidSortStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "design number" => Ok(Self::DesignNumber),
            "priority" => Ok(Self::Priority),
            other => Err(InvalidSortStrategy(other.to_string())),
        }
    }
}

/// Sort designs in place for presentation, with the featured partition
/// resolved against the current instant.
pub fn sort_designs(designs: &mut [Design], strategy: SortStrategy) {
    sort_designs_at(designs, strategy, Utc::now());
}

/// [`sort_designs`] with a pinned instant for the featured partition's
/// age component.
pub fn sort_designs_at(designs: &mut [Design], strategy: SortStrategy, reference: DateTime<Utc>) {
    designs.sort_by(|left, right| {
        let left_featured = left.effectively_featured_at(reference);
        let right_featured = right.effectively_featured_at(reference);
        right_featured
            .cmp(&left_featured)
            .then_with(|| match strategy {
                SortStrategy::DesignNumber => compare_design_numbers(left, right),
                SortStrategy::Priority => compare_priorities(left, right),
            })
    });
}

/// Parseable numeric design numbers sort before unparseable ones; of
/// two parseable numbers, the higher comes first.
fn compare_design_numbers(left: &Design, right: &Design) -> Ordering {
    match (left.numeric_design_number(), right.numeric_design_number()) {
        (Some(left_number), Some(right_number)) => right_number.cmp(&left_number),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ranked designs sort before unranked, smaller rank first; two
/// unranked designs fall back to the design-number order.
fn compare_priorities(left: &Design, right: &Design) -> Ordering {
    match (left.priority, right.priority) {
        (Some(left_rank), Some(right_rank)) => left_rank.cmp(&right_rank),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_design_numbers(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DesignStatus, DesignType};

    fn design(id: u32, number: &str) -> Design {
        Design {
            id,
            design_number: number.to_string(),
            design_type: DesignType::ScreenPrint,
            status: DesignStatus::Published,
            featured: false,
            priority: None,
            date: None,
            name: format!("Design {number}"),
            description: None,
            tags: Default::default(),
            subcategories: Default::default(),
        }
    }

    fn ids(designs: &[Design]) -> Vec<u32> {
        designs.iter().map(|design| design.id).collect()
    }

    fn reference() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_parse_known_strategies() {
        assert_eq!(
            "design number".parse::<SortStrategy>().unwrap(),
            SortStrategy::DesignNumber
        );
        assert_eq!(
            "priority".parse::<SortStrategy>().unwrap(),
            SortStrategy::Priority
        );
    }

    #[test]
    fn test_unknown_strategy_falls_back_to_default() {
        let err = "Design Number".parse::<SortStrategy>().unwrap_err();
        assert_eq!(err, InvalidSortStrategy("Design Number".to_string()));

        let strategy: SortStrategy = "newest".parse().unwrap_or_default();
        assert_eq!(strategy, SortStrategy::DesignNumber);
    }

    #[test]
    fn test_featured_designs_lead_regardless_of_strategy() {
        let mut plain = design(0, "2000");
        plain.priority = Some(1);
        let mut flagged = design(1, "1001");
        flagged.featured = true;

        for strategy in [SortStrategy::DesignNumber, SortStrategy::Priority] {
            let mut designs = vec![plain.clone(), flagged.clone()];
            sort_designs_at(&mut designs, strategy, reference());
            assert_eq!(ids(&designs), vec![1, 0]);
        }
    }

    #[test]
    fn test_design_numbers_sort_descending() {
        let mut designs = vec![design(0, "1001"), design(1, "1455"), design(2, "1320")];
        sort_designs_at(&mut designs, SortStrategy::DesignNumber, reference());
        assert_eq!(ids(&designs), vec![1, 2, 0]);
    }

    #[test]
    fn test_non_numeric_design_numbers_sink() {
        let mut designs = vec![design(0, "E2001"), design(1, "1001")];
        sort_designs_at(&mut designs, SortStrategy::DesignNumber, reference());
        assert_eq!(ids(&designs), vec![1, 0]);
    }

    #[test]
    fn test_priority_sorts_ascending_with_unranked_last() {
        let mut third = design(0, "1001");
        third.priority = Some(3);
        let mut first = design(1, "1002");
        first.priority = Some(1);
        let unranked = design(2, "9000");

        let mut designs = vec![third, unranked, first];
        sort_designs_at(&mut designs, SortStrategy::Priority, reference());
        assert_eq!(ids(&designs), vec![1, 0, 2]);
    }

    #[test]
    fn test_unranked_designs_fall_back_to_design_number() {
        let mut designs = vec![design(0, "1001"), design(1, "1455")];
        sort_designs_at(&mut designs, SortStrategy::Priority, reference());
        assert_eq!(ids(&designs), vec![1, 0]);
    }

    #[test]
    fn test_ties_keep_filter_output_order() {
        // "1320" and "1320 (Sleeve)" parse to the same number.
        let mut designs = vec![
            design(0, "1320"),
            design(1, "1320 (Sleeve)"),
            design(2, "1320 (Back)"),
        ];
        sort_designs_at(&mut designs, SortStrategy::DesignNumber, reference());
        assert_eq!(ids(&designs), vec![0, 1, 2]);
    }

    #[test]
    fn test_new_best_sellers_join_the_featured_partition() {
        let mut shelved = design(0, "1001");
        shelved.date = Some("2024-03-15".to_string());
        shelved.subcategories =
            crate::models::fill_slots(&["Quick Search > Best Sellers"]);
        let plain = design(1, "2000");

        let mut designs = vec![plain, shelved];
        sort_designs_at(&mut designs, SortStrategy::DesignNumber, reference());
        assert_eq!(ids(&designs), vec![0, 1]);
    }
}
