//! Pagination
//!
//! Plain slice arithmetic over the sorted survivor list. Page numbers
//! are 1-based; everything out of range degrades to an empty page
//! rather than an error.

use serde::{Deserialize, Serialize};

use crate::models::Design;

/// Cut one 1-based page out of `items`.
///
/// A `page_number` past the end yields an empty slice, as do the
/// out-of-contract zero values for either argument. The last page may
/// be shorter than `per_page`.
pub fn page_slice<T>(items: &[T], page_number: u32, per_page: u32) -> &[T] {
    if page_number == 0 || per_page == 0 {
        return &[];
    }
    let start = (page_number as usize - 1).saturating_mul(per_page as usize);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page as usize).min(items.len());
    &items[start..end]
}

/// Transport envelope for one page of browse results.
///
/// Serializes with camelCase keys (`pageNumber`, `perPage`, `total`,
/// `designs`) to match the public query API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPage {
    pub page_number: u32,
    pub per_page: u32,
    /// Count of all survivors before paging, for client page math.
    pub total: u64,
    pub designs: Vec<Design>,
}

impl DesignPage {
    /// Cut one page out of the full survivor list and attach the paging
    /// metadata clients need.
    pub fn new(survivors: &[Design], page_number: u32, per_page: u32) -> Self {
        Self {
            page_number,
            per_page,
            total: survivors.len() as u64,
            designs: page_slice(survivors, page_number, per_page).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DesignStatus, DesignType};

    fn numbers(count: u32) -> Vec<u32> {
        (0..count).collect()
    }

    fn design(id: u32) -> Design {
        Design {
            id,
            design_number: format!("{}", 1000 + id),
            design_type: DesignType::ScreenPrint,
            status: DesignStatus::Published,
            featured: false,
            priority: None,
            date: None,
            name: format!("Design {id}"),
            description: None,
            tags: Default::default(),
            subcategories: Default::default(),
        }
    }

    #[test]
    fn test_pages_tile_the_collection() {
        let items = numbers(10);
        assert_eq!(page_slice(&items, 1, 4), &[0, 1, 2, 3]);
        assert_eq!(page_slice(&items, 2, 4), &[4, 5, 6, 7]);
        assert_eq!(page_slice(&items, 3, 4), &[8, 9]);
        assert!(page_slice(&items, 4, 4).is_empty());
    }

    #[test]
    fn test_zero_arguments_yield_empty_pages() {
        let items = numbers(10);
        assert!(page_slice(&items, 0, 4).is_empty());
        assert!(page_slice(&items, 1, 0).is_empty());
    }

    #[test]
    fn test_huge_page_numbers_do_not_overflow() {
        let items = numbers(3);
        assert!(page_slice(&items, u32::MAX, u32::MAX).is_empty());
    }

    #[test]
    fn test_envelope_reports_the_unpaged_total() {
        let survivors: Vec<Design> = (0..7).map(design).collect();
        let page = DesignPage::new(&survivors, 2, 3);
        assert_eq!(page.total, 7);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.per_page, 3);
        assert_eq!(
            page.designs.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![3, 4, 5]
        );
    }

    #[test]
    fn test_envelope_keys_are_camel_case() {
        let page = DesignPage::new(&[], 1, 24);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("pageNumber").is_some());
        assert!(json.get("perPage").is_some());
        assert!(json.get("total").is_some());
        assert!(json.get("designs").is_some());
    }
}
