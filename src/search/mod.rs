//! Catalog query engine
//!
//! The full browse pipeline over an in-memory design collection: filter
//! with [`filter_designs`], order with [`sort_designs`], then cut a page
//! with [`page_slice`] or wrap one in a [`DesignPage`]. Every stage is a
//! pure function over the caller's snapshot; nothing here holds state or
//! performs I/O.

pub mod filter;
pub mod page;
pub mod params;
pub mod predicates;
pub mod sort;

pub use filter::filter_designs;
pub use page::{DesignPage, page_slice};
pub use params::DesignQuery;
pub use predicates::{
    DEFAULT_MIN_SHARED_TAGS, QUICK_SEARCH_CATEGORY, has_real_design_number, is_not_duplicate,
    is_published, is_similar, matches_category, matches_keywords, matches_subcategories,
    matches_tags, matches_type, shared_tag_count,
};
pub use sort::{InvalidSortStrategy, SortStrategy, sort_designs, sort_designs_at};
