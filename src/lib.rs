//! Browse backend for a union apparel design library
//!
//! Loads a flat collection of design records through an injected
//! [`DesignSource`] and answers browse queries over it: filter, sort,
//! then cut one page. The engine in [`search`] is pure and synchronous;
//! all I/O stays behind the source seam, and [`DesignCatalog`] glues
//! the two together with an atomically swappable snapshot cache.
//!
//! ```
//! use std::sync::Arc;
//! use design_catalog::{DesignCatalog, DesignQuery, SortStrategy, StaticSource};
//!
//! # async fn demo(designs: Vec<design_catalog::Design>) -> design_catalog::CatalogResult<()> {
//! let catalog = DesignCatalog::new(Arc::new(StaticSource::from_designs(designs)));
//! let query = DesignQuery::default()
//!     .with_category("Screen Print")
//!     .with_keywords(["eagle"]);
//! let page = catalog.browse(&query, SortStrategy::default(), 1, 24).await?;
//! println!("{} designs match", page.total);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod search;
pub mod service;
pub mod source;

pub use error::{CatalogError, CatalogResult};
pub use models::{AgeClass, Category, Design, DesignStatus, DesignType, Subcategory, Tag};
pub use search::{
    DesignPage, DesignQuery, InvalidSortStrategy, SortStrategy, filter_designs, page_slice,
    sort_designs, sort_designs_at,
};
pub use service::DesignCatalog;
pub use source::{DesignCollection, DesignSource, StaticSource};
