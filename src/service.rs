//! Design Catalog Service - snapshot caching plus the browse pipeline
//!
//! The source is asked for a collection once and the result is held as
//! an immutable `Arc` snapshot. Queries clone the `Arc` and run the pure
//! pipeline against it, so a concurrent [`DesignCatalog::refresh`] swaps
//! the snapshot without disturbing queries already in flight.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, Design, Subcategory, Tag};
use crate::search::{DesignPage, DesignQuery, SortStrategy, filter_designs, sort_designs_at};
use crate::source::{DesignCollection, DesignSource};

/// Catalog facade over an injected [`DesignSource`].
#[derive(Clone)]
pub struct DesignCatalog {
    source: Arc<dyn DesignSource>,
    /// Snapshot cache, `None` until the first load.
    snapshot: Arc<RwLock<Option<Arc<DesignCollection>>>>,
}

impl std::fmt::Debug for DesignCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let designs_count = self
            .snapshot
            .read()
            .as_ref()
            .map_or(0, |collection| collection.designs.len());
        f.debug_struct("DesignCatalog")
            .field("designs_count", &designs_count)
            .finish()
    }
}

impl DesignCatalog {
    /// Create a catalog over the given source. Nothing is loaded until
    /// the first query or an explicit [`DesignCatalog::refresh`].
    pub fn new(source: Arc<dyn DesignSource>) -> Self {
        Self {
            source,
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Snapshot management
    // =========================================================================

    /// Reload from the source and swap the cached snapshot.
    pub async fn refresh(&self) -> CatalogResult<Arc<DesignCollection>> {
        let collection = self.source.load().await?;
        if !collection.has_grouped_design_numbers() {
            tracing::warn!(
                "⚠️ DesignCatalog: snapshot has non-adjacent duplicate design numbers, suppression will miss them"
            );
        }
        tracing::info!(
            "📦 DesignCatalog: Loaded {} designs, {} categories, {} subcategories, {} tags",
            collection.designs.len(),
            collection.categories.len(),
            collection.subcategories.len(),
            collection.tags.len()
        );

        let collection = Arc::new(collection);
        *self.snapshot.write() = Some(collection.clone());
        Ok(collection)
    }

    /// The cached snapshot, loading it on first use.
    async fn collection(&self) -> CatalogResult<Arc<DesignCollection>> {
        let cached = self.snapshot.read().clone();
        match cached {
            Some(collection) => Ok(collection),
            None => self.refresh().await,
        }
    }

    // =========================================================================
    // Browse
    // =========================================================================

    /// Filter, sort, then page one view of the catalog.
    ///
    /// The age reference is pinned once per call so that filtering and
    /// the featured-first sort classify each design identically.
    pub async fn browse(
        &self,
        query: &DesignQuery,
        strategy: SortStrategy,
        page_number: u32,
        per_page: u32,
    ) -> CatalogResult<DesignPage> {
        let collection = self.collection().await?;

        let mut query = query.clone();
        let reference = *query.age_reference.get_or_insert_with(Utc::now);

        let mut survivors = filter_designs(&collection.designs, &query);
        sort_designs_at(&mut survivors, strategy, reference);
        Ok(DesignPage::new(&survivors, page_number, per_page))
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// All design rows in the current snapshot, in load order.
    pub async fn designs(&self) -> CatalogResult<Vec<Design>> {
        Ok(self.collection().await?.designs.clone())
    }

    /// Look up one design by its snapshot id.
    pub async fn design_by_id(&self, id: u32) -> CatalogResult<Design> {
        self.collection()
            .await?
            .designs
            .iter()
            .find(|design| design.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(format!("design {id}")))
    }

    /// Look up one design by its exact name.
    pub async fn design_by_name(&self, name: &str) -> CatalogResult<Design> {
        self.collection()
            .await?
            .designs
            .iter()
            .find(|design| design.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(format!("design named {name:?}")))
    }

    // =========================================================================
    // Reference sheets
    // =========================================================================

    /// Category rows for navigation menus.
    pub async fn categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.collection().await?.categories.clone())
    }

    /// Subcategory rows for navigation menus.
    pub async fn subcategories(&self) -> CatalogResult<Vec<Subcategory>> {
        Ok(self.collection().await?.subcategories.clone())
    }

    /// Tag vocabulary rows.
    pub async fn tags(&self) -> CatalogResult<Vec<Tag>> {
        Ok(self.collection().await?.tags.clone())
    }

    /// Garment color names.
    pub async fn colors(&self) -> CatalogResult<Vec<String>> {
        Ok(self.collection().await?.colors.clone())
    }
}
