//! Data source seam
//!
//! The engine consumes a materialized [`DesignCollection`]; where it
//! comes from (a spreadsheet export, a test fixture) is the source
//! implementation's business. Sources are injected into
//! [`DesignCatalog`](crate::service::DesignCatalog) rather than reached
//! through global state.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::models::{Category, Design, Subcategory, Tag};

mod memory;

pub use memory::StaticSource;

/// Full snapshot of the upstream design database: the design rows the
/// query engine operates on plus the reference sheets carried through
/// for navigation UIs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignCollection {
    pub designs: Vec<Design>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub tags: Vec<Tag>,
    /// Garment color names offered alongside the designs.
    pub colors: Vec<String>,
}

impl DesignCollection {
    /// Whether rows sharing a design number sit next to each other.
    ///
    /// Duplicate suppression only sees the immediate predecessor, so a
    /// collection violating this leaks duplicates into results.
    pub fn has_grouped_design_numbers(&self) -> bool {
        let mut seen = HashSet::new();
        let mut previous: Option<&str> = None;
        for design in &self.designs {
            let number = design.design_number.as_str();
            if previous != Some(number) && !seen.insert(number) {
                return false;
            }
            previous = Some(number);
        }
        true
    }
}

/// Produces collection snapshots for the catalog.
///
/// Implementations decide where the data comes from and when to
/// re-fetch it. Design rows must arrive with positional ids and with
/// equal design numbers adjacent; see
/// [`DesignCollection::has_grouped_design_numbers`].
#[async_trait]
pub trait DesignSource: Send + Sync {
    /// Materialize the current snapshot.
    async fn load(&self) -> CatalogResult<DesignCollection>;
}
