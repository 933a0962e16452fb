//! Category and Subcategory Models
//!
//! Reference rows carried alongside the designs for navigation menus.
//! The query pipeline never consults them; category and subcategory
//! filters match against the hierarchy strings on the designs
//! themselves.

use serde::{Deserialize, Serialize};

use super::DesignType;

/// Top-level catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Production method the category belongs to.
    pub design_type: DesignType,
}

/// Second-level shelf within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    pub parent_category: String,
    /// Encoded `"Category > Subcategory"` form, as it appears in design
    /// hierarchy slots.
    pub hierarchy: String,
}
