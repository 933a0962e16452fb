//! Data models for the design catalog

pub mod category;
pub mod design;
pub mod tag;

pub use category::{Category, Subcategory};
pub use design::{
    AgeClass, Design, DesignStatus, DesignType, HIERARCHY_SEPARATOR, SUBCATEGORY_SLOTS, TAG_SLOTS,
    fill_slots, split_hierarchy,
};
pub use tag::Tag;
