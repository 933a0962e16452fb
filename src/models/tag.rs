//! Tag Model

use serde::{Deserialize, Serialize};

/// Tag vocabulary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}
