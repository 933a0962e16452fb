//! Fixed in-memory source

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Design;

use super::{DesignCollection, DesignSource};

/// Source that serves one pre-materialized collection. Backs tests and
/// embedders that already hold the rows.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    collection: DesignCollection,
}

impl StaticSource {
    pub fn new(collection: DesignCollection) -> Self {
        Self { collection }
    }

    /// Wrap bare design rows, leaving the reference sheets empty.
    pub fn from_designs(designs: Vec<Design>) -> Self {
        Self::new(DesignCollection {
            designs,
            ..DesignCollection::default()
        })
    }

    /// Decode a collection from its JSON snapshot form.
    pub fn from_json(snapshot: &str) -> CatalogResult<Self> {
        Ok(Self::new(serde_json::from_str(snapshot)?))
    }
}

#[async_trait]
impl DesignSource for StaticSource {
    async fn load(&self) -> CatalogResult<DesignCollection> {
        Ok(self.collection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[tokio::test]
    async fn test_load_returns_the_wrapped_collection() {
        let snapshot = r#"{
            "designs": [{
                "id": 0,
                "design_number": "1320",
                "design_type": "Screen Print",
                "status": "Published",
                "name": "Union Strong"
            }],
            "colors": ["Navy", "Gold"]
        }"#;
        let source = StaticSource::from_json(snapshot).unwrap();

        let collection = source.load().await.unwrap();
        assert_eq!(collection.designs.len(), 1);
        assert_eq!(collection.designs[0].design_number, "1320");
        assert_eq!(collection.colors, vec!["Navy", "Gold"]);
    }

    #[tokio::test]
    async fn test_from_designs_leaves_reference_sheets_empty() {
        let source = StaticSource::from_designs(Vec::new());
        let collection = source.load().await.unwrap();
        assert!(collection.designs.is_empty());
        assert!(collection.categories.is_empty());
        assert!(collection.colors.is_empty());
    }

    #[test]
    fn test_malformed_snapshot_is_rejected() {
        let err = StaticSource::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Snapshot(_)));
    }
}
