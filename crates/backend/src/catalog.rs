use ecoleta_shared::models::{CatalogItem, Item};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The fixed list of item categories a collection point can accept.
pub struct Catalog {
    items: Vec<CatalogItem>,
    public_url: String,
}

impl Catalog {
    pub fn load(assets_dir: &Path, public_url: &str) -> Result<Self, CatalogError> {
        let path = assets_dir.join("items.json");
        let data = std::fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;
        let items: Vec<CatalogItem> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::info!(items = items.len(), "Loaded item catalog");

        Ok(Catalog::new(items, public_url))
    }

    pub fn new(items: Vec<CatalogItem>, public_url: &str) -> Self {
        Catalog {
            items,
            public_url: public_url.to_string(),
        }
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.iter().map(|i| i.to_item(&self.public_url)).collect()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Catalog entries for `ids`, in catalog order. Unknown ids are skipped.
    pub fn items_for(&self, ids: &[u32]) -> Vec<Item> {
        self.items
            .iter()
            .filter(|i| ids.contains(&i.id))
            .map(|i| i.to_item(&self.public_url))
            .collect()
    }
}
