//! Product list bundled as a JSON array.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use closet_core::catalog::RawProduct;
use closet_core::ports::CatalogSourcePort;
use tokio::fs;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read product file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse product file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSourcePort for JsonCatalogSource {
    async fn load_products(&self) -> anyhow::Result<Vec<RawProduct>> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogLoadError::Read {
                path: self.path.clone(),
                source,
            })?;

        let products: Vec<RawProduct> =
            serde_json::from_str(&content).map_err(|source| CatalogLoadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = products.len(), "product file parsed");
        Ok(products)
    }
}
