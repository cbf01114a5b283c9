use async_trait::async_trait;

use crate::catalog::RawProduct;

/// Source of the static product list loaded once per session.
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    async fn load_products(&self) -> anyhow::Result<Vec<RawProduct>>;
}
