use std::sync::Arc;

use closet_core::catalog::{Closet, Product};
use closet_core::ports::CatalogSourcePort;
use tracing::{info, info_span, Instrument};

/// Use case for loading the product catalog.
///
/// Normalises every raw record (price parsing, empty style codes) before
/// the query engine sees it.
pub struct LoadCatalog {
    source: Arc<dyn CatalogSourcePort>,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self { source }
    }

    pub fn from_ports(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self::new(source)
    }

    pub async fn execute(&self) -> anyhow::Result<Closet> {
        let span = info_span!("usecase.load_catalog.execute");
        async {
            let raw = self.source.load_products().await?;
            let products: Vec<Product> = raw.into_iter().map(Product::from).collect();
            info!(count = products.len(), "catalog loaded");
            Ok(Closet::new(products))
        }
        .instrument(span)
        .await
    }
}
