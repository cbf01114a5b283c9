//! Catalog use cases
//!
//! Loading the product list once per session and applying the user's
//! filter, sort, search and removal operations to it.

pub mod load;
pub mod session;
pub mod snapshot;

pub use load::LoadCatalog;
pub use session::CatalogSession;
pub use snapshot::{AvailableFilters, BrandCount, ClosetSnapshot, ProductCard};
