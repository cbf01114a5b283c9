//! Catalog domain: products and the query engine over them.

pub mod aggregates;
pub mod closet;
pub mod collation;
pub mod filter;
pub mod price;
pub mod product;
pub mod sort;

pub use aggregates::CatalogAggregates;
pub use closet::{Closet, TOP_BRANDS_LIMIT};
pub use filter::{FilterDimension, FilterState};
pub use price::{Price, RawPrice};
pub use product::{Product, RawProduct};
pub use sort::{SortDirection, SortKey, SortSpec};
