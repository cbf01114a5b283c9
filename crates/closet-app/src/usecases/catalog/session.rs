use closet_core::catalog::{Closet, FilterDimension, SortKey};
use tracing::debug;

use super::snapshot::ClosetSnapshot;

/// The user's working closet for one app session.
///
/// Owns the query engine state; every mutation logs what changed and the
/// caller re-renders from [`CatalogSession::snapshot`].
pub struct CatalogSession {
    closet: Closet,
}

impl CatalogSession {
    pub fn new(closet: Closet) -> Self {
        Self { closet }
    }

    pub fn closet(&self) -> &Closet {
        &self.closet
    }

    pub fn snapshot(&self) -> ClosetSnapshot {
        ClosetSnapshot::from(&self.closet)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        debug!(query = %query, "catalog search query changed");
        self.closet.set_search_query(query);
    }

    pub fn toggle_filter(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        let value = value.into();
        let was_active = self.closet.filters().is_active(dimension, &value);
        debug!(?dimension, value = %value, active = !was_active, "catalog filter toggled");
        self.closet.toggle_filter(dimension, value);
    }

    pub fn clear_filters(&mut self) {
        debug!(
            cleared = self.closet.active_filter_count(),
            "catalog filters cleared"
        );
        self.closet.clear_filters();
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.closet.toggle_sort(key);
        let sort = self.closet.sort();
        debug!(key = ?sort.key, direction = ?sort.direction, "catalog sort changed");
    }

    /// Removes every product named `name`. Returns how many were removed.
    pub fn remove_product(&mut self, name: &str) -> usize {
        let removed = self.closet.remove_product(name);
        if removed == 0 {
            debug!(product = name, "remove ignored; no product with that name");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_core::catalog::{Price, Product, SortDirection};

    fn session() -> CatalogSession {
        CatalogSession::new(Closet::new(vec![
            Product::new("Air Max", "Nike", "Red", "Shoes", Price::from_number(120.0)),
            Product::new("Oxford", "J.Crew", "Blue", "Shirt", Price::from_number(45.0)),
            Product::new("Pegasus", "Nike", "Blue", "Shoes", Price::from_number(90.0)),
        ]))
    }

    #[test]
    fn test_operations_flow_into_snapshot() {
        let mut session = session();
        session.toggle_filter(FilterDimension::Color, "Blue");
        session.toggle_sort(SortKey::Price);
        session.toggle_sort(SortKey::Price);

        let snapshot = session.snapshot();
        let names: Vec<&str> = snapshot.products.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Pegasus", "Oxford"]);
        assert_eq!(snapshot.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_clear_filters_resets_search_too() {
        let mut session = session();
        session.set_search_query("air");
        session.toggle_filter(FilterDimension::Brand, "Nike");

        session.clear_filters();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.products.len(), 3);
        assert!(snapshot.search_query.is_empty());
        assert_eq!(snapshot.active_filter_count, 0);
    }

    #[test]
    fn test_remove_missing_product_is_noop() {
        let mut session = session();
        assert_eq!(session.remove_product("Nope"), 0);
        assert_eq!(session.closet().total_products(), 3);

        assert_eq!(session.remove_product("Oxford"), 1);
        assert_eq!(session.snapshot().total_products, 2);
    }
}
