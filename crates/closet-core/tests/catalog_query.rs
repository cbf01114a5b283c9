use closet_core::catalog::{
    Closet, FilterDimension, Price, Product, SortDirection, SortKey, TOP_BRANDS_LIMIT,
};

fn product(name: &str, brand: &str, color: &str, kind: &str) -> Product {
    Product::new(name, brand, color, kind, Price::zero())
}

fn priced(name: &str, price: Price) -> Product {
    Product::new(name, "Acme", "Black", "Shirt", price)
}

fn names(closet: &Closet) -> Vec<String> {
    closet.derive().iter().map(|p| p.name.clone()).collect()
}

fn ten_item_catalog() -> Vec<Product> {
    vec![
        product("Air Max", "Nike", "Red", "Shoes"),
        product("Oxford", "J.Crew", "Blue", "Shirt"),
        product("Pegasus", "Nike", "Blue", "Shoes"),
        product("Parka", "Patagonia", "Green", "Jacket"),
        product("Tech Fleece", "Nike", "Grey", "Hoodie"),
        product("Chinos", "Bonobos", "Khaki", "Pants"),
        product("Stan Smith", "Adidas", "White", "Shoes"),
        product("Crewneck", "Everlane", "Red", "Sweater"),
        product("501", "Levi's", "Blue", "Jeans"),
        product("Belt", "Anderson's", "Brown", "Accessory"),
    ]
}

#[test]
fn brand_filter_with_empty_color_dimension_returns_all_brand_items() {
    let mut closet = Closet::new(ten_item_catalog());
    closet.toggle_filter(FilterDimension::Brand, "Nike");

    let view = closet.derive();
    assert_eq!(view.len(), 3);
    assert!(view.iter().all(|p| p.brand == "Nike"));
}

#[test]
fn filter_dimensions_intersect() {
    let mut closet = Closet::new(ten_item_catalog());
    closet.toggle_filter(FilterDimension::Brand, "Nike");
    closet.toggle_filter(FilterDimension::Color, "Blue");
    closet.toggle_filter(FilterDimension::ProductType, "Shoes");

    assert_eq!(names(&closet), vec!["Pegasus"]);
}

#[test]
fn stale_filter_value_yields_empty_view() {
    let mut closet = Closet::new(ten_item_catalog());
    closet.toggle_filter(FilterDimension::Brand, "Gucci");
    assert!(closet.derive().is_empty());
}

#[test]
fn search_is_case_insensitive_substring_over_four_fields() {
    let closet_products = vec![
        product("Plain Tee", "Acme", "Red", "Shirt"),
        product("Red Wing Boots", "Red Wing", "Brown", "Boots"),
        product("Blueprint", "Acme", "blue", "Shirt"),
    ];
    let mut closet = Closet::new(closet_products);
    closet.set_search_query("RED");

    let mut found = names(&closet);
    found.sort();
    assert_eq!(found, vec!["Plain Tee", "Red Wing Boots"]);
}

#[test]
fn search_matches_product_type() {
    let mut closet = Closet::new(ten_item_catalog());
    closet.set_search_query("shoe");
    assert_eq!(closet.derive().len(), 3);
}

#[test]
fn empty_search_keeps_everything() {
    let mut closet = Closet::new(ten_item_catalog());
    closet.set_search_query("");
    assert_eq!(closet.derive().len(), 10);
}

#[test]
fn sort_by_brand_is_stable_for_ties() {
    let closet = Closet::new(vec![
        product("first", "Acme", "Red", "Shirt"),
        product("zeta", "Zara", "Red", "Shirt"),
        product("second", "Acme", "Blue", "Shirt"),
        product("third", "Acme", "Green", "Shirt"),
    ]);

    assert_eq!(names(&closet), vec!["first", "second", "third", "zeta"]);
}

#[test]
fn sort_by_brand_places_accented_brands_with_their_base_letter() {
    let closet = Closet::new(vec![
        product("knit", "Zara", "Red", "Sweater"),
        product("tee", "Sunspel", "White", "Shirt"),
        product("dress", "Sézane", "Blue", "Dress"),
        product("blouse", "Équipement", "Black", "Shirt"),
    ]);

    let brands: Vec<String> = closet.derive().iter().map(|p| p.brand.clone()).collect();
    assert_eq!(brands, vec!["Équipement", "Sézane", "Sunspel", "Zara"]);
}

#[test]
fn descending_sort_keeps_tie_order() {
    let mut closet = Closet::new(vec![
        product("first", "Acme", "Red", "Shirt"),
        product("zeta", "Zara", "Red", "Shirt"),
        product("second", "Acme", "Blue", "Shirt"),
    ]);
    closet.toggle_sort(SortKey::Brand);
    assert_eq!(closet.sort().direction, SortDirection::Desc);

    assert_eq!(names(&closet), vec!["zeta", "first", "second"]);
}

#[test]
fn string_price_sorts_by_its_numeric_value() {
    let mut closet = Closet::new(vec![
        priced("fifty", Price::from_number(50.0)),
        priced("text", Price::from_text("$45.00")),
        priced("forty", Price::from_number(40.0)),
        priced("unknown", Price::from_text("N/A")),
    ]);
    closet.toggle_sort(SortKey::Price);

    assert_eq!(names(&closet), vec!["unknown", "forty", "text", "fifty"]);
}

#[test]
fn sort_by_color_and_type_use_collation() {
    let mut closet = Closet::new(vec![
        product("a", "Acme", "red", "shirt"),
        product("b", "Acme", "Blue", "Jacket"),
        product("c", "Acme", "green", "Boots"),
    ]);

    closet.toggle_sort(SortKey::Color);
    assert_eq!(names(&closet), vec!["b", "c", "a"]);

    closet.toggle_sort(SortKey::Type);
    assert_eq!(names(&closet), vec!["c", "b", "a"]);
}

#[test]
fn toggle_sort_state_machine() {
    let mut closet = Closet::new(Vec::new());
    closet.toggle_sort(SortKey::Brand);
    closet.toggle_sort(SortKey::Brand);
    assert_eq!(closet.sort().key, SortKey::Brand);
    assert_eq!(closet.sort().direction, SortDirection::Asc);

    closet.toggle_sort(SortKey::Brand);
    closet.toggle_sort(SortKey::Price);
    assert_eq!(closet.sort().key, SortKey::Price);
    assert_eq!(closet.sort().direction, SortDirection::Asc);
}

#[test]
fn clear_filters_empties_all_four_inputs_together() {
    let mut closet = Closet::new(ten_item_catalog());
    closet.toggle_filter(FilterDimension::Brand, "Nike");
    closet.toggle_filter(FilterDimension::Brand, "Adidas");
    closet.toggle_filter(FilterDimension::Color, "Red");
    closet.set_search_query("air");

    closet.clear_filters();

    assert!(closet.filters().brands.is_empty());
    assert!(closet.filters().colors.is_empty());
    assert!(closet.filters().product_types.is_empty());
    assert!(closet.search_query().is_empty());
    assert_eq!(closet.active_filter_count(), 0);
}

#[test]
fn remove_product_removes_every_match() {
    let mut products = ten_item_catalog();
    products.push(product("Oxford", "Brooks Brothers", "White", "Shirt"));
    let mut closet = Closet::new(products);

    assert_eq!(closet.remove_product("Oxford"), 2);
    assert_eq!(closet.total_products(), 9);
    assert!(closet.products().iter().all(|p| p.name != "Oxford"));
}

#[test]
fn aggregates_ignore_active_filters() {
    let mut closet = Closet::new(ten_item_catalog());
    closet.toggle_filter(FilterDimension::Brand, "Nike");
    closet.set_search_query("pegasus");

    let aggregates = closet.aggregates();
    assert_eq!(aggregates.brands.len(), 8);
    assert_eq!(aggregates.brand_counts.get("Nike"), Some(&3));
    assert_eq!(aggregates.brand_counts.values().sum::<usize>(), 10);
    assert_eq!(closet.top_brands(TOP_BRANDS_LIMIT).len(), 8);
    assert_eq!(closet.top_brands(TOP_BRANDS_LIMIT)[0], ("Nike".to_string(), 3));
}

#[test]
fn products_sharing_a_name_stay_distinct() {
    let closet = Closet::new(vec![
        product("Tee", "Acme", "Red", "Shirt"),
        product("Tee", "Acme", "Blue", "Shirt"),
    ]);
    let view = closet.derive();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].color, "Red");
    assert_eq!(view[1].color, "Blue");
}
