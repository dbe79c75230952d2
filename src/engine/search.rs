//! Search options and result ordering.

use std::cmp::Ordering;

use crate::data::Product;

/// Filters and ordering for [`SearchEngine`](crate::SearchEngine) queries.
///
/// An empty filter list means "no restriction"; sort specs are raw tokens
/// from the serving layer, with comma-joined tokens accepted and flattened
/// during parsing.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Raw sort spec tokens, e.g. `["price_asc", "battery_desc"]`.
    pub sort: Vec<String>,
    /// Restrict results to these brands.
    pub brands: Vec<String>,
    /// Restrict results to these toothbrush types.
    pub types: Vec<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }

    /// Whether `product` passes the brand and type filters.
    pub fn matches_filters(&self, product: &Product) -> bool {
        if !self.brands.is_empty() && !self.brands.iter().any(|b| *b == product.brand) {
            return false;
        }
        if !self.types.is_empty() {
            let product_type = product.toothbrush_type.as_deref().unwrap_or("");
            if !self.types.iter().any(|t| t == product_type) {
                return false;
            }
        }
        true
    }

    /// Recognized sort keys in spec order; unknown keys and `"default"` are
    /// dropped without error.
    pub fn sort_keys(&self) -> Vec<SortKey> {
        self.sort
            .iter()
            .flat_map(|spec| spec.split(','))
            .filter_map(|token| SortKey::parse(token.trim()))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct SearchOptionsBuilder {
    options: SearchOptions,
}

impl SearchOptionsBuilder {
    /// Add a sort spec token (may itself be comma-joined).
    pub fn sort(mut self, spec: impl Into<String>) -> Self {
        self.options.sort.push(spec.into());
        self
    }

    /// Restrict results to `brand` (repeatable).
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.options.brands.push(brand.into());
        self
    }

    /// Restrict results to toothbrush type `kind` (repeatable).
    pub fn toothbrush_type(mut self, kind: impl Into<String>) -> Self {
        self.options.types.push(kind.into());
        self
    }

    pub fn build(self) -> SearchOptions {
        self.options
    }
}

/// A single recognized ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    BatteryAsc,
    BatteryDesc,
    WaterproofAsc,
    WaterproofDesc,
}

impl SortKey {
    /// Parse one spec token. Unrecognized tokens (including `"default"`)
    /// yield `None`.
    pub fn parse(token: &str) -> Option<SortKey> {
        match token {
            "price_asc" => Some(SortKey::PriceAsc),
            "price_desc" => Some(SortKey::PriceDesc),
            "battery_asc" => Some(SortKey::BatteryAsc),
            "battery_desc" => Some(SortKey::BatteryDesc),
            "waterproof_asc" => Some(SortKey::WaterproofAsc),
            "waterproof_desc" => Some(SortKey::WaterproofDesc),
            _ => None,
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price_value().total_cmp(&b.price_value()),
            SortKey::PriceDesc => b.price_value().total_cmp(&a.price_value()),
            SortKey::BatteryAsc => a.battery_value().cmp(&b.battery_value()),
            SortKey::BatteryDesc => b.battery_value().cmp(&a.battery_value()),
            SortKey::WaterproofAsc => a.waterproof_rank().cmp(&b.waterproof_rank()),
            SortKey::WaterproofDesc => b.waterproof_rank().cmp(&a.waterproof_rank()),
        }
    }
}

/// Stable multi-key sort: the first key is primary, later keys break ties,
/// and rows equal under every key keep their upstream (relevance or
/// catalog) order. No keys means no reordering at all.
pub fn apply_sorting(products: &mut [Product], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    products.sort_by(|a, b| {
        keys.iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: &str, battery: Option<&str>) -> Product {
        Product {
            name: name.to_string(),
            price: price.to_string(),
            battery_life: battery.map(str::to_string),
            ..Product::default()
        }
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price_asc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::parse("waterproof_desc"), Some(SortKey::WaterproofDesc));
        assert_eq!(SortKey::parse("default"), None);
        assert_eq!(SortKey::parse("rating_desc"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn test_sort_keys_flatten_commas() {
        let options = SearchOptions::builder()
            .sort("price_asc,battery_desc")
            .sort("waterproof_asc")
            .build();
        assert_eq!(
            options.sort_keys(),
            vec![SortKey::PriceAsc, SortKey::BatteryDesc, SortKey::WaterproofAsc]
        );
    }

    #[test]
    fn test_sort_keys_ignore_unknown() {
        let options = SearchOptions::builder()
            .sort("default")
            .sort("shiny_desc,price_desc")
            .build();
        assert_eq!(options.sort_keys(), vec![SortKey::PriceDesc]);
    }

    #[test]
    fn test_apply_sorting_multi_key() {
        let mut products = vec![
            product("a", "$20", Some("10")),
            product("b", "$10", Some("5")),
            product("c", "$10", Some("30")),
            product("d", "$20", Some("20")),
        ];
        apply_sorting(
            &mut products,
            &[SortKey::PriceAsc, SortKey::BatteryDesc],
        );
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "d", "a"]);

        // Prices non-decreasing; battery non-increasing within equal price.
        for pair in products.windows(2) {
            assert!(pair[0].price_value() <= pair[1].price_value());
            if pair[0].price_value() == pair[1].price_value() {
                assert!(pair[0].battery_value() >= pair[1].battery_value());
            }
        }
    }

    #[test]
    fn test_apply_sorting_is_stable() {
        let mut products = vec![
            product("first", "$10", None),
            product("second", "$10", None),
        ];
        apply_sorting(&mut products, &[SortKey::PriceAsc]);
        assert_eq!(products[0].name, "first");
        assert_eq!(products[1].name, "second");
    }

    #[test]
    fn test_apply_sorting_no_keys_is_noop() {
        let mut products = vec![product("z", "$30", None), product("a", "$1", None)];
        apply_sorting(&mut products, &[]);
        assert_eq!(products[0].name, "z");
    }

    #[test]
    fn test_filters_match_brand_and_type() {
        let mut product = Product {
            brand: "Acme".to_string(),
            toothbrush_type: Some("Electric".to_string()),
            ..Product::default()
        };

        let unfiltered = SearchOptions::new();
        assert!(unfiltered.matches_filters(&product));

        let by_brand = SearchOptions::builder().brand("Acme").build();
        assert!(by_brand.matches_filters(&product));

        let other_brand = SearchOptions::builder().brand("Generic").build();
        assert!(!other_brand.matches_filters(&product));

        let by_type = SearchOptions::builder().toothbrush_type("Electric").build();
        assert!(by_type.matches_filters(&product));

        product.toothbrush_type = None;
        assert!(!by_type.matches_filters(&product));
    }
}
