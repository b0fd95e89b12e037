//! Filter engine: category/audience selection over a product list.

use core::convert::Infallible;
use core::str::FromStr;

use crate::product::Product;

/// Sentinel label meaning "no constraint on this axis".
pub const ALL: &str = "All";

/// One axis of a filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    pub fn only(value: impl Into<String>) -> Self {
        Facet::Only(value.into())
    }

    /// Parse a selector label. Exactly `"All"` is the sentinel; anything else is
    /// a concrete value.
    pub fn parse(label: &str) -> Self {
        if label == ALL {
            Facet::All
        } else {
            Facet::Only(label.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    pub fn label(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(value) => value,
        }
    }

    /// Case-insensitive match against a product field.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted.to_lowercase() == value.to_lowercase(),
        }
    }
}

impl FromStr for Facet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Facet::parse(s))
    }
}

impl core::fmt::Display for Facet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Current category + audience selection of the shop view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category: Facet,
    pub audience: Facet,
}

impl FilterSelection {
    pub fn new(category: Facet, audience: Facet) -> Self {
        Self { category, audience }
    }

    /// Selection with no constraint on either axis.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Facet) -> Self {
        self.category = category;
        self
    }

    pub fn with_audience(mut self, audience: Facet) -> Self {
        self.audience = audience;
        self
    }

    /// Reset both axes to `All`.
    pub fn clear(&mut self) {
        *self = Self::all();
    }

    /// Whether any axis constrains the result.
    pub fn is_active(&self) -> bool {
        !self.category.is_all() || !self.audience.is_all()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category())
            && self.audience.matches(product.target_audience())
    }
}

/// Products passing `selection`, in their original relative order.
///
/// Returns references into the input, so the result is a subset by identity.
/// Pure: the input is not touched and the same input always yields the same
/// output.
pub fn filter<'a, I>(products: I, selection: &FilterSelection) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| selection.matches(product))
        .collect()
}

/// Result count line shown above the product grid.
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 product found".to_string()
    } else {
        format!("{count} products found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_core::{Price, ProductId};

    fn product(id: i64, name: &str, category: &str, audience: &str, price: f64) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            category,
            audience,
            Price::new(price).unwrap(),
        )
    }

    fn scenario() -> Vec<Product> {
        vec![
            product(1, "Saree", "Clothes", "Women", 1000.0),
            product(2, "Necklace", "Jewelry", "Women", 500.0),
            product(3, "KidsDress", "Clothes", "Kids", 0.0),
        ]
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn category_only_selection() {
        let products = scenario();
        let selection = FilterSelection::all().with_category(Facet::only("Clothes"));
        assert_eq!(names(&filter(&products, &selection)), ["Saree", "KidsDress"]);
    }

    #[test]
    fn audience_only_selection() {
        let products = scenario();
        let selection = FilterSelection::all().with_audience(Facet::only("Women"));
        assert_eq!(names(&filter(&products, &selection)), ["Saree", "Necklace"]);
    }

    #[test]
    fn axes_are_combined_with_and() {
        let products = scenario();
        let selection = FilterSelection::new(Facet::only("Clothes"), Facet::only("Women"));
        assert_eq!(names(&filter(&products, &selection)), ["Saree"]);
    }

    #[test]
    fn matching_ignores_case() {
        let products = vec![product(1, "Saree", "Clothes", "Women", 10.0)];
        let selection = FilterSelection::all().with_category(Facet::only("clothes"));
        assert_eq!(filter(&products, &selection).len(), 1);

        let selection = FilterSelection::all().with_audience(Facet::only("WOMEN"));
        assert_eq!(filter(&products, &selection).len(), 1);
    }

    #[test]
    fn unknown_value_matches_nothing() {
        let products = scenario();
        let selection = FilterSelection::all().with_category(Facet::only("Footwear"));
        assert!(filter(&products, &selection).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let products: Vec<Product> = Vec::new();
        let selection = FilterSelection::new(Facet::only("Clothes"), Facet::All);
        assert!(filter(&products, &selection).is_empty());
    }

    #[test]
    fn result_references_the_input() {
        let products = scenario();
        let visible = filter(&products, &FilterSelection::all());
        assert_eq!(visible.len(), products.len());
        for (shown, original) in visible.iter().zip(products.iter()) {
            assert!(core::ptr::eq(*shown, original));
        }
    }

    #[test]
    fn all_sentinel_is_exact() {
        assert_eq!(Facet::parse("All"), Facet::All);
        assert_eq!(Facet::parse("all"), Facet::only("all"));
        assert_eq!("Women".parse::<Facet>().unwrap(), Facet::only("Women"));
        assert_eq!(Facet::All.to_string(), "All");
    }

    #[test]
    fn clear_resets_and_deactivates() {
        let mut selection = FilterSelection::new(Facet::only("Jewelry"), Facet::All);
        assert!(selection.is_active());
        selection.clear();
        assert!(!selection.is_active());
        assert_eq!(selection, FilterSelection::all());
    }

    #[test]
    fn facet_matches_single_field() {
        assert!(Facet::All.matches("anything"));
        assert!(Facet::only("Kids 1-10yrs").matches("KIDS 1-10YRS"));
        assert!(!Facet::only("Kids").matches("Kids 1-10yrs"));
    }

    #[test]
    fn result_label_pluralizes() {
        assert_eq!(result_label(0), "0 products found");
        assert_eq!(result_label(1), "1 product found");
        assert_eq!(result_label(6), "6 products found");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const CATEGORY_POOL: [&str; 5] = ["Clothes", "clothes", "Jewelry", "JEWELRY", "Footwear"];
        const AUDIENCE_POOL: [&str; 4] = ["Women", "women", "Kids 1-10yrs", "Men"];

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                (0usize..CATEGORY_POOL.len(), 0usize..AUDIENCE_POOL.len(), 0u32..100_000),
                0..40,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (c, a, price))| {
                        product(
                            i as i64,
                            &format!("Product {i}"),
                            CATEGORY_POOL[c],
                            AUDIENCE_POOL[a],
                            f64::from(price),
                        )
                    })
                    .collect()
            })
        }

        fn arb_facet(pool: &'static [&'static str]) -> impl Strategy<Value = Facet> {
            prop_oneof![
                Just(Facet::All),
                (0..pool.len()).prop_map(move |i| Facet::only(pool[i])),
            ]
        }

        fn arb_selection() -> impl Strategy<Value = FilterSelection> {
            (arb_facet(&CATEGORY_POOL), arb_facet(&AUDIENCE_POOL))
                .prop_map(|(category, audience)| FilterSelection::new(category, audience))
        }

        fn axis_allows(facet: &Facet, value: &str) -> bool {
            match facet {
                Facet::All => true,
                Facet::Only(wanted) => wanted.to_lowercase() == value.to_lowercase(),
            }
        }

        fn position(products: &[Product], item: &Product) -> Option<usize> {
            products.iter().position(|p| core::ptr::eq(p, item))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the result is an order-preserving subsequence of the input.
            #[test]
            fn result_is_ordered_subsequence(
                products in arb_products(),
                selection in arb_selection(),
            ) {
                let visible = filter(&products, &selection);
                let mut last: Option<usize> = None;
                for item in &visible {
                    let index = position(&products, item);
                    prop_assert!(index.is_some(), "result item not found in input");
                    if let (Some(prev), Some(index)) = (last, index) {
                        prop_assert!(index > prev, "order not preserved or item duplicated");
                    }
                    last = index;
                }
            }

            /// Property: an unconstrained selection returns the input unchanged.
            #[test]
            fn all_all_is_identity(products in arb_products()) {
                let visible = filter(&products, &FilterSelection::all());
                prop_assert_eq!(visible.len(), products.len());
                for (shown, original) in visible.iter().zip(products.iter()) {
                    prop_assert!(core::ptr::eq(*shown, original));
                }
            }

            /// Property: filtering twice equals filtering once.
            #[test]
            fn filter_is_idempotent(products in arb_products(), selection in arb_selection()) {
                let once = filter(&products, &selection);
                let twice = filter(once.iter().copied(), &selection);
                prop_assert_eq!(once.len(), twice.len());
                for (a, b) in once.iter().zip(twice.iter()) {
                    prop_assert!(core::ptr::eq(*a, *b));
                }
            }

            /// Property: exactly the matching products survive.
            #[test]
            fn survivors_are_exactly_the_matches(
                products in arb_products(),
                selection in arb_selection(),
            ) {
                let visible = filter(&products, &selection);
                let expected = products
                    .iter()
                    .filter(|p| {
                        axis_allows(&selection.category, p.category())
                            && axis_allows(&selection.audience, p.target_audience())
                    })
                    .count();
                prop_assert_eq!(visible.len(), expected);
                prop_assert!(visible.iter().all(|p| selection.matches(p)));
            }
        }
    }
}
