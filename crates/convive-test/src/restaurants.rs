//! A small fixed restaurant catalog for tests.

use convive_core::{FoodCategory, FoodKeyword, Restaurant};

/// Korean barbecue: Korean category, spicy + meat keywords, 15000 per head.
pub fn korean_bbq() -> Restaurant {
    Restaurant::new("fix-korean-bbq", "Charcoal Lane")
        .with_category(FoodCategory::Korean)
        .with_keywords([FoodKeyword::Spicy, FoodKeyword::Meat])
        .with_avg_price(15_000)
        .with_rating(4.4)
}

/// Sushi counter: Japanese category, seafood + raw keywords, 32000 per head.
pub fn sushi_counter() -> Restaurant {
    Restaurant::new("fix-sushi-counter", "Kaiten Row")
        .with_category(FoodCategory::Japanese)
        .with_keywords([FoodKeyword::Seafood, FoodKeyword::Raw])
        .with_avg_price(32_000)
        .with_rating(4.7)
}

/// Oyster bar: Western category, seafood keyword, 28000 per head.
pub fn oyster_bar() -> Restaurant {
    Restaurant::new("fix-oyster-bar", "Oyster Bay")
        .with_category(FoodCategory::Western)
        .with_keywords([FoodKeyword::Seafood])
        .with_avg_price(28_000)
        .with_rating(4.1)
}

/// A candidate with no category, keywords, or price.
pub fn mystery_diner() -> Restaurant {
    Restaurant::new("fix-mystery", "Mystery Diner")
}

/// The full fixture catalog, in a fixed order.
pub fn sample_catalog() -> Vec<Restaurant> {
    vec![korean_bbq(), sushi_counter(), oyster_bar(), mystery_diner()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = sample_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_mystery_diner_is_bare() {
        let restaurant = mystery_diner();
        assert!(restaurant.category.is_none());
        assert!(restaurant.keywords.is_empty());
        assert!(restaurant.avg_price.is_none());
    }
}
