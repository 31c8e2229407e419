//! Seeded mock restaurant catalog.
//!
//! Stands in for the excluded third-party places surface: produces
//! candidates with a category, 1-3 keywords, a per-person price, and a
//! rating, all drawn from a seeded RNG so a given seed always yields the
//! same catalog.

use std::collections::BTreeSet;

use convive::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::CatalogConfig;

fn name_pool(category: FoodCategory) -> &'static [&'static str; 5] {
    match category {
        FoodCategory::Korean => &[
            "Hanok Table",
            "Charcoal Lane",
            "Granny's Gukbap",
            "Stonepot House",
            "Hometown Kitchen",
        ],
        FoodCategory::Chinese => &[
            "Jade Dragon",
            "Peking Corner",
            "Shanghai Pavilion",
            "Great Wall Kitchen",
            "Lucky Wok",
        ],
        FoodCategory::Japanese => &[
            "Kaiten Row",
            "Ramen Alley",
            "Izakaya Moon",
            "Tonkatsu House",
            "Udon Masters",
        ],
        FoodCategory::Western => &[
            "Trattoria Nova",
            "Bistro Lumen",
            "Steakhouse Prime",
            "Pasta Yard",
            "Brunch & Co",
        ],
        FoodCategory::Asian => &[
            "Pad Thai Express",
            "Saigon Rolls",
            "Bun Cha Lane",
            "Pho Station",
            "Khao San Road",
        ],
        FoodCategory::Fusion => &[
            "Modern Kitchen",
            "Creative Dining",
            "Crossover Club",
            "Contemporary Plates",
            "Borderless",
        ],
        FoodCategory::FastFood => &[
            "Burger Yard",
            "Fry Basket",
            "Quick Bite",
            "Stack Shack",
            "Drive-In Diner",
        ],
        FoodCategory::CafeDessert => &[
            "Sweet Hour",
            "Dessert 39",
            "Cake House",
            "Waffle & Coffee",
            "Brunch Beans",
        ],
    }
}

/// Generates `config.count` candidates from the configured seed.
pub fn generate_catalog(config: &CatalogConfig) -> Vec<Restaurant> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|index| {
            let category =
                FoodCategory::ALL[rng.random_range(0..FoodCategory::ALL.len())];
            let pool = name_pool(category);
            let name = format!(
                "{} ({})",
                pool[rng.random_range(0..pool.len())],
                config.region
            );

            let keyword_count = rng.random_range(1..=3usize);
            let mut keywords = BTreeSet::new();
            while keywords.len() < keyword_count {
                keywords.insert(FoodKeyword::ALL[rng.random_range(0..FoodKeyword::ALL.len())]);
            }

            let avg_price = rng.random_range(config.min_price..=config.max_price);
            let rating = (rng.random_range(3.0f32..=5.0) * 10.0).round() / 10.0;

            Restaurant::new(format!("rest_{}", index + 1), name)
                .with_category(category)
                .with_keywords(keywords)
                .with_avg_price(avg_price)
                .with_rating(rating)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_per_seed() {
        let config = CatalogConfig::default();
        assert_eq!(generate_catalog(&config), generate_catalog(&config));

        let reseeded = CatalogConfig {
            seed: config.seed + 1,
            ..config.clone()
        };
        assert_ne!(generate_catalog(&config), generate_catalog(&reseeded));
    }

    #[test]
    fn test_respects_count_and_bounds() {
        let config = CatalogConfig {
            count: 50,
            min_price: 12_000,
            max_price: 18_000,
            ..CatalogConfig::default()
        };
        let catalog = generate_catalog(&config);
        assert_eq!(catalog.len(), 50);

        for restaurant in &catalog {
            assert!(restaurant.category.is_some());
            let count = restaurant.keywords.len();
            assert!((1..=3).contains(&count));
            let price = restaurant.avg_price.unwrap();
            assert!((12_000..=18_000).contains(&price));
            let rating = restaurant.rating.unwrap();
            assert!((3.0..=5.0).contains(&rating));
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let config = CatalogConfig {
            count: 3,
            ..CatalogConfig::default()
        };
        let ids: Vec<String> = generate_catalog(&config)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["rest_1", "rest_2", "rest_3"]);
    }
}
