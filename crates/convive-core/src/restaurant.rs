//! Restaurant candidates as seen by the scoring engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::food::{FoodCategory, FoodKeyword};

/// A candidate restaurant.
///
/// Only `category`, `keywords`, and `avg_price` participate in scoring;
/// the remaining fields exist for presentation. Catalog adapters may leave
/// any of the optional fields absent, which the engine treats as "no
/// adjustment" rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<FoodCategory>,
    #[serde(default)]
    pub keywords: BTreeSet<FoodKeyword>,
    /// Estimated per-person cost in the catalog's currency unit.
    #[serde(default)]
    pub avg_price: Option<u32>,
    /// Aggregate customer rating, presentation-only.
    #[serde(default)]
    pub rating: Option<f32>,
}

impl Restaurant {
    /// Creates a candidate with no attributes beyond identity.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Restaurant {
            id: id.into(),
            name: name.into(),
            category: None,
            keywords: BTreeSet::new(),
            avg_price: None,
            rating: None,
        }
    }

    /// Sets the cuisine category.
    pub fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Adds descriptive keywords.
    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = FoodKeyword>) -> Self {
        self.keywords.extend(keywords);
        self
    }

    /// Sets the estimated per-person cost.
    pub fn with_avg_price(mut self, avg_price: u32) -> Self {
        self.avg_price = Some(avg_price);
        self
    }

    /// Sets the customer rating.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Returns true if the candidate carries any of the given keywords.
    pub fn has_any_keyword(&self, keywords: &BTreeSet<FoodKeyword>) -> bool {
        !self.keywords.is_disjoint(keywords)
    }
}
