//! Closed tag vocabularies for cuisine styles and flavor/ingredient keywords.
//!
//! Both preferences and restaurant candidates draw from these enumerations,
//! so the scoring engine compares tags by plain equality. External catalog
//! adapters are responsible for mapping whatever taxonomy they consume onto
//! these variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cuisine-style tag.
///
/// Used both as a restaurant attribute and inside preference records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Korean,
    Chinese,
    Japanese,
    Western,
    Asian,
    Fusion,
    FastFood,
    CafeDessert,
}

impl FoodCategory {
    /// Every category, in declaration order.
    pub const ALL: [FoodCategory; 8] = [
        FoodCategory::Korean,
        FoodCategory::Chinese,
        FoodCategory::Japanese,
        FoodCategory::Western,
        FoodCategory::Asian,
        FoodCategory::Fusion,
        FoodCategory::FastFood,
        FoodCategory::CafeDessert,
    ];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            FoodCategory::Korean => "Korean",
            FoodCategory::Chinese => "Chinese",
            FoodCategory::Japanese => "Japanese",
            FoodCategory::Western => "Western",
            FoodCategory::Asian => "Asian",
            FoodCategory::Fusion => "Fusion",
            FoodCategory::FastFood => "Fast Food",
            FoodCategory::CafeDessert => "Cafe/Dessert",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A flavor or ingredient tag.
///
/// Keywords describe properties of a restaurant's menu (spicy, seafood, ...)
/// and double as the vocabulary for liked/disliked/cannot-eat preference sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodKeyword {
    Spicy,
    Seafood,
    Meat,
    Vegetarian,
    Dairy,
    Gluten,
    Nuts,
    Raw,
}

impl FoodKeyword {
    /// Every keyword, in declaration order.
    pub const ALL: [FoodKeyword; 8] = [
        FoodKeyword::Spicy,
        FoodKeyword::Seafood,
        FoodKeyword::Meat,
        FoodKeyword::Vegetarian,
        FoodKeyword::Dairy,
        FoodKeyword::Gluten,
        FoodKeyword::Nuts,
        FoodKeyword::Raw,
    ];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            FoodKeyword::Spicy => "Spicy",
            FoodKeyword::Seafood => "Seafood",
            FoodKeyword::Meat => "Meat",
            FoodKeyword::Vegetarian => "Vegetarian",
            FoodKeyword::Dairy => "Dairy",
            FoodKeyword::Gluten => "Gluten",
            FoodKeyword::Nuts => "Nuts",
            FoodKeyword::Raw => "Raw",
        }
    }
}

impl fmt::Display for FoodKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
