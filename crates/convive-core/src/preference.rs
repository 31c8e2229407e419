//! Preference records, budget ranges, and group members.
//!
//! A [`Preference`] captures one member's food likes, dislikes, hard
//! exclusions, and budget. Every field defaults to empty so partially
//! filled records deserialize and score without special cases.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::food::{FoodCategory, FoodKeyword};

/// An inclusive per-person budget window in the catalog's currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    /// Creates a budget range. Callers are expected to pass `min <= max`;
    /// the scoring engine does not repair inverted ranges.
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "inverted budget range");
        BudgetRange { min, max }
    }

    /// Returns true if `price` lies within the range, inclusive on both ends.
    #[inline]
    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One member's structured food preferences.
///
/// The engine tolerates any shape, including a record that lists the same
/// tag as both liked and disliked: scoring applies both adjustments rather
/// than rejecting the record. Input surfaces that want to prevent such
/// records can call [`Preference::conflicts`] before accepting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preference {
    pub liked_categories: BTreeSet<FoodCategory>,
    pub disliked_categories: BTreeSet<FoodCategory>,
    pub liked_keywords: BTreeSet<FoodKeyword>,
    pub disliked_keywords: BTreeSet<FoodKeyword>,
    /// Hard exclusions. Candidates carrying any of these keywords are
    /// filtered out before scoring; they never act as a score penalty.
    pub cannot_eat: BTreeSet<FoodKeyword>,
    pub budget: Option<BudgetRange>,
}

impl Preference {
    /// Creates an empty record (no opinions, no budget).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field holds any data.
    pub fn is_empty(&self) -> bool {
        self.liked_categories.is_empty()
            && self.disliked_categories.is_empty()
            && self.liked_keywords.is_empty()
            && self.disliked_keywords.is_empty()
            && self.cannot_eat.is_empty()
            && self.budget.is_none()
    }

    /// Reports tags that appear on both sides of an axis.
    ///
    /// A well-formed record yields an empty vector. The checks mirror the
    /// mutual-exclusion rules a preference input surface enforces:
    /// a category cannot be liked and disliked, a keyword cannot be liked
    /// and disliked, and a liked or disliked keyword cannot also be marked
    /// inedible.
    pub fn conflicts(&self) -> Vec<PreferenceConflict> {
        let mut found = Vec::new();
        for &category in self.liked_categories.intersection(&self.disliked_categories) {
            found.push(PreferenceConflict::Category(category));
        }
        for &keyword in self.liked_keywords.intersection(&self.disliked_keywords) {
            found.push(PreferenceConflict::Keyword(keyword));
        }
        for &keyword in self.liked_keywords.intersection(&self.cannot_eat) {
            found.push(PreferenceConflict::LikedInedible(keyword));
        }
        for &keyword in self.disliked_keywords.intersection(&self.cannot_eat) {
            found.push(PreferenceConflict::DislikedInedible(keyword));
        }
        found
    }
}

/// A contradiction inside a single preference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreferenceConflict {
    #[error("category {0} is both liked and disliked")]
    Category(FoodCategory),

    #[error("keyword {0} is both liked and disliked")]
    Keyword(FoodKeyword),

    #[error("keyword {0} is liked but marked inedible")]
    LikedInedible(FoodKeyword),

    #[error("keyword {0} is disliked and also marked inedible")]
    DislikedInedible(FoodKeyword),
}

/// Opaque member identifier, assigned by the group surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A group member: identity plus preference snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub preference: Preference,
}

impl Member {
    /// Creates a member with the given preference.
    pub fn new(id: MemberId, name: impl Into<String>, preference: Preference) -> Self {
        Member {
            id,
            name: name.into(),
            preference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_contains_inclusive() {
        let budget = BudgetRange::new(10_000, 20_000);
        assert!(budget.contains(10_000));
        assert!(budget.contains(15_000));
        assert!(budget.contains(20_000));
        assert!(!budget.contains(9_999));
        assert!(!budget.contains(20_001));
    }

    #[test]
    fn test_default_is_empty() {
        let pref = Preference::new();
        assert!(pref.is_empty());
        assert!(pref.conflicts().is_empty());
    }

    #[test]
    fn test_conflicts_detected_per_axis() {
        let mut pref = Preference::new();
        pref.liked_categories.insert(FoodCategory::Korean);
        pref.disliked_categories.insert(FoodCategory::Korean);
        pref.liked_keywords.insert(FoodKeyword::Spicy);
        pref.disliked_keywords.insert(FoodKeyword::Spicy);
        pref.disliked_keywords.insert(FoodKeyword::Raw);
        pref.cannot_eat.insert(FoodKeyword::Raw);

        let conflicts = pref.conflicts();
        assert_eq!(conflicts.len(), 3);
        assert!(conflicts.contains(&PreferenceConflict::Category(FoodCategory::Korean)));
        assert!(conflicts.contains(&PreferenceConflict::Keyword(FoodKeyword::Spicy)));
        assert!(conflicts.contains(&PreferenceConflict::DislikedInedible(FoodKeyword::Raw)));
    }

    #[test]
    fn test_no_conflict_across_axes() {
        // A category dislike and a keyword like are unrelated axes.
        let mut pref = Preference::new();
        pref.disliked_categories.insert(FoodCategory::Japanese);
        pref.liked_keywords.insert(FoodKeyword::Seafood);
        assert!(pref.conflicts().is_empty());
    }

    #[test]
    fn test_conflict_display() {
        let conflict = PreferenceConflict::Category(FoodCategory::Korean);
        assert_eq!(
            conflict.to_string(),
            "category Korean is both liked and disliked"
        );
    }

    #[test]
    fn test_partial_record_deserializes() {
        let pref: Preference =
            serde_json::from_str(r#"{ "liked_categories": ["korean"] }"#).unwrap();
        assert_eq!(pref.liked_categories.len(), 1);
        assert!(pref.disliked_categories.is_empty());
        assert!(pref.budget.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut pref = Preference::new();
        pref.liked_categories.insert(FoodCategory::Japanese);
        pref.cannot_eat.insert(FoodKeyword::Nuts);
        pref.budget = Some(BudgetRange::new(8_000, 25_000));

        let json = serde_json::to_string(&pref).unwrap();
        let back: Preference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pref);
    }
}
