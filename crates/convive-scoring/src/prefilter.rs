//! Hard exclusion of candidates nobody in the group can eat.
//!
//! Runs before scoring: a candidate carrying any keyword from any member's
//! `cannot_eat` set is removed outright. Exclusions never reach the scorer
//! as a penalty.

use std::collections::BTreeSet;

use convive_core::{FoodKeyword, Member, Restaurant};

/// The union of every member's `cannot_eat` set.
pub fn inedible_keywords(members: &[Member]) -> BTreeSet<FoodKeyword> {
    members
        .iter()
        .flat_map(|member| member.preference.cannot_eat.iter().copied())
        .collect()
}

/// Drops candidates whose keywords intersect the group's exclusions.
///
/// With no exclusions in the group this is the identity. Candidates with
/// no keywords always pass.
pub fn exclude_inedible(mut restaurants: Vec<Restaurant>, members: &[Member]) -> Vec<Restaurant> {
    let inedible = inedible_keywords(members);
    if inedible.is_empty() {
        return restaurants;
    }
    restaurants.retain(|restaurant| !restaurant.has_any_keyword(&inedible));
    restaurants
}
