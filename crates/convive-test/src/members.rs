//! Member fixtures covering the preference shapes scoring tests need.

use convive_core::{BudgetRange, FoodCategory, FoodKeyword, Member, MemberId, Preference};

/// A member with a completely empty preference record.
pub fn omnivore(id: u32) -> Member {
    Member::new(MemberId(id), format!("omnivore-{id}"), Preference::new())
}

/// A member who likes Korean food and has no other opinions.
pub fn korean_lover(id: u32) -> Member {
    let mut preference = Preference::new();
    preference.liked_categories.insert(FoodCategory::Korean);
    Member::new(MemberId(id), format!("korean-lover-{id}"), preference)
}

/// A member who dislikes Korean food and carries a budget window.
pub fn korean_hater(id: u32, min: u32, max: u32) -> Member {
    let mut preference = Preference::new();
    preference.disliked_categories.insert(FoodCategory::Korean);
    preference.budget = Some(BudgetRange::new(min, max));
    Member::new(MemberId(id), format!("korean-hater-{id}"), preference)
}

/// A member whose only opinion is a budget window.
pub fn budget_diner(id: u32, min: u32, max: u32) -> Member {
    let mut preference = Preference::new();
    preference.budget = Some(BudgetRange::new(min, max));
    Member::new(MemberId(id), format!("budget-diner-{id}"), preference)
}

/// A member who cannot eat the given keywords, with no scored opinions.
pub fn allergic(id: u32, keywords: impl IntoIterator<Item = FoodKeyword>) -> Member {
    let mut preference = Preference::new();
    preference.cannot_eat.extend(keywords);
    Member::new(MemberId(id), format!("allergic-{id}"), preference)
}

/// A three-person group: a Korean lover, a Korean hater with budget
/// 10000-20000, and an omnivore. Matches the worked example in the
/// consensus tests.
pub fn sample_group() -> Vec<Member> {
    vec![
        korean_lover(1),
        korean_hater(2, 10_000, 20_000),
        omnivore(3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_group_shapes() {
        let group = sample_group();
        assert_eq!(group.len(), 3);
        assert!(group[0]
            .preference
            .liked_categories
            .contains(&FoodCategory::Korean));
        assert!(group[1].preference.budget.is_some());
        assert!(group[2].preference.is_empty());
    }

    #[test]
    fn test_fixtures_are_well_formed() {
        for member in sample_group() {
            assert!(member.preference.conflicts().is_empty());
        }
        assert!(allergic(9, [FoodKeyword::Nuts])
            .preference
            .conflicts()
            .is_empty());
    }
}
