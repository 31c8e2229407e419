//! Per-member compatibility scoring.
//!
//! A fixed base-plus-adjustments model: every rule is checked
//! unconditionally from a base of 50 and the sum is clamped into
//! `[0, 100]`. The rules are order-independent and infallible; absent
//! preference fields or restaurant attributes simply contribute nothing.
//!
//! `cannot_eat` exclusions are deliberately not part of scoring - they are
//! a hard pre-filter on the candidate set (see [`crate::prefilter`]), never
//! a penalty.

use std::fmt;

use convive_core::{CompatScore, FoodCategory, FoodKeyword, Preference, Restaurant};

const LIKED_CATEGORY_BONUS: i32 = 30;
const DISLIKED_CATEGORY_PENALTY: i32 = 40;
const DISLIKED_KEYWORD_PENALTY: i32 = 20;
const LIKED_KEYWORD_BONUS: i32 = 15;
const BUDGET_ADJUSTMENT: i32 = 10;

/// Scores one member's preference against one candidate restaurant.
///
/// The liked- and disliked-category checks are independent: a malformed
/// record listing the same category on both sides nets -10 rather than
/// being rejected.
///
/// # Examples
///
/// ```
/// use convive_core::{FoodCategory, Preference, Restaurant};
/// use convive_scoring::score;
///
/// let mut preference = Preference::new();
/// preference.liked_categories.insert(FoodCategory::Korean);
/// let restaurant = Restaurant::new("r1", "Charcoal Lane")
///     .with_category(FoodCategory::Korean);
///
/// assert_eq!(score(&preference, &restaurant).value(), 80);
/// ```
pub fn score(preference: &Preference, restaurant: &Restaurant) -> CompatScore {
    let mut raw = CompatScore::BASE.value() as i32;

    if let Some(category) = restaurant.category {
        if preference.liked_categories.contains(&category) {
            raw += LIKED_CATEGORY_BONUS;
        }
        if preference.disliked_categories.contains(&category) {
            raw -= DISLIKED_CATEGORY_PENALTY;
        }
    }

    // Flat adjustments: one penalty/bonus no matter how many keywords match.
    if restaurant.has_any_keyword(&preference.disliked_keywords) {
        raw -= DISLIKED_KEYWORD_PENALTY;
    }
    if restaurant.has_any_keyword(&preference.liked_keywords) {
        raw += LIKED_KEYWORD_BONUS;
    }

    // Skipped entirely unless both a budget and a price estimate exist.
    if let (Some(budget), Some(price)) = (preference.budget, restaurant.avg_price) {
        if budget.contains(price) {
            raw += BUDGET_ADJUSTMENT;
        } else {
            raw -= BUDGET_ADJUSTMENT;
        }
    }

    CompatScore::clamped(raw)
}

/// One rule that fired while scoring a member against a restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adjustment {
    /// The restaurant's category is in the member's liked set.
    LikedCategory(FoodCategory),
    /// The restaurant's category is in the member's disliked set.
    DislikedCategory(FoodCategory),
    /// At least one disliked keyword matched; carries the matches.
    DislikedKeywords(Vec<FoodKeyword>),
    /// At least one liked keyword matched; carries the matches.
    LikedKeywords(Vec<FoodKeyword>),
    /// The price estimate fell inside the member's budget window.
    WithinBudget { price: u32 },
    /// The price estimate fell outside the member's budget window.
    OutsideBudget { price: u32 },
}

impl Adjustment {
    /// The signed score contribution of this rule.
    pub fn delta(&self) -> i32 {
        match self {
            Adjustment::LikedCategory(_) => LIKED_CATEGORY_BONUS,
            Adjustment::DislikedCategory(_) => -DISLIKED_CATEGORY_PENALTY,
            Adjustment::DislikedKeywords(_) => -DISLIKED_KEYWORD_PENALTY,
            Adjustment::LikedKeywords(_) => LIKED_KEYWORD_BONUS,
            Adjustment::WithinBudget { .. } => BUDGET_ADJUSTMENT,
            Adjustment::OutsideBudget { .. } => -BUDGET_ADJUSTMENT,
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjustment::LikedCategory(category) => {
                write!(f, "liked category {} (+{})", category, self.delta())
            }
            Adjustment::DislikedCategory(category) => {
                write!(f, "disliked category {} ({})", category, self.delta())
            }
            Adjustment::DislikedKeywords(keywords) => {
                write!(f, "disliked keywords {} ({})", join(keywords), self.delta())
            }
            Adjustment::LikedKeywords(keywords) => {
                write!(f, "liked keywords {} (+{})", join(keywords), self.delta())
            }
            Adjustment::WithinBudget { price } => {
                write!(f, "price {} within budget (+{})", price, self.delta())
            }
            Adjustment::OutsideBudget { price } => {
                write!(f, "price {} outside budget ({})", price, self.delta())
            }
        }
    }
}

fn join(keywords: &[FoodKeyword]) -> String {
    keywords
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The rules that fired for one member/restaurant pair, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub adjustments: Vec<Adjustment>,
}

impl ScoreBreakdown {
    /// The unclamped sum: base plus every adjustment delta.
    pub fn raw_total(&self) -> i32 {
        let deltas: i32 = self.adjustments.iter().map(Adjustment::delta).sum();
        CompatScore::BASE.value() as i32 + deltas
    }

    /// The final score; always equals [`score`] for the same inputs.
    pub fn total(&self) -> CompatScore {
        CompatScore::clamped(self.raw_total())
    }
}

/// Scores one pair like [`score`], materializing which rules fired.
///
/// Intended for presentation ("why did this restaurant rank here?");
/// the ranking hot path uses [`score`] directly.
pub fn explain(preference: &Preference, restaurant: &Restaurant) -> ScoreBreakdown {
    let mut adjustments = Vec::new();

    if let Some(category) = restaurant.category {
        if preference.liked_categories.contains(&category) {
            adjustments.push(Adjustment::LikedCategory(category));
        }
        if preference.disliked_categories.contains(&category) {
            adjustments.push(Adjustment::DislikedCategory(category));
        }
    }

    let disliked: Vec<FoodKeyword> = restaurant
        .keywords
        .intersection(&preference.disliked_keywords)
        .copied()
        .collect();
    if !disliked.is_empty() {
        adjustments.push(Adjustment::DislikedKeywords(disliked));
    }

    let liked: Vec<FoodKeyword> = restaurant
        .keywords
        .intersection(&preference.liked_keywords)
        .copied()
        .collect();
    if !liked.is_empty() {
        adjustments.push(Adjustment::LikedKeywords(liked));
    }

    if let (Some(budget), Some(price)) = (preference.budget, restaurant.avg_price) {
        if budget.contains(price) {
            adjustments.push(Adjustment::WithinBudget { price });
        } else {
            adjustments.push(Adjustment::OutsideBudget { price });
        }
    }

    ScoreBreakdown { adjustments }
}
